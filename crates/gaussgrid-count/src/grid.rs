//! Growable first-quadrant grid of Gaussian integers.
//!
//! Rows are indexed by the real part `a`, entries within a row by the
//! imaginary part `b`:
//!
//! ```text
//!   row 0: (0,0) (0,1) (0,2) ...
//!   row 1: (1,0) (1,1) (1,2) ...
//!   row 2: (2,0) (2,1) ...
//! ```
//!
//! # Invariants
//!
//! 1. Rows are dense: every `a` in `0..rows()` has a row.
//! 2. Entries are dense: row `a` holds `b` in `0..row_len(a)`.
//! 3. Entry `b` of row `a` has coordinates exactly `(a, b)`.
//! 4. Growth is append-only. Rows are never removed or shortened, and
//!    entries are never replaced, so their memoized results survive.
//!
//! Callers can read the grid freely; only the counter grows it.

use gaussgrid_core::GaussianInteger;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::counter;
use crate::error::Result;

/// Shape and evaluation summary of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStats {
    /// Number of rows (distinct `a` values).
    pub rows: usize,
    /// Total number of materialized entries.
    pub entries: usize,
    /// Length of the longest row.
    pub widest_row: usize,
    /// Entries whose primality has been decided.
    pub evaluated: usize,
}

/// Caller-owned cache of materialized lattice points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrowableGrid {
    rows: Vec<Vec<GaussianInteger>>,
}

impl GrowableGrid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// The 2x2 seed grid covering `(0,0), (0,1), (1,0), (1,1)`.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            rows: vec![
                vec![GaussianInteger::new(0, 0), GaussianInteger::new(0, 1)],
                vec![GaussianInteger::new(1, 0), GaussianInteger::new(1, 1)],
            ],
        }
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `a`, or 0 if the row does not exist yet.
    #[must_use]
    pub fn row_len(&self, a: usize) -> usize {
        self.rows.get(a).map_or(0, Vec::len)
    }

    /// Row `a`, ordered by `b`.
    #[must_use]
    pub fn row(&self, a: usize) -> Option<&[GaussianInteger]> {
        self.rows.get(a).map(Vec::as_slice)
    }

    /// Entry `(a, b)`, if materialized.
    #[must_use]
    pub fn get(&self, a: usize, b: usize) -> Option<&GaussianInteger> {
        self.rows.get(a)?.get(b)
    }

    /// Total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// All entries, row by row.
    pub fn iter(&self) -> impl Iterator<Item = &GaussianInteger> + '_ {
        self.rows.iter().flatten()
    }

    /// All rows in order of `a`.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[GaussianInteger]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn stats(&self) -> GridStats {
        GridStats {
            rows: self.rows.len(),
            entries: self.len(),
            widest_row: self.rows.iter().map(Vec::len).max().unwrap_or(0),
            evaluated: self.iter().filter(|z| z.is_evaluated()).count(),
        }
    }

    /// Count primes with norm `<= r`, growing this grid in place.
    ///
    /// Shorthand for [`counter::count_in`] with the default configuration.
    pub fn count(&mut self, r: f64) -> Result<u64> {
        counter::count_in(self, r, &crate::CountConfig::default())
    }

    /// Primes among the entries already present with norm `<= bound`.
    pub(crate) fn count_covered(&self, bound: u64) -> u64 {
        self.iter()
            .filter(|z| z.norm() <= bound && z.is_prime())
            .count() as u64
    }

    /// Materialize every missing `(a, b)` with `a, b < limit`, returning the
    /// number of new entries that are prime with norm `<= bound`.
    ///
    /// Rows that already exist continue from their own length, so cells
    /// that are already present are never rebuilt.
    pub(crate) fn extend_to(&mut self, limit: usize, bound: u64, parallel: bool) -> u64 {
        while self.rows.len() < limit {
            self.rows.push(Vec::with_capacity(limit));
        }

        extend_rows(&mut self.rows[..limit], limit, bound, parallel)
    }
}

#[cfg(feature = "parallel")]
fn extend_rows(rows: &mut [Vec<GaussianInteger>], limit: usize, bound: u64, parallel: bool) -> u64 {
    if parallel {
        rows.par_iter_mut()
            .enumerate()
            .map(|(a, row)| extend_row(row, a, limit, bound))
            .sum()
    } else {
        extend_rows_serial(rows, limit, bound)
    }
}

#[cfg(not(feature = "parallel"))]
fn extend_rows(rows: &mut [Vec<GaussianInteger>], limit: usize, bound: u64, _parallel: bool) -> u64 {
    extend_rows_serial(rows, limit, bound)
}

fn extend_rows_serial(rows: &mut [Vec<GaussianInteger>], limit: usize, bound: u64) -> u64 {
    rows.iter_mut()
        .enumerate()
        .map(|(a, row)| extend_row(row, a, limit, bound))
        .sum()
}

/// Append `(a, b)` for `b` in `row.len()..limit`. Coordinates fit `i32`:
/// the counter rejects limits past the coordinate range.
fn extend_row(row: &mut Vec<GaussianInteger>, a: usize, limit: usize, bound: u64) -> u64 {
    let mut found = 0;
    for b in row.len()..limit {
        let z = GaussianInteger::new(a as i32, b as i32);
        if z.norm() <= bound && z.is_prime() {
            found += 1;
        }
        row.push(z);
    }
    found
}

impl<'a> IntoIterator for &'a GrowableGrid {
    type Item = &'a GaussianInteger;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Vec<GaussianInteger>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter().flatten()
    }
}
