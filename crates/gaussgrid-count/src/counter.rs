//! Incremental prime counting.
//!
//! # Algorithm
//!
//! For a radius `r`, let `bound = floor(r)` (norms are integers, so
//! `norm <= r` iff `norm <= bound`) and `limit = isqrt(bound) + 1`. Every
//! point with norm `<= r` has both coordinates below `limit`.
//!
//! 1. Count the primes with norm `<= bound` among the entries the grid
//!    already holds. Their primality is memoized, so this is a scan.
//! 2. Extend the grid to cover `[0, limit)²`, counting each new entry that is
//!    prime with norm `<= bound`. New entries are appended whether prime or
//!    not.
//!
//! Step 1 and step 2 visit disjoint entries, so nothing is counted twice, and
//! afterwards the grid covers every point step 1 of the next call needs.
//!
//! # Invariants
//!
//! 1. Across calls on one grid, no entry's primality is evaluated twice.
//! 2. The result equals [`count_fresh`] for the same radius, whatever radii
//!    the grid saw before.
//! 3. An invalid radius or an exceeded limit leaves the grid untouched.

use gaussgrid_core::GaussianInteger;
use gaussgrid_core::rational::isqrt;

use crate::config::CountConfig;
use crate::error::{CountError, Result};
use crate::grid::GrowableGrid;
use crate::logging::debug;

/// Largest usable limit: coordinates `0..limit` must fit `i32`.
const COORD_LIMIT: u64 = i32::MAX as u64 + 1;

/// Norm bound and per-axis coverage limit derived from a radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Coverage {
    pub(crate) bound: u64,
    pub(crate) limit: usize,
}

impl Coverage {
    pub(crate) fn resolve(r: f64, config: &CountConfig) -> Result<Self> {
        if !r.is_finite() || r < 0.0 {
            return Err(CountError::radius(r));
        }
        // Saturating cast; anything that large fails the limit checks below.
        let bound = r.floor() as u64;
        let limit = isqrt(bound) + 1;
        if limit > COORD_LIMIT {
            return Err(CountError::LimitExceeded {
                limit,
                max: COORD_LIMIT,
            });
        }
        if let Some(max) = config.max_limit
            && limit > max
        {
            return Err(CountError::LimitExceeded { limit, max });
        }
        Ok(Self {
            bound,
            limit: limit as usize,
        })
    }
}

/// Per-axis coverage limit `floor(sqrt(r)) + 1` for a radius.
pub fn coverage_limit(r: f64) -> Result<u64> {
    Coverage::resolve(r, &CountConfig::default()).map(|c| c.limit as u64)
}

/// Count Gaussian primes with norm `<= r` in the closed first quadrant,
/// reusing `grid` from a previous call when given.
///
/// The grid comes back grown and must be passed to the next call to keep
/// the cached primality results.
pub fn count(r: f64, grid: Option<GrowableGrid>) -> Result<(u64, GrowableGrid)> {
    count_with(r, grid, &CountConfig::default())
}

/// [`count`] with explicit configuration.
pub fn count_with(
    r: f64,
    grid: Option<GrowableGrid>,
    config: &CountConfig,
) -> Result<(u64, GrowableGrid)> {
    let mut grid = grid.unwrap_or_else(|| initial_grid(config));
    let found = count_in(&mut grid, r, config)?;
    Ok((found, grid))
}

/// Count into a borrowed grid.
pub fn count_in(grid: &mut GrowableGrid, r: f64, config: &CountConfig) -> Result<u64> {
    let coverage = Coverage::resolve(r, config)?;

    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!(
        "grid.count",
        radius = r,
        limit = coverage.limit,
        rows_before = grid.rows(),
        entries_before = grid.len(),
        count = tracing::field::Empty
    );
    #[cfg(feature = "tracing")]
    let _guard = span.enter();

    #[cfg(feature = "tracing")]
    let entries_before = grid.len();
    let covered = grid.count_covered(coverage.bound);
    let extended = grid.extend_to(coverage.limit, coverage.bound, config.parallel);
    let total = covered + extended;

    debug!(
        message = "grid.extend",
        new_entries = grid.len() - entries_before,
        rows_after = grid.rows(),
        found_existing = covered,
        found_new = extended
    );
    #[cfg(feature = "tracing")]
    span.record("count", total);

    Ok(total)
}

/// Count without a cache: build `[0, limit)²` from scratch, test each point
/// once, and drop it. Reference result for [`count`].
pub fn count_fresh(r: f64) -> Result<u64> {
    let Coverage { bound, limit } = Coverage::resolve(r, &CountConfig::default())?;
    let mut found = 0;
    for a in 0..limit {
        for b in 0..limit {
            let z = GaussianInteger::new(a as i32, b as i32);
            if z.norm() <= bound && z.is_prime() {
                found += 1;
            }
        }
    }
    Ok(found)
}

pub(crate) fn initial_grid(config: &CountConfig) -> GrowableGrid {
    if config.seed {
        GrowableGrid::seeded()
    } else {
        GrowableGrid::new()
    }
}
