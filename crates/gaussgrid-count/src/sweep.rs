//! Radius sweeps: the `(r, count)` series over an arithmetic run of radii.
//!
//! A sweep owns one grid and feeds it through every step, so the whole run
//! tests each lattice point at most once.
//!
//! ```
//! use gaussgrid_count::{SweepConfig, sweep};
//!
//! let series = sweep(&SweepConfig::new(14.0).with_interval(1.0))?;
//! assert_eq!(series.len(), 14);
//! assert_eq!(series[2].count, 1);
//! assert_eq!(series[13].count, 6);
//! # Ok::<(), gaussgrid_count::CountError>(())
//! ```

use crate::config::{CountConfig, SweepConfig};
use crate::counter::{count_in, initial_grid};
use crate::error::{CountError, Result};
use crate::grid::GrowableGrid;
use crate::logging::trace;

/// One step of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    pub radius: f64,
    pub count: u64,
}

/// Iterator over the steps of a sweep.
///
/// Yields `start + i * interval` for each `i` whose radius lies below
/// `max_radius`. After an error the iterator is exhausted.
#[derive(Debug)]
pub struct Sweep {
    count: CountConfig,
    start: f64,
    interval: f64,
    steps: usize,
    next: usize,
    grid: GrowableGrid,
}

impl Sweep {
    /// Start a sweep on a new grid.
    pub fn new(config: &SweepConfig) -> Result<Self> {
        Self::with_grid(config, initial_grid(&config.count))
    }

    /// Start a sweep that continues from an existing grid.
    pub fn with_grid(config: &SweepConfig, grid: GrowableGrid) -> Result<Self> {
        if !config.interval.is_finite() || config.interval <= 0.0 {
            return Err(CountError::InvalidInterval {
                interval: config.interval,
            });
        }
        if !config.start.is_finite() || config.start < 0.0 {
            return Err(CountError::radius(config.start));
        }
        if !config.max_radius.is_finite() {
            return Err(CountError::radius(config.max_radius));
        }

        let span = config.max_radius - config.start;
        let steps = if span > 0.0 {
            (span / config.interval).ceil() as usize
        } else {
            0
        };

        Ok(Self {
            count: config.count.clone(),
            start: config.start,
            interval: config.interval,
            steps,
            next: 0,
            grid,
        })
    }

    /// The grid as grown so far.
    #[must_use]
    pub fn grid(&self) -> &GrowableGrid {
        &self.grid
    }

    /// Stop the sweep and take the grid, e.g. to continue it later.
    #[must_use]
    pub fn into_grid(self) -> GrowableGrid {
        self.grid
    }
}

impl Iterator for Sweep {
    type Item = Result<SweepPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.steps {
            return None;
        }
        let radius = self.start + self.next as f64 * self.interval;
        self.next += 1;

        match count_in(&mut self.grid, radius, &self.count) {
            Ok(count) => {
                trace!(message = "sweep.step", radius, count);
                Some(Ok(SweepPoint { radius, count }))
            }
            Err(err) => {
                self.next = self.steps;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.next;
        (0, Some(remaining))
    }
}

/// Run a sweep to completion and collect its series.
pub fn sweep(config: &SweepConfig) -> Result<Vec<SweepPoint>> {
    Sweep::new(config)?.collect()
}
