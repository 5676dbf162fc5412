#![forbid(unsafe_code)]

//! Incremental Gaussian prime counting over a growable grid cache.
//!
//! A [`GrowableGrid`] stores every lattice point `(a, b)` with `a, b >= 0`
//! that has been materialized so far. [`count`] takes a radius and an
//! optional grid from a previous call, grows the grid to cover the radius,
//! and returns the number of Gaussian primes with norm `<= r` together with
//! the grown grid. Points keep their memoized primality, so feeding the grid
//! back through a non-decreasing run of radii never tests a point twice.
//!
//! # Example
//!
//! ```
//! use gaussgrid_count::{count, count_fresh};
//!
//! let (small, grid) = count(2.0, None)?;
//! assert_eq!(small, 1);
//!
//! let (larger, grid) = count(25.0, Some(grid))?;
//! assert_eq!(larger, count_fresh(25.0)?);
//! assert!(grid.len() >= 36);
//! # Ok::<(), gaussgrid_count::CountError>(())
//! ```

pub mod config;
pub mod coords;
pub mod counter;
pub mod error;
pub mod grid;
pub mod logging;
pub mod sweep;

pub use config::{CountConfig, SweepConfig};
pub use coords::{coord_data, grid_points, prime_points};
pub use counter::{count, count_fresh, count_in, count_with, coverage_limit};
pub use error::{CountError, Result};
pub use grid::{GridStats, GrowableGrid};
pub use sweep::{Sweep, SweepPoint, sweep};
