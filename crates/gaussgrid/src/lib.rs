#![forbid(unsafe_code)]

//! Gaussian prime counting with an incremental grid cache.
//!
//! This crate is the public facade: it re-exports the entity and oracle
//! from `gaussgrid-core` and the grid, counter, and sweep from
//! `gaussgrid-count`.
//!
//! ```
//! use gaussgrid::prelude::*;
//!
//! let (found, grid) = count(100.0, None)?;
//! assert_eq!(found, count_fresh(100.0)?);
//! let (xs, ys) = coord_data(grid.iter(), true);
//! assert_eq!(xs.len(), ys.len());
//! # Ok::<(), CountError>(())
//! ```

pub use gaussgrid_core;
pub use gaussgrid_count;

pub mod prelude {
    pub use gaussgrid_core::{CoreError, GaussianInteger, Verdict};
    pub use gaussgrid_count::{
        CountConfig, CountError, GridStats, GrowableGrid, Sweep, SweepConfig, SweepPoint,
        coord_data, count, count_fresh, count_in, count_with, grid_points, prime_points, sweep,
    };
}
