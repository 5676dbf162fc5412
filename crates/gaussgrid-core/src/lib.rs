#![forbid(unsafe_code)]

//! Core: Gaussian integers, their memoized norms, and the primality oracle.
//!
//! A [`GaussianInteger`] is one lattice point `a+bi`. Its norm and primality
//! are computed on first access and cached on the value, so a point that
//! lives in a long-running grid pays for its primality test exactly once.
//!
//! # Example
//!
//! ```
//! use gaussgrid_core::{GaussianInteger, Verdict};
//!
//! let z = GaussianInteger::new(1, 2);
//! assert_eq!(z.norm(), 5);
//! assert!(z.is_prime());
//! assert_eq!(z.verdict(), Verdict::PrimeNorm);
//! assert_eq!(z.to_string(), "(1,2)");
//! ```

pub mod error;
pub mod gaussian;
mod logging;
pub mod oracle;
pub mod rational;

pub use error::{CoreError, Result};
pub use gaussian::GaussianInteger;
pub use oracle::Verdict;
