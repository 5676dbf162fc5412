//! Gaussian integer entity with memoized norm and primality.
//!
//! # Invariants
//!
//! 1. `a` and `b` never change after construction.
//! 2. `norm()` and `verdict()` are computed at most once per value; later
//!    calls return the cached result.
//! 3. Equality and hashing only look at `(a, b)`. Whether a value has
//!    already been evaluated is not observable through `==`.

use std::cell::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use crate::error::{CoreError, Result};
use crate::logging::trace;
use crate::oracle::{self, Verdict};

/// A lattice point `a+bi`.
#[derive(Clone)]
pub struct GaussianInteger {
    a: i32,
    b: i32,
    norm: OnceCell<u64>,
    verdict: OnceCell<Verdict>,
}

impl GaussianInteger {
    /// Create `a+bi`. Nothing is evaluated until first asked for.
    #[must_use]
    pub const fn new(a: i32, b: i32) -> Self {
        Self {
            a,
            b,
            norm: OnceCell::new(),
            verdict: OnceCell::new(),
        }
    }

    /// Create from floating-point coordinates.
    ///
    /// Fails with [`CoreError::InvalidArgument`] unless both values are
    /// finite whole numbers within the `i32` coordinate range.
    pub fn from_f64(a: f64, b: f64) -> Result<Self> {
        Ok(Self::new(integral_coord(a)?, integral_coord(b)?))
    }

    /// Real part.
    #[inline]
    #[must_use]
    pub const fn a(&self) -> i32 {
        self.a
    }

    /// Imaginary part.
    #[inline]
    #[must_use]
    pub const fn b(&self) -> i32 {
        self.b
    }

    /// `(a, b)` as a tuple.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> (i32, i32) {
        (self.a, self.b)
    }

    /// `a² + b²`. Always fits: `2 * (2^31)^2 = 2^63`.
    #[must_use]
    pub fn norm(&self) -> u64 {
        *self.norm.get_or_init(|| {
            u64::from(self.a.unsigned_abs()).pow(2) + u64::from(self.b.unsigned_abs()).pow(2)
        })
    }

    /// The oracle rule that decides this point's primality.
    pub fn verdict(&self) -> Verdict {
        *self.verdict.get_or_init(|| {
            let verdict = oracle::classify(self.a, self.b, self.norm());
            trace!(
                message = "gaussian.verdict",
                a = self.a,
                b = self.b,
                rule = verdict.rule()
            );
            verdict
        })
    }

    /// Whether this is a Gaussian prime.
    #[inline]
    pub fn is_prime(&self) -> bool {
        self.verdict().is_prime()
    }

    /// Whether primality has already been decided for this value.
    #[inline]
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.verdict.get().is_some()
    }

    /// Componentwise sum, failing if a coordinate leaves the `i32` range.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        match (self.a.checked_add(other.a), self.b.checked_add(other.b)) {
            (Some(a), Some(b)) => Ok(Self::new(a, b)),
            _ => Err(CoreError::invalid(format!(
                "sum of {} and {} overflows the coordinate range",
                self, other
            ))),
        }
    }
}

fn integral_coord(value: f64) -> Result<i32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(CoreError::invalid(format!(
            "Gaussian integer coordinates must be integers, got {value}"
        )));
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(CoreError::invalid(format!(
            "coordinate {value} is outside the supported range"
        )));
    }
    Ok(value as i32)
}

impl TryFrom<(i64, i64)> for GaussianInteger {
    type Error = CoreError;

    fn try_from((a, b): (i64, i64)) -> Result<Self> {
        let coord = |v: i64| {
            i32::try_from(v).map_err(|_| {
                CoreError::invalid(format!("coordinate {v} is outside the supported range"))
            })
        };
        Ok(Self::new(coord(a)?, coord(b)?))
    }
}

impl From<(i32, i32)> for GaussianInteger {
    fn from((a, b): (i32, i32)) -> Self {
        Self::new(a, b)
    }
}

/// `+` goes through [`GaussianInteger::checked_add`], so a sum outside the
/// coordinate range is an error rather than a wrapped point.
impl Add for &GaussianInteger {
    type Output = Result<GaussianInteger>;

    fn add(self, rhs: Self) -> Result<GaussianInteger> {
        self.checked_add(rhs)
    }
}

impl Add for GaussianInteger {
    type Output = Result<GaussianInteger>;

    fn add(self, rhs: Self) -> Result<GaussianInteger> {
        self.checked_add(&rhs)
    }
}

impl PartialEq for GaussianInteger {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl Eq for GaussianInteger {}

impl Hash for GaussianInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.hash(state);
        self.b.hash(state);
    }
}

impl fmt::Display for GaussianInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.a, self.b)
    }
}

impl fmt::Debug for GaussianInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaussianInteger")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("norm", &self.norm.get())
            .field("verdict", &self.verdict.get())
            .finish()
    }
}
