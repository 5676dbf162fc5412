//! Gaussian primality oracle.
//!
//! The decision is a fixed precedence of cases, evaluated top to bottom:
//!
//! 1. `(0,0)` is not prime.
//! 2. `(1,0)` is the unit 1, not prime.
//! 3. `(1,1)` is the ramified prime `1+i` (norm 2).
//! 4. `(a,0)` with `a mod 4 == 3` and `a` a rational prime is inert.
//! 5. Anything else is prime iff its norm is a rational prime.
//!
//! Rule 4 only looks at the real axis. A point such as `(0,3)` falls through
//! to rule 5 and is classified by its norm (9, composite). The precedence is
//! load-bearing: reordering or mirroring the rules changes which points are
//! reported as prime.

use std::fmt;

use crate::rational;

/// The rule that decided a point's primality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// `(0,0)`.
    Zero,
    /// `(1,0)`.
    One,
    /// `(1,1)`, the prime above 2.
    Ramified,
    /// A rational prime `p ≡ 3 (mod 4)` on the real axis.
    Inert,
    /// Norm is a rational prime.
    PrimeNorm,
    /// Norm is not a rational prime.
    NonPrimeNorm,
}

impl Verdict {
    #[must_use]
    pub const fn is_prime(self) -> bool {
        matches!(self, Self::Ramified | Self::Inert | Self::PrimeNorm)
    }

    /// Stable rule name, used as a log field.
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Ramified => "ramified",
            Self::Inert => "inert",
            Self::PrimeNorm => "prime_norm",
            Self::NonPrimeNorm => "non_prime_norm",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule())
    }
}

/// Classify `a+bi`, whose norm is `norm`.
#[must_use]
pub fn classify(a: i32, b: i32, norm: u64) -> Verdict {
    match (a, b) {
        (0, 0) => Verdict::Zero,
        (1, 0) => Verdict::One,
        (1, 1) => Verdict::Ramified,
        (a, 0) if a.rem_euclid(4) == 3 && u64::try_from(a).is_ok_and(rational::is_prime) => {
            Verdict::Inert
        }
        _ if rational::is_prime(norm) => Verdict::PrimeNorm,
        _ => Verdict::NonPrimeNorm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(a: i32, b: i32) -> u64 {
        u64::from(a.unsigned_abs()).pow(2) + u64::from(b.unsigned_abs()).pow(2)
    }

    fn verdict(a: i32, b: i32) -> Verdict {
        classify(a, b, norm(a, b))
    }

    #[test]
    fn special_points_take_precedence() {
        assert_eq!(verdict(0, 0), Verdict::Zero);
        assert_eq!(verdict(1, 0), Verdict::One);
        assert_eq!(verdict(1, 1), Verdict::Ramified);
    }

    #[test]
    fn inert_primes_on_real_axis() {
        for p in [3, 7, 11, 19, 23, 31, 43] {
            assert_eq!(verdict(p, 0), Verdict::Inert, "p = {p}");
        }
    }

    #[test]
    fn real_axis_non_inert_values() {
        // 2 ≡ 2 (mod 4): norm 4.
        assert_eq!(verdict(2, 0), Verdict::NonPrimeNorm);
        // 5 ≡ 1 (mod 4) splits: norm 25.
        assert_eq!(verdict(5, 0), Verdict::NonPrimeNorm);
        // 15 ≡ 3 (mod 4) but composite.
        assert_eq!(verdict(15, 0), Verdict::NonPrimeNorm);
    }

    #[test]
    fn imaginary_axis_falls_through_to_norm_rule() {
        assert_eq!(verdict(0, 3), Verdict::NonPrimeNorm);
        assert_eq!(verdict(0, 7), Verdict::NonPrimeNorm);
        // Norm 1 is not a rational prime.
        assert_eq!(verdict(0, 1), Verdict::NonPrimeNorm);
    }

    #[test]
    fn split_primes_by_norm() {
        assert_eq!(verdict(1, 2), Verdict::PrimeNorm);
        assert_eq!(verdict(2, 1), Verdict::PrimeNorm);
        assert_eq!(verdict(2, 3), Verdict::PrimeNorm);
        assert_eq!(verdict(2, 2), Verdict::NonPrimeNorm);
    }

    #[test]
    fn negative_real_axis_uses_euclidean_remainder() {
        // -1 mod 4 == 3 under floor semantics, but -1 is not a rational prime.
        assert_eq!(verdict(-1, 0), Verdict::NonPrimeNorm);
        // -3 mod 4 == 1: falls to the norm rule, 9 is composite.
        assert_eq!(verdict(-3, 0), Verdict::NonPrimeNorm);
        // (-1,1) is an associate of 1+i with norm 2.
        assert_eq!(verdict(-1, 1), Verdict::PrimeNorm);
    }

    #[test]
    fn is_prime_matches_rule_set() {
        assert!(!Verdict::Zero.is_prime());
        assert!(!Verdict::One.is_prime());
        assert!(Verdict::Ramified.is_prime());
        assert!(Verdict::Inert.is_prime());
        assert!(Verdict::PrimeNorm.is_prime());
        assert!(!Verdict::NonPrimeNorm.is_prime());
    }

    #[test]
    fn display_uses_rule_name() {
        assert_eq!(Verdict::PrimeNorm.to_string(), "prime_norm");
    }
}
