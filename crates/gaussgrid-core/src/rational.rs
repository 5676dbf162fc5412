//! Rational-integer services: primality and integer square root over `u64`.
//!
//! Primality is a deterministic Miller-Rabin test. The witness set below is
//! sufficient for every `n < 2^64`, so the answer is exact, not probabilistic.

/// Witnesses that make Miller-Rabin deterministic on the full `u64` range.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Floor of the square root of `n`.
#[inline]
#[must_use]
pub fn isqrt(n: u64) -> u64 {
    n.isqrt()
}

/// Whether `n` is a rational prime.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    // Trial division by the witnesses doubles as the small-n fast path.
    for &p in &WITNESSES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }
    if n < 41 * 41 {
        return true;
    }

    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    WITNESSES.iter().all(|&w| passes_round(n, d, s, w))
}

/// One Miller-Rabin round: `n - 1 = d * 2^s` with `d` odd.
fn passes_round(n: u64, d: u64, s: u32, witness: u64) -> bool {
    let mut x = pow_mod(witness, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    for _ in 1..s {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc = 1u64;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}
