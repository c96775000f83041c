//! Modular Fast Doubling and Pisano periods.
//!
//! Computes F(n) mod m with a reduction after every product, so
//! intermediate values never grow past m^2 regardless of n.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::PISANO_BOUND_FACTOR;
use crate::error::{FibError, FibResult};

/// Compute `(F(n) mod m, F(n+1) mod m)` using modular Fast Doubling.
///
/// `n` may be arbitrarily large: its bits are scanned MSB to LSB.
pub fn fib_pair_mod(n: &BigUint, modulus: &BigUint) -> FibResult<(BigUint, BigUint)> {
    if modulus.is_zero() {
        return Err(FibError::validation("modulus cannot be zero"));
    }

    let mut fk = BigUint::zero() % modulus;
    let mut fk1 = BigUint::one() % modulus;

    for i in (0..n.bits()).rev() {
        // Modular doubling step
        let fk_sq = (&fk * &fk) % modulus;
        let fk1_sq = (&fk1 * &fk1) % modulus;
        let cross = (&fk * &fk1) % modulus;

        // F(2k) = (2*cross - fk_sq) mod m
        let double_cross = (&cross << 1u32) % modulus;
        let f2k = if double_cross >= fk_sq {
            double_cross - &fk_sq
        } else {
            modulus - &fk_sq + double_cross
        };

        // F(2k+1) = (fk1_sq + fk_sq) mod m
        let f2k1 = (fk1_sq + &fk_sq) % modulus;

        fk = f2k;
        fk1 = f2k1;

        // Conditional addition (modular)
        if n.bit(i) {
            let sum = (&fk + &fk1) % modulus;
            fk = std::mem::replace(&mut fk1, sum);
        }
    }

    Ok((fk, fk1))
}

/// Compute F(n) mod m.
pub fn fib_mod(n: &BigUint, modulus: &BigUint) -> FibResult<BigUint> {
    fib_pair_mod(n, modulus).map(|(f, _)| f)
}

/// Period of the Fibonacci sequence modulo `m`.
///
/// Walks the pair `(F(k) mod m, F(k+1) mod m)` until it returns to `(0, 1)`.
/// The period never exceeds `6m`; running past that bound is an engine
/// defect and reported as [`FibError::Engine`].
pub fn pisano(m: u64) -> FibResult<u64> {
    if m == 0 {
        return Err(FibError::validation("modulus cannot be zero"));
    }
    if m == 1 {
        return Ok(1);
    }

    let bound = m.saturating_mul(PISANO_BOUND_FACTOR);
    let m = u128::from(m);
    let (mut prev, mut curr) = (0u128, 1u128);
    for step in 1..=bound {
        let next = (prev + curr) % m;
        prev = curr;
        curr = next;
        if prev == 0 && curr == 1 {
            return Ok(step);
        }
    }

    Err(FibError::Engine(format!(
        "Pisano period search exceeded theoretical bound {bound} for modulus {m}"
    )))
}
