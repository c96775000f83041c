//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k+1)^2 + F(k)^2
//!
//! Iterates over the bits of n from MSB to LSB, so no recursion is needed
//! even for very large indices.

use num_bigint::BigUint;
use num_traits::One;

/// Compute the pair `(F(n), F(n+1))`.
///
/// # Example
/// ```
/// use fibkit_core::fastdoubling::fib_pair;
/// let (f, f1) = fib_pair(100);
/// assert_eq!(f.to_string(), "354224848179261915075");
/// assert_eq!(f1.to_string(), "573147844013817084101");
/// ```
#[must_use]
pub fn fib_pair(n: u64) -> (BigUint, BigUint) {
    let num_bits = 64 - n.leading_zeros();
    let mut fk = BigUint::ZERO;
    let mut fk1 = BigUint::one();

    for i in (0..num_bits).rev() {
        // t = 2*F(k+1) - F(k), never negative since F(k+1) >= F(k)
        let mut t = &fk1 << 1u32;
        t -= &fk;

        let f2k = &fk * &t;
        let f2k1 = &fk * &fk + &fk1 * &fk1;
        fk = f2k;
        fk1 = f2k1;

        if (n >> i) & 1 == 1 {
            // (F(2k), F(2k+1)) -> (F(2k+1), F(2k+2))
            std::mem::swap(&mut fk, &mut fk1);
            fk1 += &fk;
        }
    }

    (fk, fk1)
}

/// Compute F(n) by fast doubling.
#[must_use]
pub fn fib_doubling(n: u64) -> BigUint {
    fib_pair(n).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn fast_doubling_base_cases() {
        assert_eq!(fib_pair(0), (BigUint::ZERO, BigUint::one()));
        assert_eq!(fib_pair(1), (BigUint::one(), BigUint::one()));
        assert_eq!(fib_pair(2), (BigUint::one(), BigUint::from(2u32)));
    }

    #[test]
    fn matches_table() {
        for (n, &expected) in FIB_TABLE.iter().enumerate() {
            assert_eq!(fib_doubling(n as u64), BigUint::from(expected), "F({n})");
        }
    }

    #[test]
    fn fast_doubling_small_values() {
        assert_eq!(
            fib_doubling(94),
            BigUint::parse_bytes(b"19740274219868223167", 10).unwrap()
        );
        assert_eq!(
            fib_doubling(100),
            BigUint::parse_bytes(b"354224848179261915075", 10).unwrap()
        );
    }

    #[test]
    fn fast_doubling_known_values() {
        // F(200) = 280571172992510140037611932413038677189525
        let expected =
            BigUint::parse_bytes(b"280571172992510140037611932413038677189525", 10).unwrap();
        assert_eq!(fib_doubling(200), expected);
    }

    #[test]
    fn fast_doubling_f1000() {
        let s = fib_doubling(1000).to_string();
        assert!(s.starts_with("43466557686937456435688527675040625802564"));
        assert_eq!(s.len(), 209); // F(1000) has 209 digits
    }

    #[test]
    fn pair_is_consecutive() {
        for n in [5u64, 64, 127, 1000, 4097] {
            let (a, b) = fib_pair(n);
            let (b2, c) = fib_pair(n + 1);
            assert_eq!(b, b2);
            assert_eq!(&a + &b, c);
        }
    }
}
