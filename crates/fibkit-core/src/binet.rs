//! Closed-form (Binet) evaluation of F(n).
//!
//! `F(n) = round((phi^n - psi^n) / sqrt(5))` evaluated in `f64`. Exact only
//! while F(n) stays well inside the 53-bit mantissa; callers enforce the
//! configured cutoff before reaching this module.

use num_bigint::BigUint;
use num_traits::FromPrimitive;

use crate::error::{FibError, FibResult};

/// Evaluate Binet's formula for `n`.
///
/// Fails when the floating-point result is not representable, which only
/// happens for indices far beyond any sensible cutoff.
#[allow(clippy::cast_precision_loss)]
pub fn binet(n: u64) -> FibResult<BigUint> {
    let sqrt5 = 5.0_f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    let psi = (1.0 - sqrt5) / 2.0;
    let exp = n as f64;
    let value = ((phi.powf(exp) - psi.powf(exp)) / sqrt5).round();

    BigUint::from_f64(value).ok_or_else(|| {
        FibError::validation(format!("Binet's formula overflowed for n = {n}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_MAX_SAFE_BINET, FIB_TABLE};

    #[test]
    fn small_values() {
        assert_eq!(binet(0).unwrap(), BigUint::from(0u32));
        assert_eq!(binet(1).unwrap(), BigUint::from(1u32));
        assert_eq!(binet(2).unwrap(), BigUint::from(1u32));
        assert_eq!(binet(10).unwrap(), BigUint::from(55u32));
    }

    #[test]
    fn exact_up_to_default_cutoff() {
        for n in 0..=DEFAULT_MAX_SAFE_BINET {
            assert_eq!(
                binet(n).unwrap(),
                BigUint::from(FIB_TABLE[usize::try_from(n).unwrap()]),
                "Binet F({n}) mismatch"
            );
        }
    }

    #[test]
    fn overflow_is_reported() {
        let err = binet(5000).unwrap_err();
        assert!(err.is_validation());
    }
}
