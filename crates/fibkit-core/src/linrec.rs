//! Constant-coefficient linear recurrences via companion matrices.
//!
//! Order 2: `a(n) = p*a(n-1) + q*a(n-2)` with seeds `a0`, `a1`.
//! Order k: `a(n) = c_1*a(n-1) + ... + c_k*a(n-k)` with seeds `init[0..k]`.

use num_bigint::BigInt;
use tracing::debug;

use crate::error::{FibError, FibResult};
use crate::matrix_ops::{mat2_pow, matk_pow};
use crate::matrix_types::{Matrix2, MatrixK};
use crate::validation::{
    index_to_u64, require_int, require_int_sequence, require_non_negative, Operand,
};

/// The n-th term of an order-2 recurrence.
///
/// # Example
/// ```
/// // Lucas numbers: L(0) = 2, L(1) = 1, L(n) = L(n-1) + L(n-2)
/// use num_bigint::BigInt;
/// assert_eq!(fibkit_core::linrec2(10, 2, 1, 1, 1).unwrap(), BigInt::from(123));
/// ```
pub fn linrec2(
    n: impl Into<Operand>,
    a0: impl Into<Operand>,
    a1: impl Into<Operand>,
    p: impl Into<Operand>,
    q: impl Into<Operand>,
) -> FibResult<BigInt> {
    let n = index_to_u64(&require_non_negative(n, "n")?, "n")?;
    let a0 = require_int(a0, "a0")?;
    let a1 = require_int(a1, "a1")?;
    let p = require_int(p, "p")?;
    let q = require_int(q, "q")?;

    match n {
        0 => Ok(a0),
        1 => Ok(a1),
        _ => {
            let m = mat2_pow(&Matrix2::companion(p, q), n - 1);
            Ok(m.a * a1 + m.b * a0)
        }
    }
}

/// The n-th term of an order-k recurrence, `k = coeffs.len()`.
///
/// `coeffs[0]` multiplies the most recent term; `init` holds `a(0)..a(k-1)`.
pub fn linrec_k<C, I>(n: impl Into<Operand>, coeffs: C, init: I) -> FibResult<BigInt>
where
    C: IntoIterator,
    C::Item: Into<Operand>,
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let n = index_to_u64(&require_non_negative(n, "n")?, "n")?;
    let coeffs = require_int_sequence(coeffs, "coeffs")?;
    let mut init = require_int_sequence(init, "init")?;

    let k = coeffs.len();
    if k == 0 {
        return Err(FibError::validation("coeffs must not be empty"));
    }
    if init.len() != k {
        return Err(FibError::validation("init must have same length as coeffs"));
    }

    if let Some(i) = usize::try_from(n).ok().filter(|&i| i < k) {
        return Ok(init.swap_remove(i));
    }

    // k - 1 < n, so the exponent is at least 1.
    let exponent = n - (k as u64 - 1);
    debug!(order = k, exponent, "raising companion matrix");
    let power = matk_pow(&MatrixK::companion(&coeffs), exponent);

    Ok(power
        .row(0)
        .iter()
        .zip(init.iter().rev())
        .map(|(c, v)| c * v)
        .sum())
}

/// [`linrec2`] applied to every index in `ns`, in order.
///
/// The first invalid index aborts the whole call.
pub fn linrec2_array<N>(
    ns: N,
    a0: impl Into<Operand>,
    a1: impl Into<Operand>,
    p: impl Into<Operand>,
    q: impl Into<Operand>,
) -> FibResult<Vec<BigInt>>
where
    N: IntoIterator,
    N::Item: Into<Operand>,
{
    let (a0, a1, p, q) = (a0.into(), a1.into(), p.into(), q.into());
    ns.into_iter()
        .map(|n| linrec2(n, &a0, &a1, &p, &q))
        .collect()
}
