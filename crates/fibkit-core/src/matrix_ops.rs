//! Matrix multiplication and exponentiation by squaring.
//!
//! Every large-index recurrence term is computed through one of these
//! primitives: `O(log n)` matrix products instead of `n` additions.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::matrix_types::{Matrix2, MatrixK};

/// Multiply two 2x2 matrices.
#[must_use]
pub fn mat2_mul(x: &Matrix2, y: &Matrix2) -> Matrix2 {
    Matrix2 {
        a: &x.a * &y.a + &x.b * &y.c,
        b: &x.a * &y.b + &x.b * &y.d,
        c: &x.c * &y.a + &x.d * &y.c,
        d: &x.c * &y.b + &x.d * &y.d,
    }
}

/// Raise a 2x2 matrix to the power `n`.
///
/// Binary exponentiation, consuming the exponent from its least significant
/// bit upwards.
#[must_use]
pub fn mat2_pow(base: &Matrix2, mut n: u64) -> Matrix2 {
    let mut result = Matrix2::identity();
    let mut base = base.clone();
    while n > 0 {
        if n & 1 == 1 {
            result = mat2_mul(&result, &base);
        }
        n >>= 1;
        if n > 0 {
            base = mat2_mul(&base, &base);
        }
    }
    result
}

/// Multiply two k x k matrices.
#[must_use]
pub fn matk_mul(x: &MatrixK, y: &MatrixK) -> MatrixK {
    let k = x.dim();
    debug_assert_eq!(k, y.dim(), "matrix dimensions differ");

    let mut out = MatrixK::zeros(k);
    for i in 0..k {
        for j in 0..k {
            let mut acc = BigInt::zero();
            for t in 0..k {
                acc += &x.rows[i][t] * &y.rows[t][j];
            }
            out.rows[i][j] = acc;
        }
    }
    out
}

/// Raise a k x k matrix to the power `e`. `O(k^3 log e)` products.
#[must_use]
pub fn matk_pow(base: &MatrixK, mut e: u64) -> MatrixK {
    let mut result = MatrixK::identity(base.dim());
    let mut base = base.clone();
    while e > 0 {
        if e & 1 == 1 {
            result = matk_mul(&result, &base);
        }
        e >>= 1;
        if e > 0 {
            base = matk_mul(&base, &base);
        }
    }
    result
}
