//! Matrix types for order-2 and order-k linear recurrences.

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// 2x2 matrix of `BigInt` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix2 {
    pub a: BigInt, // [0][0]
    pub b: BigInt, // [0][1]
    pub c: BigInt, // [1][0]
    pub d: BigInt, // [1][1]
}

impl Matrix2 {
    /// Build a matrix from its entries in row-major order.
    #[must_use]
    pub fn new(a: BigInt, b: BigInt, c: BigInt, d: BigInt) -> Self {
        Self { a, b, c, d }
    }

    /// Create the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(BigInt::one(), BigInt::zero(), BigInt::zero(), BigInt::one())
    }

    /// Companion matrix `[[p, q], [1, 0]]` of `a(n) = p*a(n-1) + q*a(n-2)`.
    #[must_use]
    pub fn companion(p: BigInt, q: BigInt) -> Self {
        Self::new(p, q, BigInt::one(), BigInt::zero())
    }

    /// Create the Fibonacci Q matrix [[1,1],[1,0]].
    #[must_use]
    pub fn fibonacci_q() -> Self {
        Self::companion(BigInt::one(), BigInt::one())
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.a.is_one() && self.b.is_zero() && self.c.is_zero() && self.d.is_one()
    }
}

/// Square k x k matrix of `BigInt` values, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixK {
    pub(crate) rows: Vec<Vec<BigInt>>,
}

impl MatrixK {
    /// The k x k zero matrix.
    #[must_use]
    pub fn zeros(k: usize) -> Self {
        Self {
            rows: vec![vec![BigInt::zero(); k]; k],
        }
    }

    /// The k x k identity matrix.
    #[must_use]
    pub fn identity(k: usize) -> Self {
        let mut m = Self::zeros(k);
        for i in 0..k {
            m.rows[i][i] = BigInt::one();
        }
        m
    }

    /// Companion matrix of `a(n) = c_1*a(n-1) + ... + c_k*a(n-k)`.
    ///
    /// The first row holds the coefficients; the sub-diagonal holds ones.
    /// An empty coefficient list yields the 0 x 0 matrix.
    #[must_use]
    pub fn companion(coeffs: &[BigInt]) -> Self {
        let k = coeffs.len();
        let mut m = Self::zeros(k);
        if let Some(first) = m.rows.first_mut() {
            first.clone_from_slice(coeffs);
        }
        for i in 1..k {
            m.rows[i][i - 1] = BigInt::one();
        }
        m
    }

    /// Build a matrix from rows, returning `None` unless the rows form a square.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<BigInt>>) -> Option<Self> {
        let k = rows.len();
        rows.iter()
            .all(|row| row.len() == k)
            .then_some(Self { rows })
    }

    /// Dimension k.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Row `i` of the matrix.
    #[must_use]
    pub fn row(&self, i: usize) -> &[BigInt] {
        &self.rows[i]
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.rows.iter().enumerate().all(|(i, row)| {
            row.iter()
                .enumerate()
                .all(|(j, v)| if i == j { v.is_one() } else { v.is_zero() })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(vals: &[i64]) -> Vec<BigInt> {
        vals.iter().copied().map(BigInt::from).collect()
    }

    #[test]
    fn identity_matrix() {
        assert!(Matrix2::identity().is_identity());
        assert!(!Matrix2::fibonacci_q().is_identity());
    }

    #[test]
    fn fibonacci_q_matrix() {
        let q = Matrix2::fibonacci_q();
        assert_eq!(q.a, BigInt::one());
        assert_eq!(q.b, BigInt::one());
        assert_eq!(q.c, BigInt::one());
        assert_eq!(q.d, BigInt::zero());
    }

    #[test]
    fn companion_2x2_layout() {
        let m = Matrix2::companion(BigInt::from(3), BigInt::from(-2));
        assert_eq!(m, Matrix2::new(3.into(), (-2).into(), 1.into(), 0.into()));
    }

    #[test]
    fn identity_k() {
        assert!(MatrixK::identity(4).is_identity());
        assert!(!MatrixK::zeros(2).is_identity());
        assert_eq!(MatrixK::identity(3).dim(), 3);
    }

    #[test]
    fn companion_k_layout() {
        let m = MatrixK::companion(&ints(&[1, 2, 3]));
        assert_eq!(m.row(0), ints(&[1, 2, 3]).as_slice());
        assert_eq!(m.row(1), ints(&[1, 0, 0]).as_slice());
        assert_eq!(m.row(2), ints(&[0, 1, 0]).as_slice());
    }

    #[test]
    fn companion_order_one() {
        let m = MatrixK::companion(&ints(&[5]));
        assert_eq!(m.dim(), 1);
        assert_eq!(m.row(0), ints(&[5]).as_slice());
    }

    #[test]
    fn companion_without_coefficients_is_empty() {
        let m = MatrixK::companion(&[]);
        assert_eq!(m.dim(), 0);
        assert!(m.is_identity());
    }

    #[test]
    fn from_rows_requires_square() {
        assert!(MatrixK::from_rows(vec![ints(&[1, 2]), ints(&[3, 4])]).is_some());
        assert!(MatrixK::from_rows(vec![ints(&[1, 2]), ints(&[3])]).is_none());
        assert!(MatrixK::from_rows(vec![ints(&[1, 2])]).is_none());
    }
}
