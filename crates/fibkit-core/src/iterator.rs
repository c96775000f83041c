//! Lazy Fibonacci sequence using the standard additive recurrence.

use std::iter::FusedIterator;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::error::{FibError, FibResult};
use crate::validation::{index_to_u64, require_non_negative, Operand};

/// Lazy, finite iterator over `F(0), F(1), ...`.
///
/// Creating the sequence never fails. The requested length is validated when
/// the sequence is first advanced: an invalid or oversized limit is yielded
/// as a single `Err` item, after which the sequence is exhausted.
///
/// # Example
/// ```
/// use fibkit_core::FibonacciEngine;
/// let engine = FibonacciEngine::new();
/// let fibs: Vec<String> = engine
///     .fibonacci_sequence(7)
///     .map(|v| v.unwrap().to_string())
///     .collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug)]
pub struct FibSequence {
    pending: Option<(Operand, u64)>,
    a: BigUint,
    b: BigUint,
    remaining: u64,
}

impl FibSequence {
    /// Sequence of `limit` terms, rejected on first advance if it exceeds `max_len`.
    pub(crate) fn new(limit: Operand, max_len: u64) -> Self {
        Self {
            pending: Some((limit, max_len)),
            a: BigUint::zero(),
            b: BigUint::one(),
            remaining: 0,
        }
    }
}

/// Validate a requested sequence length against the configured maximum.
pub(crate) fn check_limit(limit: impl Into<Operand>, max_len: u64) -> FibResult<u64> {
    let limit = require_non_negative(limit, "Limit")?;
    if limit > BigInt::from(max_len) {
        return Err(FibError::validation(format!(
            "Sequence limit {max_len} exceeded: {limit}"
        )));
    }
    index_to_u64(&limit, "Limit")
}

impl Iterator for FibSequence {
    type Item = FibResult<BigUint>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((limit, max_len)) = self.pending.take() {
            match check_limit(limit, max_len) {
                Ok(len) => self.remaining = len,
                Err(e) => return Some(Err(e)),
            }
        }

        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let next = &self.a + &self.b;
        let val = std::mem::replace(&mut self.a, std::mem::replace(&mut self.b, next));
        Some(Ok(val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.pending.is_some() {
            return (0, None);
        }
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for FibSequence {}
