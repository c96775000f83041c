//! Generators that compute every term independently.

use num_bigint::BigUint;

use crate::binet::binet;
use crate::error::FibResult;
use crate::fastdoubling::fib_doubling;
use crate::generator::SequenceGenerator;

fn capacity(limit: u64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

/// Computes each term with its own fast-doubling run.
pub struct DoublingGenerator;

impl SequenceGenerator for DoublingGenerator {
    fn generate(&self, limit: u64) -> FibResult<Vec<BigUint>> {
        let mut out = Vec::with_capacity(capacity(limit));
        out.extend((0..limit).map(fib_doubling));
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "DoublingGenerator"
    }
}

/// Closed form while it is exact, fast doubling for the remainder.
///
/// Always returns the full requested length.
pub struct BinetGenerator {
    max_safe_binet: u64,
}

impl BinetGenerator {
    /// Generator trusting the closed form up to `max_safe_binet` inclusive.
    #[must_use]
    pub fn new(max_safe_binet: u64) -> Self {
        Self { max_safe_binet }
    }
}

impl SequenceGenerator for BinetGenerator {
    fn generate(&self, limit: u64) -> FibResult<Vec<BigUint>> {
        let safe = limit.min(self.max_safe_binet.saturating_add(1));
        let mut out = Vec::with_capacity(capacity(limit));
        for n in 0..safe {
            out.push(binet(n)?);
        }
        out.extend((safe..limit).map(fib_doubling));
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "BinetGenerator"
    }
}
