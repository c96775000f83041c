//! Iterative Fibonacci sequence generator.

use num_bigint::BigUint;

use crate::error::FibResult;
use crate::generator::SequenceGenerator;
use crate::iterator::FibSequence;

/// Iterative generator that materializes a [`FibSequence`].
pub struct IterativeGenerator {
    max_len: u64,
}

impl IterativeGenerator {
    /// Generator refusing sequences longer than `max_len`.
    #[must_use]
    pub fn new(max_len: u64) -> Self {
        Self { max_len }
    }
}

impl SequenceGenerator for IterativeGenerator {
    fn generate(&self, limit: u64) -> FibResult<Vec<BigUint>> {
        FibSequence::new(limit.into(), self.max_len).collect()
    }

    fn name(&self) -> &'static str {
        "IterativeGenerator"
    }
}
