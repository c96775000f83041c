//! Engine configuration.

use crate::constants::{DEFAULT_MAX_SAFE_BINET, DEFAULT_SEQUENCE_LIMIT};

/// Configuration for a [`FibonacciEngine`](crate::FibonacciEngine).
///
/// Fixed for the lifetime of the engine it is given to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibonacciConfig {
    /// Largest index for which the closed-form formula is trusted.
    pub max_safe_binet: u64,
    /// Maximum length of a generated sequence.
    pub sequence_limit: u64,
    /// Whether `fibonacci` takes the closed-form path for small indices.
    pub use_binet_for_small_n: bool,
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self {
            max_safe_binet: DEFAULT_MAX_SAFE_BINET,
            sequence_limit: DEFAULT_SEQUENCE_LIMIT,
            use_binet_for_small_n: true,
        }
    }
}

impl FibonacciConfig {
    /// Copy with a different closed-form cutoff.
    #[must_use]
    pub fn with_max_safe_binet(mut self, max_safe_binet: u64) -> Self {
        self.max_safe_binet = max_safe_binet;
        self
    }

    /// Copy with a different maximum sequence length.
    #[must_use]
    pub fn with_sequence_limit(mut self, sequence_limit: u64) -> Self {
        self.sequence_limit = sequence_limit;
        self
    }

    /// Copy with the small-index closed-form path switched on or off.
    #[must_use]
    pub fn with_binet_for_small_n(mut self, enabled: bool) -> Self {
        self.use_binet_for_small_n = enabled;
        self
    }
}
