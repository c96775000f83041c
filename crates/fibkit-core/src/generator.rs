//! Sequence generator trait and method selection.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::error::{FibError, FibResult};

/// Trait for generating the first `limit` Fibonacci numbers.
pub trait SequenceGenerator: Send + Sync {
    /// Generate `F(0)..F(limit-1)`.
    fn generate(&self, limit: u64) -> FibResult<Vec<BigUint>>;

    /// Get the name of this generator.
    fn name(&self) -> &'static str;
}

/// The ways a sequence can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceMethod {
    /// Forward iteration `a, b = b, a + b`.
    Iterative,
    /// Each term computed independently by fast doubling.
    FastDoubling,
    /// Closed form up to the cutoff, fast doubling beyond it.
    Binet,
}

impl SequenceMethod {
    /// Every method, in the order they are listed to users.
    pub const ALL: [Self; 3] = [Self::Iterative, Self::FastDoubling, Self::Binet];

    /// Name accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::FastDoubling => "fast_doubling",
            Self::Binet => "binet",
        }
    }
}

impl fmt::Display for SequenceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SequenceMethod {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                let available: Vec<String> =
                    Self::ALL.iter().map(|m| format!("'{m}'")).collect();
                FibError::validation(format!(
                    "Unknown method '{s}'. Available: [{}]",
                    available.join(",")
                ))
            })
    }
}
