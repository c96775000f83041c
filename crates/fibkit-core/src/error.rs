//! Error type shared by every engine operation.

/// Error type for Fibonacci and recurrence computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The caller supplied an input the operation cannot accept.
    #[error("{0}")]
    Validation(String),

    /// An internal mathematical invariant was violated.
    #[error("engine invariant violated: {0}")]
    Engine(String),
}

impl FibError {
    /// Build a validation error from any displayable message.
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether this error was caused by bad input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result alias used throughout the engine.
pub type FibResult<T> = Result<T, FibError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_error_display() {
        let err = FibError::Validation("n must be non-negative integer, got -1".into());
        assert_eq!(err.to_string(), "n must be non-negative integer, got -1");

        let err = FibError::Engine("bound exceeded".into());
        assert_eq!(err.to_string(), "engine invariant violated: bound exceeded");
    }

    #[test]
    fn validation_predicate() {
        assert!(FibError::validation("x").is_validation());
        assert!(!FibError::Engine("x".into()).is_validation());
    }
}
