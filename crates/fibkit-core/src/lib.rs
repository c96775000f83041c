//! # fibkit-core
//!
//! Exact big-integer Fibonacci and Lucas numbers, modular Fibonacci values,
//! Pisano periods and constant-coefficient linear recurrences.
//!
//! Every operation validates its inputs first and returns a [`FibError`]
//! naming the offending parameter; no partial results are produced.
//!
//! # Example
//! ```
//! use fibkit_core::FibonacciEngine;
//!
//! let engine = FibonacciEngine::new();
//! assert_eq!(engine.fibonacci(10).unwrap().to_string(), "55");
//! assert_eq!(engine.lucas(10).unwrap().to_string(), "123");
//! assert_eq!(engine.pisano_period(10).unwrap(), 60);
//! ```

pub mod analysis;
pub mod binet;
pub mod constants;
pub mod engine;
pub mod error;
pub mod fastdoubling;
pub mod generator;
pub(crate) mod generator_direct;
pub(crate) mod generator_iterative;
pub mod iterator;
pub mod linrec;
pub mod matrix_ops;
pub mod matrix_types;
pub mod modular;
pub mod options;
pub mod validation;

// Re-exports
pub use analysis::FibonacciAnalysis;
pub use constants::{
    exit_codes, DEFAULT_MAX_SAFE_BINET, DEFAULT_SEQUENCE_LIMIT, FIB_TABLE, MAX_FIB_U64,
};
pub use engine::{fib, fib_mod, lucas, pisano_period, FibonacciEngine, TermStrategy};
pub use error::{FibError, FibResult};
pub use generator::{SequenceGenerator, SequenceMethod};
pub use iterator::FibSequence;
pub use linrec::{linrec2, linrec2_array, linrec_k};
pub use matrix_types::{Matrix2, MatrixK};
pub use options::FibonacciConfig;
pub use validation::{IntegerLike, Operand};
