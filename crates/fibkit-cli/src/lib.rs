//! # fibkit-cli
//!
//! CLI output formatting, result presentation, bench progress display and
//! shell completion for the `fibkit` binary.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod ui;

pub use presenter::{CLIResultPresenter, ResultPresenter};
pub use progress::BenchProgress;
