//! fibkit library: argument parsing and command dispatch for the `fibkit` binary.

pub mod app;
pub mod config;
pub mod errors;
