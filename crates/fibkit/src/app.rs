//! Application entry point and dispatch.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::debug;

use fibkit_cli::output::{format_bench_row, BENCH_HEADER};
use fibkit_cli::presenter::{CLIResultPresenter, ResultPresenter};
use fibkit_cli::BenchProgress;
use fibkit_core::{linrec2, linrec_k, FibonacciConfig, FibonacciEngine};

use crate::config::{AppConfig, Command};

/// Indices timed by `bench`.
pub const BENCH_CASES: [u64; 5] = [10, 100, 1_000, 10_000, 100_000];

/// Run the application.
///
/// Engine failures come back as [`fibkit_core::FibError`] inside the
/// `anyhow::Error`, so the caller can map them to exit codes.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = CLIResultPresenter::new(config.short);
    debug!(command = ?config.command, "dispatching");

    match &config.command {
        Command::Completion { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            fibkit_cli::completion::generate_completion(&mut cmd, *shell, &mut std::io::stdout());
        }
        Command::Fib {
            n,
            binet_cutoff,
            details,
        } => {
            let engine = FibonacciEngine::with_config(
                FibonacciConfig::default().with_max_safe_binet(*binet_cutoff),
            );
            let start = Instant::now();
            let value = engine.fibonacci(n)?;
            let elapsed = start.elapsed();
            presenter.present_term("F", index_for_display(n), &value, elapsed, *details);
        }
        Command::Lucas { n } => {
            presenter.present_value(&FibonacciEngine::new().lucas(n)?);
        }
        Command::Mod { n, m } => {
            presenter.present_value(&FibonacciEngine::new().fibonacci_mod(n, m)?);
        }
        Command::Seq { limit, method } => {
            let values = FibonacciEngine::new().generate_sequence(method, limit)?;
            presenter.present_sequence(&values);
        }
        Command::Pisano { m } => {
            presenter.present_value(&FibonacciEngine::new().pisano_period(m)?);
        }
        Command::Linrec { n, a0, a1, p, q } => {
            presenter.present_value(&linrec2(n, a0, a1, p, q)?);
        }
        Command::LinrecK { n, coeffs, init } => {
            presenter.present_value(&linrec_k(n, coeffs, init)?);
        }
        Command::Bench => run_bench(&presenter)?,
        Command::Analyze { n } => {
            let analysis = FibonacciEngine::new().analyze_fibonacci(n)?;
            presenter.present_raw(&analysis.to_json()?);
        }
    }

    Ok(())
}

fn run_bench(presenter: &dyn ResultPresenter) -> Result<()> {
    let engine = FibonacciEngine::new();
    let progress = BenchProgress::new(BENCH_CASES.len() as u64, std::io::stderr().is_terminal());

    presenter.present_raw(BENCH_HEADER);
    for n in BENCH_CASES {
        progress.start_case(n);
        let (digits, elapsed) = time_case(&engine, n)?;
        progress.finish_case();
        presenter.present_raw(&format_bench_row(n, digits, elapsed));
    }
    progress.finish();
    Ok(())
}

fn time_case(engine: &FibonacciEngine, n: u64) -> Result<(usize, Duration)> {
    let start = Instant::now();
    let value = engine.fibonacci(n)?;
    let elapsed = start.elapsed();
    Ok((value.to_string().len(), elapsed))
}

/// Index shown in detail reports. Only reached after the engine accepted `n`.
fn index_for_display(n: &num_bigint::BigInt) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}
