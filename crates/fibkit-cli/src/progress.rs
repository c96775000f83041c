//! Progress display for the benchmark table.

use indicatif::{ProgressBar, ProgressStyle};

const BENCH_TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// Progress bar advanced once per benchmark case.
///
/// Draws to stderr, so stdout stays a clean table. A hidden bar accepts
/// every call and draws nothing.
pub struct BenchProgress {
    bar: ProgressBar,
}

impl BenchProgress {
    /// Bar over `cases` benchmark cases.
    #[must_use]
    pub fn new(cases: u64, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(cases)
        } else {
            ProgressBar::hidden()
        };
        let style = ProgressStyle::with_template(BENCH_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        bar.set_style(style);
        Self { bar }
    }

    /// Announce the case about to run.
    pub fn start_case(&self, n: u64) {
        self.bar.set_message(format!("F({n})"));
    }

    /// Mark the current case as done.
    pub fn finish_case(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Cases completed so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_counts_cases() {
        let progress = BenchProgress::new(3, false);
        for n in [10, 100, 1000] {
            progress.start_case(n);
            progress.finish_case();
        }
        assert_eq!(progress.position(), 3);
        progress.finish();
    }

    #[test]
    fn template_is_valid() {
        assert!(ProgressStyle::with_template(BENCH_TEMPLATE).is_ok());
    }
}
