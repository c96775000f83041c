//! CLI result presenter.

use std::fmt::Display;
use std::time::Duration;

use num_bigint::BigUint;

use crate::output::{format_duration, format_number, format_result, format_sequence};
use crate::ui;

/// Presents computation results to the user.
pub trait ResultPresenter {
    /// Present a single integer result.
    fn present_value(&self, value: &dyn Display);

    /// Present F(n) or L(n), optionally with timing and size details.
    fn present_term(&self, label: &str, n: u64, value: &BigUint, duration: Duration, details: bool);

    /// Present a sequence of values.
    fn present_sequence(&self, values: &[BigUint]);

    /// Present a line that must not be altered (tables, JSON).
    fn present_raw(&self, line: &str);

    /// Present an error message.
    fn present_error(&self, error: &str);
}

/// CLI result presenter writing to stdout and stderr.
pub struct CLIResultPresenter {
    short: bool,
}

impl CLIResultPresenter {
    /// Presenter abbreviating results over 100 digits when `short` is set.
    #[must_use]
    pub fn new(short: bool) -> Self {
        Self { short }
    }

    /// Detailed report for a single term, one line per entry.
    #[must_use]
    pub fn render_term(&self, label: &str, n: u64, value: &BigUint, duration: Duration) -> String {
        let digits = value.to_string().len();
        [
            format!("N: {}", format_number(n)),
            format!("Duration: {}", format_duration(duration)),
            format!("Result bits: {}", value.bits()),
            format!("Result digits: {digits}"),
            format!(
                "{label}({}) = {}",
                format_number(n),
                format_result(value, self.short)
            ),
        ]
        .join("\n")
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_value(&self, value: &dyn Display) {
        println!("{}", format_result(&value, self.short));
    }

    fn present_term(&self, label: &str, n: u64, value: &BigUint, duration: Duration, details: bool) {
        if details {
            println!("{}", self.render_term(label, n, value, duration));
        } else {
            println!("{}", format_result(value, self.short));
        }
    }

    fn present_sequence(&self, values: &[BigUint]) {
        println!("{}", format_sequence(values, self.short));
    }

    fn present_raw(&self, line: &str) {
        println!("{line}");
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
