//! CLI output formatting.

use std::fmt::Display;
use std::time::Duration;

/// Results longer than this many digits are abbreviated in short mode.
pub const SHORT_DISPLAY_DIGITS: usize = 100;

/// Header line of the benchmark table.
pub const BENCH_HEADER: &str = "n\tF(n) digits\tfib(ms)";

/// Format an integer for display, abbreviating it in short mode.
///
/// Abbreviated values keep the first and last 50 digits and report the
/// total digit count. The sign, if any, is kept and not counted.
#[must_use]
pub fn format_result(value: &impl Display, short: bool) -> String {
    let s = value.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    if short && digits.len() > SHORT_DISPLAY_DIGITS {
        format!(
            "{sign}{}...{} ({} digits)",
            &digits[..50],
            &digits[digits.len() - 50..],
            digits.len()
        )
    } else {
        s
    }
}

/// Format a sequence as `[a, b, c]`.
#[must_use]
pub fn format_sequence<T: Display>(values: &[T], short: bool) -> String {
    let items: Vec<String> = values.iter().map(|v| format_result(v, short)).collect();
    format!("[{}]", items.join(", "))
}

/// One tab-separated row of the benchmark table.
#[must_use]
pub fn format_bench_row(n: u64, digits: usize, elapsed: Duration) -> String {
    format!("{n}\t{digits}\t{:.3}", elapsed.as_secs_f64() * 1000.0)
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
