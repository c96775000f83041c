//! Styled error output.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Print an error message to stderr as `error: <text>`.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("error: {text}");
    } else {
        eprintln!("{} {text}", style("error:").for_stderr().red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
        print_error("");
    }

    #[test]
    fn print_error_with_unicode() {
        print_error("\u{03c0}(m) search failed");
    }
}
