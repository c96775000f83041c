//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};
use num_bigint::BigInt;

use fibkit_core::constants::DEFAULT_MAX_SAFE_BINET;

/// fibkit: Fibonacci, Lucas, Pisano and linear recurrence toolkit.
#[derive(Parser, Debug)]
#[command(name = "fibkit", version, about)]
pub struct AppConfig {
    /// Debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Abbreviate results longer than 100 digits.
    #[arg(short, long, global = true)]
    pub short: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The operation to run.
///
/// Integer arguments accept any sign and size; range checks happen in the
/// engine so that its error messages reach the user.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute F(n).
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: BigInt,

        /// Largest n computed with Binet's closed form.
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_SAFE_BINET,
            env = "FIBKIT_BINET_CUTOFF"
        )]
        binet_cutoff: u64,

        /// Show timing and size information.
        #[arg(short, long)]
        details: bool,
    },

    /// Compute L(n).
    Lucas {
        #[arg(allow_negative_numbers = true)]
        n: BigInt,
    },

    /// Compute F(n) mod m.
    Mod {
        #[arg(allow_negative_numbers = true)]
        n: BigInt,
        #[arg(allow_negative_numbers = true)]
        m: BigInt,
    },

    /// Emit F(0..limit-1).
    Seq {
        #[arg(allow_negative_numbers = true)]
        limit: BigInt,

        /// Generation method: iterative, fast_doubling or binet.
        #[arg(long, default_value = "iterative")]
        method: String,
    },

    /// Compute the Pisano period of m.
    Pisano {
        #[arg(allow_negative_numbers = true)]
        m: BigInt,
    },

    /// Second-order linear recurrence a(n) = p*a(n-1) + q*a(n-2).
    Linrec {
        #[arg(long, allow_negative_numbers = true)]
        n: BigInt,
        #[arg(long, allow_negative_numbers = true)]
        a0: BigInt,
        #[arg(long, allow_negative_numbers = true)]
        a1: BigInt,
        #[arg(long, allow_negative_numbers = true)]
        p: BigInt,
        #[arg(long, allow_negative_numbers = true)]
        q: BigInt,
    },

    /// k-th order linear recurrence with coefficients and initial terms.
    #[command(name = "linrec-k")]
    LinrecK {
        #[arg(long, allow_negative_numbers = true)]
        n: BigInt,

        /// c_1 .. c_k, most recent term first.
        #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
        coeffs: Vec<BigInt>,

        /// a(0) .. a(k-1).
        #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
        init: Vec<BigInt>,
    },

    /// Print a small timing table of F(n).
    Bench,

    /// Print a JSON summary of F(n).
    Analyze {
        #[arg(allow_negative_numbers = true)]
        n: BigInt,
    },

    /// Generate a shell completion script.
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibkit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn fib_defaults() {
        let config = parse(&["fib", "10"]);
        assert!(!config.verbose);
        assert_eq!(
            config.command,
            Command::Fib {
                n: BigInt::from(10),
                binet_cutoff: DEFAULT_MAX_SAFE_BINET,
                details: false
            }
        );
    }

    #[test]
    fn negative_positional_is_accepted() {
        let config = parse(&["lucas", "-3"]);
        assert_eq!(config.command, Command::Lucas { n: BigInt::from(-3) });
    }

    #[test]
    fn linrec_flags_accept_negatives() {
        let config = parse(&["linrec", "--n", "-1", "--a0", "0", "--a1", "1", "--p", "2", "--q", "-1"]);
        match config.command {
            Command::Linrec { n, q, .. } => {
                assert_eq!(n, BigInt::from(-1));
                assert_eq!(q, BigInt::from(-1));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn linrec_k_collects_lists() {
        let config = parse(&["linrec-k", "--n", "10", "--coeffs", "1", "1", "1", "--init", "0", "0", "1"]);
        match config.command {
            Command::LinrecK { coeffs, init, .. } => {
                assert_eq!(coeffs.len(), 3);
                assert_eq!(init, vec![BigInt::from(0), BigInt::from(0), BigInt::from(1)]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&["pisano", "10", "--short", "--verbose"]);
        assert!(config.short);
        assert!(config.verbose);
    }

    #[test]
    fn huge_integers_parse() {
        let config = parse(&["mod", "123456789012345678901234567890", "97"]);
        assert!(matches!(config.command, Command::Mod { .. }));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(AppConfig::try_parse_from(["fibkit"]).is_err());
    }
}
