//! Structured summary of a single Fibonacci number.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};

use crate::error::{FibError, FibResult};

/// Summary returned by [`FibonacciEngine::analyze_fibonacci`](crate::FibonacciEngine::analyze_fibonacci).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FibonacciAnalysis {
    /// The index n.
    pub n: u64,
    /// F(n), serialized as a decimal string.
    #[serde(serialize_with = "serialize_decimal")]
    pub fibonacci_number: BigUint,
    /// Number of decimal digits of F(n).
    pub digit_count: usize,
    /// Whether F(n) is even.
    pub is_even: bool,
    /// F(n+1) / F(n), only present for n >= 2.
    pub golden_ratio_approximation: Option<f64>,
    /// Estimate of log10(F(n)) from the closed form.
    pub log10_approximation: f64,
}

impl FibonacciAnalysis {
    pub(crate) fn new(n: u64, fib_n: BigUint, fib_n1: &BigUint) -> Self {
        let golden_ratio_approximation = (n >= 2).then(|| ratio(fib_n1, &fib_n));
        Self {
            n,
            digit_count: fib_n.to_string().len(),
            is_even: fib_n.is_even(),
            golden_ratio_approximation,
            log10_approximation: log10_estimate(n),
            fibonacci_number: fib_n,
        }
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> FibResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FibError::Engine(e.to_string()))
    }
}

fn serialize_decimal<S: Serializer>(value: &BigUint, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

/// `num / den` as `f64`, computed on the leading 64 bits so that operands
/// far beyond `f64::MAX` still give a finite ratio.
fn ratio(num: &BigUint, den: &BigUint) -> f64 {
    let shift = num.bits().max(den.bits()).saturating_sub(64);
    let num = (num >> shift).to_f64().unwrap_or(f64::NAN);
    let den = (den >> shift).to_f64().unwrap_or(f64::NAN);
    num / den
}

#[allow(clippy::cast_precision_loss)]
fn log10_estimate(n: u64) -> f64 {
    let sqrt5 = 5.0_f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    n as f64 * phi.log10() - sqrt5.log10()
}
