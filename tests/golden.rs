//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and checks every engine route
//! (closed form, cache, fast doubling, sequences, recurrences) against it.

use num_bigint::{BigInt, BigUint};
use serde::Deserialize;

use fibkit_core::fastdoubling::fib_doubling;
use fibkit_core::{linrec2, linrec_k, FibonacciConfig, FibonacciEngine, SequenceMethod};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
    lucas: Vec<LucasEntry>,
    modular: Vec<ModularEntry>,
    pisano: Vec<PisanoEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: u64,
    #[serde(default)]
    fib: Option<String>,
    #[serde(default)]
    fib_prefix: Option<String>,
    #[serde(default)]
    fib_digits: Option<usize>,
}

#[derive(Deserialize)]
struct LucasEntry {
    n: u64,
    value: String,
}

#[derive(Deserialize)]
struct ModularEntry {
    n: u64,
    m: u64,
    value: u64,
}

#[derive(Deserialize)]
struct PisanoEntry {
    m: u64,
    period: u64,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Golden: exact values through every term strategy
// ---------------------------------------------------------------------------

#[test]
fn golden_exact_default_engine() {
    let engine = FibonacciEngine::new();
    for entry in &load_golden_data().values {
        if let Some(expected) = &entry.fib {
            let result = engine.fibonacci(entry.n).unwrap();
            assert_eq!(result.to_string(), *expected, "engine mismatch at n={}", entry.n);
        }
    }
}

#[test]
fn golden_exact_without_closed_form() {
    let engine =
        FibonacciEngine::with_config(FibonacciConfig::default().with_binet_for_small_n(false));
    for entry in &load_golden_data().values {
        if let Some(expected) = &entry.fib {
            let result = engine.fibonacci(entry.n).unwrap();
            assert_eq!(result.to_string(), *expected, "cache mismatch at n={}", entry.n);
        }
    }
}

#[test]
fn golden_exact_fast_doubling() {
    for entry in &load_golden_data().values {
        if let Some(expected) = &entry.fib {
            let result = fib_doubling(entry.n);
            assert_eq!(result.to_string(), *expected, "FastDoubling mismatch at n={}", entry.n);
        }
    }
}

#[test]
fn golden_exact_linrec() {
    for entry in &load_golden_data().values {
        if let Some(expected) = &entry.fib {
            let expected: BigInt = expected.parse().unwrap();
            assert_eq!(linrec2(entry.n, 0, 1, 1, 1).unwrap(), expected, "linrec2 at n={}", entry.n);
            assert_eq!(
                linrec_k(entry.n, [1, 1], [0, 1]).unwrap(),
                expected,
                "linrec_k at n={}",
                entry.n
            );
        }
    }
}

#[test]
fn golden_closed_form_within_cutoff() {
    let engine = FibonacciEngine::new();
    let max = engine.config().max_safe_binet;
    for entry in &load_golden_data().values {
        if let Some(expected) = &entry.fib {
            let result = engine.fibonacci_binet(entry.n);
            if entry.n <= max {
                assert_eq!(result.unwrap().to_string(), *expected, "Binet at n={}", entry.n);
            } else {
                assert!(result.unwrap_err().is_validation(), "Binet accepted n={}", entry.n);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: prefix & digit count (n=5000, n=10000)
// ---------------------------------------------------------------------------

#[test]
fn golden_prefix_and_digits() {
    let engine = FibonacciEngine::new();
    for entry in &load_golden_data().values {
        let s = engine.fibonacci(entry.n).unwrap().to_string();

        if let Some(prefix) = &entry.fib_prefix {
            assert!(
                s.starts_with(prefix.as_str()),
                "prefix mismatch at n={}: expected starts_with '{}', got '{}'",
                entry.n,
                prefix,
                &s[..prefix.len().min(s.len())],
            );
        }

        if let Some(expected_digits) = entry.fib_digits {
            assert_eq!(s.len(), expected_digits, "digit count mismatch at n={}", entry.n);
            let analysis = engine.analyze_fibonacci(entry.n).unwrap();
            assert_eq!(analysis.digit_count, expected_digits);
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: sequences
// ---------------------------------------------------------------------------

#[test]
fn golden_sequence_prefix() {
    let engine = FibonacciEngine::new();
    let data = load_golden_data();
    let limit = 1001;
    for method in SequenceMethod::ALL {
        let seq = engine.generate_sequence(method.as_str(), limit).unwrap();
        for entry in &data.values {
            if let (Some(expected), Some(value)) = (&entry.fib, seq.get(entry.n as usize)) {
                assert_eq!(value.to_string(), *expected, "{method} mismatch at n={}", entry.n);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: Lucas, modular, Pisano
// ---------------------------------------------------------------------------

#[test]
fn golden_lucas() {
    let engine = FibonacciEngine::new();
    for entry in &load_golden_data().lucas {
        let expected: BigUint = entry.value.parse().unwrap();
        assert_eq!(engine.lucas(entry.n).unwrap(), expected, "L({})", entry.n);
        assert_eq!(
            linrec2(entry.n, 2, 1, 1, 1).unwrap(),
            BigInt::from(expected),
            "linrec2 Lucas at n={}",
            entry.n
        );
    }
}

#[test]
fn golden_modular() {
    let engine = FibonacciEngine::new();
    for entry in &load_golden_data().modular {
        let result = engine.fibonacci_mod(entry.n, entry.m).unwrap();
        assert_eq!(result, BigUint::from(entry.value), "F({}) mod {}", entry.n, entry.m);
    }
}

#[test]
fn golden_pisano() {
    let engine = FibonacciEngine::new();
    for entry in &load_golden_data().pisano {
        assert_eq!(engine.pisano_period(entry.m).unwrap(), entry.period, "pi({})", entry.m);
    }
}
