#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibkit_core::fastdoubling::fib_doubling;
use fibkit_core::FibonacciEngine;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // First 4 bytes pick n (capped for speed), next 4 pick the modulus
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 10_000;
    let m = u64::from(u32::from_le_bytes([data[4], data[5], data[6], data[7]])) % 100_000 + 1;

    let engine = FibonacciEngine::new();
    let direct = fib_doubling(n);
    let via_engine = engine.fibonacci(n).expect("valid index");
    assert_eq!(direct, via_engine, "doubling != engine at n={n}");

    let lucas = engine.lucas(n).expect("valid index");
    assert_eq!(lucas, (fib_doubling(n + 1) << 1u32) - &direct, "Lucas identity at n={n}");

    let residue = engine.fibonacci_mod(n, m).expect("valid modulus");
    assert_eq!(residue, &direct % BigUint::from(m), "mod mismatch at n={n}, m={m}");

    if m <= 2_000 {
        let period = engine.pisano_period(m).expect("period within bound");
        let reduced = engine.fibonacci_mod(n % period, m).expect("valid modulus");
        assert_eq!(residue, reduced, "periodicity at n={n}, m={m}");
    }
});
