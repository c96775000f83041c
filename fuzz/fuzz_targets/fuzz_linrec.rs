#![no_main]

use libfuzzer_sys::fuzz_target;

use fibkit_core::{linrec2, linrec_k};

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    // n from two bytes, then small signed seeds and coefficients
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 2_000;
    let a0 = i64::from(data[2] as i8);
    let a1 = i64::from(data[3] as i8);
    let p = i64::from(data[4] as i8);
    let q = i64::from(data[5] as i8);

    let order2 = linrec2(n, a0, a1, p, q).expect("valid order-2 input");
    let orderk = linrec_k(n, [p, q], [a0, a1]).expect("valid order-k input");
    assert_eq!(order2, orderk, "linrec2 != linrec_k at n={n}");

    // Arbitrary-length coefficient lists must fail cleanly or succeed.
    let k = data.len().min(8) - 2;
    let coeffs: Vec<i64> = data[2..2 + k].iter().map(|&b| i64::from(b as i8)).collect();
    let init: Vec<i64> = data[data.len() - k..].iter().map(|&b| i64::from(b)).collect();
    let _ = linrec_k(n % 200, coeffs, init);
});
