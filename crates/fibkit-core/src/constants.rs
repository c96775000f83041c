//! Constants for engine defaults, cache sizing and exit codes.

/// Largest index for which the closed-form formula is exact in `f64`.
pub const DEFAULT_MAX_SAFE_BINET: u64 = 70;

/// Maximum length of a generated sequence.
pub const DEFAULT_SEQUENCE_LIMIT: u64 = 100_000;

/// Highest index held in the engine's precomputed cache.
/// The cache covers F(0)..=F(SMALL_FIB_CACHE_MAX).
pub const SMALL_FIB_CACHE_MAX: usize = 1000;

/// The Pisano period of any modulus m never exceeds `PISANO_BOUND_FACTOR * m`.
pub const PISANO_BOUND_FACTOR: u64 = 6;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// Used to seed the engine cache without big-integer additions.
pub const FIB_TABLE: [u64; MAX_FIB_U64 as usize + 1] = {
    let mut table = [0u64; MAX_FIB_U64 as usize + 1];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < table.len() {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the command-line front end.
pub mod exit_codes {
    /// An internal invariant of the engine was violated.
    pub const ERROR_ENGINE: i32 = 1;
    /// The input was rejected by validation (usage error).
    pub const ERROR_VALIDATION: i32 = 2;
}
