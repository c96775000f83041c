//! The Fibonacci/Lucas engine.
//!
//! `FibonacciEngine` validates every input at its boundary and then picks a
//! term strategy: closed form for tiny indices, the precomputed cache for
//! small ones, fast doubling for everything else.

use num_bigint::{BigInt, BigUint};
use tracing::debug;

use crate::analysis::FibonacciAnalysis;
use crate::binet::binet;
use crate::constants::{FIB_TABLE, SMALL_FIB_CACHE_MAX};
use crate::error::{FibError, FibResult};
use crate::fastdoubling::{fib_doubling, fib_pair};
use crate::generator::{SequenceGenerator, SequenceMethod};
use crate::generator_direct::{BinetGenerator, DoublingGenerator};
use crate::generator_iterative::IterativeGenerator;
use crate::iterator::FibSequence;
use crate::modular;
use crate::options::FibonacciConfig;
use crate::validation::{
    index_to_u64, into_biguint, require_non_negative, require_positive, Operand,
};

/// How a single term F(n) is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermStrategy {
    /// Binet's closed form.
    ClosedForm,
    /// Lookup in the precomputed cache.
    Cache,
    /// Fast doubling.
    Doubling,
}

/// Computes Fibonacci, Lucas and Pisano values.
///
/// Holds an immutable configuration and a read-only cache of
/// `F(0)..=F(1000)`, so one engine can be shared freely between threads.
///
/// # Example
/// ```
/// use fibkit_core::FibonacciEngine;
/// let engine = FibonacciEngine::new();
/// assert_eq!(engine.fibonacci(50).unwrap().to_string(), "12586269025");
/// assert!(engine.fibonacci(true).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FibonacciEngine {
    config: FibonacciConfig,
    cache: Vec<BigUint>,
}

impl Default for FibonacciEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciEngine {
    /// Engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FibonacciConfig::default())
    }

    /// Engine with an explicit configuration.
    #[must_use]
    pub fn with_config(config: FibonacciConfig) -> Self {
        let cache = build_cache(SMALL_FIB_CACHE_MAX);
        debug!(entries = cache.len(), ?config, "engine initialized");
        Self { config, cache }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &FibonacciConfig {
        &self.config
    }

    /// Cached F(n), if `n` is within the cache.
    #[must_use]
    pub fn cached(&self, n: u64) -> Option<&BigUint> {
        usize::try_from(n).ok().and_then(|i| self.cache.get(i))
    }

    /// The strategy `fibonacci` uses for index `n`.
    #[must_use]
    pub fn strategy_for(&self, n: u64) -> TermStrategy {
        if self.config.use_binet_for_small_n && n <= self.config.max_safe_binet {
            TermStrategy::ClosedForm
        } else if self.cached(n).is_some() {
            TermStrategy::Cache
        } else {
            TermStrategy::Doubling
        }
    }

    /// F(n) for a non-negative integer `n`.
    pub fn fibonacci(&self, n: impl Into<Operand>) -> FibResult<BigUint> {
        let n = index_to_u64(&require_non_negative(n, "n")?, "n")?;
        let strategy = self.strategy_for(n);
        debug!(n, ?strategy, "computing Fibonacci term");

        match strategy {
            TermStrategy::ClosedForm => binet(n),
            TermStrategy::Cache => self
                .cached(n)
                .cloned()
                .ok_or_else(|| FibError::Engine(format!("cache miss for n = {n}"))),
            TermStrategy::Doubling => Ok(fib_doubling(n)),
        }
    }

    /// Lucas number L(n) = 2*F(n+1) - F(n).
    pub fn lucas(&self, n: impl Into<Operand>) -> FibResult<BigUint> {
        let n = index_to_u64(&require_non_negative(n, "n")?, "n")?;
        let (f_n, f_n1) = fib_pair(n);
        Ok((f_n1 << 1u32) - f_n)
    }

    /// F(n) through Binet's closed form.
    ///
    /// Rejects `n` above the configured `max_safe_binet`, where `f64`
    /// rounding no longer yields the exact value.
    pub fn fibonacci_binet(&self, n: impl Into<Operand>) -> FibResult<BigUint> {
        let n = require_non_negative(n, "n")?;
        let max = self.config.max_safe_binet;
        if n > BigInt::from(max) {
            return Err(FibError::validation(format!(
                "Binet's formula unreliable for n > {max}, got {n}"
            )));
        }
        binet(index_to_u64(&n, "n")?)
    }

    /// Lazy sequence of the first `limit` Fibonacci numbers.
    ///
    /// `limit` is validated on the first call to `next`.
    pub fn fibonacci_sequence(&self, limit: impl Into<Operand>) -> FibSequence {
        FibSequence::new(limit.into(), self.config.sequence_limit)
    }

    /// Generator implementing `method` under this engine's configuration.
    #[must_use]
    pub fn generator(&self, method: SequenceMethod) -> Box<dyn SequenceGenerator> {
        match method {
            SequenceMethod::Iterative => {
                Box::new(IterativeGenerator::new(self.config.sequence_limit))
            }
            SequenceMethod::FastDoubling => Box::new(DoublingGenerator),
            SequenceMethod::Binet => Box::new(BinetGenerator::new(self.config.max_safe_binet)),
        }
    }

    /// The first `limit` Fibonacci numbers computed with `method`
    /// (`"iterative"`, `"fast_doubling"` or `"binet"`).
    ///
    /// Only the iterative method is bounded by `sequence_limit`.
    pub fn generate_sequence(
        &self,
        method: &str,
        limit: impl Into<Operand>,
    ) -> FibResult<Vec<BigUint>> {
        let limit = index_to_u64(&require_non_negative(limit, "Limit")?, "Limit")?;
        let method: SequenceMethod = method.parse()?;
        let generator = self.generator(method);
        debug!(limit, generator = generator.name(), "generating sequence");
        generator.generate(limit)
    }

    /// F(n) mod m, reducing after every multiplication.
    pub fn fibonacci_mod(
        &self,
        n: impl Into<Operand>,
        m: impl Into<Operand>,
    ) -> FibResult<BigUint> {
        let n = into_biguint(require_non_negative(n, "n")?);
        let m = into_biguint(require_positive(m, "modulus")?);
        modular::fib_mod(&n, &m)
    }

    /// Pisano period: the period of F(n) mod m.
    pub fn pisano_period(&self, m: impl Into<Operand>) -> FibResult<u64> {
        let m = index_to_u64(&require_positive(m, "modulus")?, "modulus")?;
        let period = modular::pisano(m)?;
        debug!(modulus = m, period, "Pisano period found");
        Ok(period)
    }

    /// Summary of F(n): value, digit count, parity, ratio and magnitude.
    pub fn analyze_fibonacci(&self, n: impl Into<Operand>) -> FibResult<FibonacciAnalysis> {
        let n = index_to_u64(&require_non_negative(n, "n")?, "n")?;
        let fib_n = self.fibonacci(n)?;
        let fib_n1 = self.fibonacci(u128::from(n) + 1)?;
        Ok(FibonacciAnalysis::new(n, fib_n, &fib_n1))
    }
}

/// F(0)..=F(max), seeded from the u64 table.
fn build_cache(max: usize) -> Vec<BigUint> {
    let mut fibs: Vec<BigUint> = FIB_TABLE
        .iter()
        .take(max + 1)
        .map(|&v| BigUint::from(v))
        .collect();
    if fibs.len() < 2 {
        return fibs;
    }
    while fibs.len() <= max {
        let i = fibs.len();
        let next = &fibs[i - 1] + &fibs[i - 2];
        fibs.push(next);
    }
    fibs
}

/// Compute F(n) with a default engine.
pub fn fib(n: impl Into<Operand>) -> FibResult<BigUint> {
    FibonacciEngine::new().fibonacci(n)
}

/// Compute L(n) with a default engine.
pub fn lucas(n: impl Into<Operand>) -> FibResult<BigUint> {
    FibonacciEngine::new().lucas(n)
}

/// Compute F(n) mod m with a default engine.
pub fn fib_mod(n: impl Into<Operand>, m: impl Into<Operand>) -> FibResult<BigUint> {
    FibonacciEngine::new().fibonacci_mod(n, m)
}

/// Compute the Pisano period of m with a default engine.
pub fn pisano_period(m: impl Into<Operand>) -> FibResult<u64> {
    FibonacciEngine::new().pisano_period(m)
}
