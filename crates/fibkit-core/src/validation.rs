//! Integer coercion and validation for engine inputs.
//!
//! Every public operation receives its arguments as [`Operand`] values and
//! narrows them here before any arithmetic happens. Booleans are rejected
//! even though they are integer-like.

use std::fmt;
use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::{FibError, FibResult};

/// Capability of converting a custom value into an exact integer.
///
/// Implement this for domain types (e.g. newtype indices) that should be
/// accepted wherever the engine expects an integer.
pub trait IntegerLike: fmt::Debug + Send + Sync {
    /// Exact integer value, or `None` when the value has none.
    fn to_exact_integer(&self) -> Option<BigInt>;
}

/// A loosely typed input value, classified before validation.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A native integer of any width.
    Int(BigInt),
    /// A custom value exposing an exact integer conversion.
    Index(Arc<dyn IntegerLike>),
    /// A boolean. Never accepted as an integer.
    Bool(bool),
    /// A floating-point number. Never accepted as an integer.
    Float(f64),
    /// Text. Never accepted as an integer.
    Text(String),
}

impl Operand {
    /// Wrap a custom integer-like value.
    pub fn custom(value: impl IntegerLike + 'static) -> Self {
        Self::Index(Arc::new(value))
    }

    /// Short name of the operand's type, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Index(_) => "integer-like",
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Text(_) => "str",
        }
    }

    fn exact_integer(&self) -> Option<BigInt> {
        match self {
            Self::Int(v) => Some(v.clone()),
            Self::Index(v) => v.to_exact_integer(),
            Self::Bool(_) | Self::Float(_) | Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Index(v) => write!(f, "{v:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Operand {
            fn from(v: $t) -> Self {
                Self::Int(BigInt::from(v))
            }
        }
    )*};
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigUint);

impl From<BigInt> for Operand {
    fn from(v: BigInt) -> Self {
        Self::Int(v)
    }
}

impl From<&BigInt> for Operand {
    fn from(v: &BigInt) -> Self {
        Self::Int(v.clone())
    }
}

impl From<&Operand> for Operand {
    fn from(v: &Operand) -> Self {
        v.clone()
    }
}

impl From<bool> for Operand {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Operand {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Accept `value` only if it is an exact integer (booleans excluded).
pub fn require_int(value: impl Into<Operand>, desc: &str) -> FibResult<BigInt> {
    let value = value.into();
    value.exact_integer().ok_or_else(|| {
        FibError::validation(format!("{desc} must be integer, got {}", value.kind()))
    })
}

/// Accept `value` only if it is an exact integer `>= 0`.
pub fn require_non_negative(value: impl Into<Operand>, desc: &str) -> FibResult<BigInt> {
    let value = value.into();
    match value.exact_integer() {
        Some(v) if !v.is_negative() => Ok(v),
        _ => Err(FibError::validation(format!(
            "{desc} must be non-negative integer, got {value}"
        ))),
    }
}

/// Accept `value` only if it is an exact integer `> 0`.
pub fn require_positive(value: impl Into<Operand>, desc: &str) -> FibResult<BigInt> {
    let value = value.into();
    match value.exact_integer() {
        Some(v) if v.is_positive() => Ok(v),
        _ => Err(FibError::validation(format!(
            "{desc} must be positive integer, got {value}"
        ))),
    }
}

/// Validate every element of `values`, naming failures as `desc[i]`.
pub fn require_int_sequence<I>(values: I, desc: &str) -> FibResult<Vec<BigInt>>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| require_int(v, &format!("{desc}[{i}]")))
        .collect()
}

/// Narrow an already validated non-negative integer to `u64`.
pub fn index_to_u64(value: &BigInt, desc: &str) -> FibResult<u64> {
    value.to_u64().ok_or_else(|| {
        FibError::validation(format!("{desc} exceeds supported range, got {value}"))
    })
}

/// Convert an already validated non-negative integer to `BigUint`.
pub(crate) fn into_biguint(value: BigInt) -> BigUint {
    debug_assert!(!value.is_negative());
    value.to_biguint().unwrap_or_else(BigUint::zero)
}
