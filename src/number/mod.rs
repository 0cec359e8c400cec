//! Numeric kinds understood by the producers
//!
//! Statically typed sequences pick their numeric type at compile time.
//! [`Number`] covers the dynamic case where the kind (fixed or arbitrary
//! precision) is only known at runtime.

mod step;

pub use step::Steppable;

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;

/// Precision class of a [`Number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberKind {
    /// 64-bit signed integer
    Fixed,
    /// Arbitrary-precision integer
    Big,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Fixed => f.write_str("fixed-precision"),
            NumberKind::Big => f.write_str("arbitrary-precision"),
        }
    }
}

/// Integer whose precision is chosen at runtime
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    /// Fixed-precision value
    Fixed(i64),
    /// Arbitrary-precision value
    Big(BigInt),
}

impl Number {
    /// Precision class of this value
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Fixed(_) => NumberKind::Fixed,
            Number::Big(_) => NumberKind::Big,
        }
    }

    /// Widen to an arbitrary-precision integer
    pub fn to_big(&self) -> BigInt {
        match self {
            Number::Fixed(value) => BigInt::from(*value),
            Number::Big(value) => value.clone(),
        }
    }

    /// Parse a decimal literal, preferring the fixed kind when it fits
    pub fn parse(literal: &str) -> Option<Self> {
        let literal = literal.trim();
        if let Ok(value) = literal.parse::<i64>() {
            return Some(Number::Fixed(value));
        }
        literal.parse::<BigInt>().ok().map(Number::Big)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Fixed(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Big(value)
    }
}

// Values of different kinds are unordered, matching the derived equality.
impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Fixed(a), Number::Fixed(b)) => Some(a.cmp(b)),
            (Number::Big(a), Number::Big(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Fixed(value) => write!(f, "{value}"),
            Number::Big(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefers_fixed() {
        assert_eq!(Number::parse("42"), Some(Number::Fixed(42)));
        let big = Number::parse("123456789012345678901234567890").unwrap();
        assert_eq!(big.kind(), NumberKind::Big);
        assert_eq!(big.to_string(), "123456789012345678901234567890");
        assert_eq!(Number::parse("forty-two"), None);
    }

    #[test]
    fn test_mixed_kinds_are_unordered() {
        let fixed = Number::Fixed(7);
        let big = Number::Big(BigInt::from(7));
        assert_eq!(fixed.partial_cmp(&big), None);
        assert_ne!(fixed, big);
        assert_eq!(fixed.to_big(), big.to_big());
        assert!(Number::Fixed(5) < Number::Fixed(7));
    }
}
