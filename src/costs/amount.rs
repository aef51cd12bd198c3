//! Money amounts that keep the numeric kind they were written with.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Whole decimals below this magnitude are emitted as integers.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// An amount as written in the config: integer (`100`) or decimal (`87.5`).
///
/// Arithmetic stays in the same kind, so an integer rate never turns into
/// `200.0` in the rendered document. A whole decimal (`87.5 × 4`) is also
/// written without the fraction.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Integer(i64),
    Decimal(f64),
}

impl Amount {
    pub fn zero() -> Self {
        Amount::Integer(0)
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Amount::Integer(v) => *v < 0,
            Amount::Decimal(v) => *v < 0.0,
        }
    }

    /// `self × n`. Integer overflow falls back to a decimal result.
    pub fn times(&self, n: u32) -> Self {
        match *self {
            Amount::Integer(v) => v
                .checked_mul(i64::from(n))
                .map(Amount::Integer)
                .unwrap_or(Amount::Decimal(v as f64 * f64::from(n))),
            Amount::Decimal(v) => Amount::Decimal(v * f64::from(n)),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Amount::Integer(v) => serializer.serialize_i64(v),
            Amount::Decimal(v) if v.fract() == 0.0 && v.abs() < EXACT_INTEGER_LIMIT => {
                serializer.serialize_i64(v as i64)
            }
            Amount::Decimal(v) => serializer.serialize_f64(v),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Integer(v) => write!(f, "{}", v),
            Amount::Decimal(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_stays_integer() {
        assert_eq!(Amount::Integer(100).times(2), Amount::Integer(200));
        assert_eq!(Amount::Integer(100).times(0), Amount::Integer(0));
    }

    #[test]
    fn decimal_stays_decimal() {
        assert_eq!(Amount::Decimal(87.5).times(4), Amount::Decimal(350.0));
    }

    #[test]
    fn overflow_falls_back_to_decimal() {
        let big = Amount::Integer(i64::MAX).times(2);
        assert!(matches!(big, Amount::Decimal(_)));
    }

    #[test]
    fn deserializes_as_written() {
        let int: Amount = serde_yaml::from_str("120").unwrap();
        assert_eq!(int, Amount::Integer(120));

        let dec: Amount = serde_yaml::from_str("120.5").unwrap();
        assert_eq!(dec, Amount::Decimal(120.5));
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Amount::Integer(200)).unwrap(), "200");
        assert_eq!(serde_json::to_string(&Amount::Decimal(87.5)).unwrap(), "87.5");
    }

    #[test]
    fn whole_decimal_serializes_without_fraction() {
        let total = Amount::Decimal(87.5).times(4);
        assert_eq!(serde_json::to_string(&total).unwrap(), "350");
        assert_eq!(total.to_string(), "350");
    }

    #[test]
    fn negative_detection() {
        assert!(Amount::Integer(-1).is_negative());
        assert!(Amount::Decimal(-0.5).is_negative());
        assert!(!Amount::zero().is_negative());
    }

    #[test]
    fn display() {
        assert_eq!(Amount::Integer(100).to_string(), "100");
        assert_eq!(Amount::Decimal(12.5).to_string(), "12.5");
    }
}
