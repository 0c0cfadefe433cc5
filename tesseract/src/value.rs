//! Exponent input values.
//!
//! Exponents are stored as `i32`, but callers working from dynamic data
//! (JSON, TOML tables) hand over whatever they parsed. [`ExponentValue`]
//! carries that input until [`ExponentValue::resolve`] validates it.

use serde_json::Value;

use crate::error::{UnitError, UnitResult};

/// An exponent as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExponentValue {
    /// No value. Resets the exponent to zero.
    Absent,
    Integer(i64),
    Float(f64),
    Text(String),
    /// Any other shape, kept as its JSON text for error reporting.
    Other(String),
}

impl ExponentValue {
    /// Validates the input as a whole-number exponent.
    ///
    /// ```
    /// use tesseract::ExponentValue;
    ///
    /// assert_eq!(ExponentValue::Absent.resolve().unwrap(), 0);
    /// assert_eq!(ExponentValue::from(-2).resolve().unwrap(), -2);
    /// assert!(ExponentValue::from(2.0).resolve().is_err());
    /// assert!(ExponentValue::from("not an integer").resolve().is_err());
    /// ```
    pub fn resolve(&self) -> UnitResult<i32> {
        match self {
            ExponentValue::Absent => Ok(0),
            ExponentValue::Integer(n) => i32::try_from(*n)
                .map_err(|_| UnitError::InvalidValue(format!("{} (out of range)", n))),
            ExponentValue::Float(f) => Err(UnitError::InvalidValue(format!("{:?}", f))),
            ExponentValue::Text(text) => Err(UnitError::InvalidValue(format!("{:?}", text))),
            ExponentValue::Other(desc) => Err(UnitError::InvalidValue(desc.clone())),
        }
    }
}

impl From<i32> for ExponentValue {
    fn from(n: i32) -> Self {
        ExponentValue::Integer(i64::from(n))
    }
}

impl From<i64> for ExponentValue {
    fn from(n: i64) -> Self {
        ExponentValue::Integer(n)
    }
}

impl From<Option<i32>> for ExponentValue {
    fn from(value: Option<i32>) -> Self {
        value.map_or(ExponentValue::Absent, ExponentValue::from)
    }
}

impl From<f64> for ExponentValue {
    fn from(f: f64) -> Self {
        ExponentValue::Float(f)
    }
}

impl From<&str> for ExponentValue {
    fn from(text: &str) -> Self {
        ExponentValue::Text(text.to_string())
    }
}

impl From<&Value> for ExponentValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => ExponentValue::Absent,
            Value::Number(n) => match n.as_i64() {
                Some(i) => ExponentValue::Integer(i),
                // u64 beyond i64 range, or any float
                None => match n.as_f64() {
                    Some(f) if !n.is_u64() => ExponentValue::Float(f),
                    _ => ExponentValue::Other(n.to_string()),
                },
            },
            Value::String(text) => ExponentValue::Text(text.clone()),
            other => ExponentValue::Other(other.to_string()),
        }
    }
}
