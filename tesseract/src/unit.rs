//! The [`Unit`] value type.

use std::fmt;

use log::{debug, trace};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::UnitOptions;
use crate::error::{UnitError, UnitResult};
use crate::key::{normalize, DimensionKey, UnitKey};
use crate::value::ExponentValue;

const STRICT_ENTRY: &str = "strict";

/// The dimensional signature of a physical unit.
///
/// A `Unit` maps dimension keys to integer exponents. Keys that were never
/// set read as zero. Entries keep the order in which they were first set,
/// and both renderings follow that order.
///
/// # Examples
///
/// ```
/// use tesseract::{Dimension, Unit};
///
/// let mut force = Unit::new();
/// force.set(Dimension::Mass, 1).unwrap();
/// force.set("Length", 1).unwrap();
/// force.set("T", -2).unwrap();
///
/// assert_eq!(force.get("M").unwrap(), 1);
/// assert_eq!(force.inspect(), "mass length / time^2");
/// assert_eq!(force.to_string(), "MLT-2");
/// ```
#[derive(Clone, Default)]
pub struct Unit {
    exponents: Vec<(DimensionKey, i32)>,
    strict: bool,
}

impl Unit {
    /// An empty, non-strict unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty unit that rejects keys outside the registry.
    pub fn strict() -> Self {
        Self::with_options(UnitOptions::strict())
    }

    pub fn with_options(options: UnitOptions) -> Self {
        Self {
            exponents: Vec::new(),
            strict: options.strict,
        }
    }

    /// Builds a unit from key/exponent pairs, applied in iteration order.
    ///
    /// ```
    /// use tesseract::{Unit, UnitOptions};
    ///
    /// let unit = Unit::from_units([("mass", 1), ("length", 2), ("time", -2)], UnitOptions::default()).unwrap();
    /// assert_eq!(unit.to_string(), "ML2T-2");
    ///
    /// let err = Unit::from_units([("kine", 2)], UnitOptions::strict());
    /// assert!(err.is_err());
    /// ```
    pub fn from_units<'a, I, K, V>(units: I, options: UnitOptions) -> UnitResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<UnitKey<'a>>,
        V: Into<ExponentValue>,
    {
        let mut unit = Self::with_options(options);
        for (key, value) in units {
            unit.set(key, value)?;
        }
        Ok(unit)
    }

    /// Builds a unit from a JSON object whose entries are unit assignments,
    /// optionally mixed with a `"strict"` flag.
    ///
    /// The `"strict"` entry is removed before the remaining entries are
    /// applied. Any value other than `false` or null turns strict mode on.
    ///
    /// ```
    /// use serde_json::json;
    /// use tesseract::Unit;
    ///
    /// let unit = Unit::from_value(&json!({"mass": 1, "length": 2, "strict": true})).unwrap();
    /// assert!(unit.is_strict());
    /// assert_eq!(unit.get("length").unwrap(), 2);
    ///
    /// assert!(Unit::from_value(&json!({"kine": 2, "strict": true})).is_err());
    /// ```
    pub fn from_value(value: &Value) -> UnitResult<Self> {
        let entries = as_object(value)?;
        let strict = !matches!(
            entries.get(STRICT_ENTRY),
            None | Some(Value::Null) | Some(Value::Bool(false))
        );

        let mut unit = Self::with_options(UnitOptions { strict });
        for (key, value) in entries.iter().filter(|(key, _)| key.as_str() != STRICT_ENTRY) {
            unit.set(key, value)?;
        }
        Ok(unit)
    }

    /// Builds a unit from a JSON object of unit assignments with separate
    /// options. Every entry of the object is treated as a unit key.
    pub fn from_value_with_options(value: &Value, options: UnitOptions) -> UnitResult<Self> {
        Self::from_units(as_object(value)?, options)
    }

    /// Returns the exponent stored for `key`, or 0 if it was never set.
    ///
    /// # Errors
    ///
    /// [`UnitError::UnrecognizedUnit`] if the unit is strict and `key` does
    /// not name a fundamental dimension.
    pub fn get<'a>(&self, key: impl Into<UnitKey<'a>>) -> UnitResult<i32> {
        let key: UnitKey<'a> = key.into();
        let key = normalize(&key, self.strict)?;
        Ok(self
            .exponents
            .iter()
            .find(|(stored, _)| *stored == key)
            .map_or(0, |(_, exponent)| *exponent))
    }

    /// Stores the exponent for `key`, overwriting any previous value.
    ///
    /// An absent value (`None`, JSON `null`) stores zero. On error nothing
    /// is written.
    ///
    /// # Errors
    ///
    /// * [`UnitError::InvalidValue`] if the value is not a whole number,
    ///   checked before the key
    /// * [`UnitError::UnrecognizedUnit`] if the key is rejected
    pub fn set<'a>(
        &mut self,
        key: impl Into<UnitKey<'a>>,
        value: impl Into<ExponentValue>,
    ) -> UnitResult<()> {
        let value: ExponentValue = value.into();
        let key: UnitKey<'a> = key.into();
        let exponent = value.resolve().map_err(|e| {
            debug!("Rejecting exponent for {:?}: {}", key, e);
            e
        })?;
        let key = normalize(&key, self.strict)?;

        trace!("Setting {} to {}", key, exponent);
        match self.exponents.iter_mut().find(|(stored, _)| *stored == key) {
            Some((_, stored)) => *stored = exponent,
            None => self.exponents.push((key, exponent)),
        }
        Ok(())
    }

    /// Sets the exponent for `key` back to zero.
    pub fn reset<'a>(&mut self, key: impl Into<UnitKey<'a>>) -> UnitResult<()> {
        self.set(key, ExponentValue::Absent)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Toggles strict mode. Entries already stored are not revalidated.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Stored entries in insertion order, zero exponents included.
    pub fn exponents(&self) -> impl Iterator<Item = (&DimensionKey, i32)> + '_ {
        self.exponents.iter().map(|(key, exponent)| (key, *exponent))
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|(_, exponent)| *exponent == 0)
    }

    /// Verbose rendering with full names and a `/` divider.
    ///
    /// Positive terms come first. Negative terms follow the divider with
    /// their sign dropped. If there are no positive terms, there is no
    /// divider and negative exponents keep their sign. A negative term
    /// always shows its exponent, so `time^-1` after the divider reads
    /// `time^1`.
    ///
    /// ```
    /// use tesseract::Unit;
    ///
    /// let mut unit = Unit::new();
    /// unit.set("mass", -3).unwrap();
    /// assert_eq!(unit.inspect(), "mass^-3");
    /// ```
    pub fn inspect(&self) -> String {
        let positive: Vec<_> = self.exponents.iter().filter(|(_, e)| *e > 0).collect();
        let negative: Vec<_> = self.exponents.iter().filter(|(_, e)| *e < 0).collect();

        let mut out = render_terms(positive.iter().map(|(key, e)| (key, *e, *e)));
        if !positive.is_empty() && !negative.is_empty() {
            out.push_str(" / ");
        }

        let invert = !positive.is_empty();
        out.push_str(&render_terms(negative.iter().map(|(key, e)| {
            let shown = if invert { -i64::from(*e) } else { i64::from(*e) };
            (key, *e, shown)
        })));

        out.trim().to_string()
    }

    /// Compact rendering with abbreviations and inline signed exponents,
    /// e.g. `ML2T-2`. Same as the [`Display`](fmt::Display) output.
    pub fn symbolic(&self) -> String {
        self.to_string()
    }
}

/// Joins `(key, exponent, shown)` terms with spaces. The `^shown` suffix is
/// omitted only when the stored exponent is exactly 1.
fn render_terms<'a, S: fmt::Display>(
    terms: impl Iterator<Item = (&'a DimensionKey, i32, S)>,
) -> String {
    terms
        .map(|(key, exponent, shown)| {
            if exponent == 1 {
                key.to_string()
            } else {
                format!("{}^{}", key, shown)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn as_object(value: &Value) -> UnitResult<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        UnitError::InvalidValue(format!("{} (expected an object of unit exponents)", value))
    })
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, exponent) in self.exponents() {
            if exponent == 0 {
                continue;
            }
            f.write_str(key.symbol())?;
            if exponent != 1 {
                write!(f, "{}", exponent)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit({})", self.inspect())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.exponents.len()))?;
        for (key, exponent) in self.exponents() {
            map.serialize_entry(key.as_str(), &exponent)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Unit::from_value(&value).map_err(de::Error::custom)
    }
}
