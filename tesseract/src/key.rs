//! Dimension keys and their normalization.
//!
//! Callers address a [`Unit`](crate::Unit) entry with a [`UnitKey`]: free
//! text (`"Electric Charge"`, `"M"`), an identifier (`kine`), or a
//! [`Dimension`] directly. [`normalize`] turns any of these into the
//! [`DimensionKey`] used for storage.

use std::borrow::Cow;
use std::fmt;

use log::debug;

use crate::dimension::Dimension;
use crate::error::{UnitError, UnitResult};

/// A key as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitKey<'a> {
    /// Display text. Matched against the abbreviations first, then the
    /// first whitespace/hyphen run becomes `_` and the whole is lower-cased.
    Text(Cow<'a, str>),
    /// An identifier, used exactly as given.
    Symbol(Cow<'a, str>),
    Dimension(Dimension),
}

impl<'a> UnitKey<'a> {
    /// Builds an identifier key, bypassing text normalization.
    ///
    /// ```
    /// use tesseract::{Unit, UnitKey};
    ///
    /// let mut unit = Unit::new();
    /// unit.set(UnitKey::symbol("Kine"), 2).unwrap();
    /// assert_eq!(unit.get(UnitKey::symbol("Kine")).unwrap(), 2);
    /// assert_eq!(unit.get(UnitKey::symbol("kine")).unwrap(), 0);
    /// ```
    pub fn symbol(identifier: impl Into<Cow<'a, str>>) -> Self {
        UnitKey::Symbol(identifier.into())
    }

    fn raw(&self) -> &str {
        match self {
            UnitKey::Text(text) => &**text,
            UnitKey::Symbol(identifier) => &**identifier,
            UnitKey::Dimension(dim) => dim.name(),
        }
    }
}

impl<'a> From<&'a str> for UnitKey<'a> {
    fn from(text: &'a str) -> Self {
        UnitKey::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for UnitKey<'a> {
    fn from(text: &'a String) -> Self {
        UnitKey::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for UnitKey<'static> {
    fn from(text: String) -> Self {
        UnitKey::Text(Cow::Owned(text))
    }
}

impl From<Dimension> for UnitKey<'static> {
    fn from(dim: Dimension) -> Self {
        UnitKey::Dimension(dim)
    }
}

impl<'a> From<&'a DimensionKey> for UnitKey<'a> {
    fn from(key: &'a DimensionKey) -> Self {
        match key {
            DimensionKey::Fundamental(dim) => UnitKey::Dimension(*dim),
            DimensionKey::Custom(identifier) => UnitKey::Symbol(Cow::Borrowed(identifier.as_str())),
        }
    }
}

/// JSON strings are text keys. Every other JSON value is rejected, regardless
/// of strict mode.
impl<'a> TryFrom<&'a serde_json::Value> for UnitKey<'a> {
    type Error = UnitError;

    fn try_from(value: &'a serde_json::Value) -> UnitResult<Self> {
        match value {
            serde_json::Value::String(text) => Ok(UnitKey::Text(Cow::Borrowed(text.as_str()))),
            other => Err(UnitError::UnrecognizedUnit(other.to_string())),
        }
    }
}

/// A normalized storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DimensionKey {
    Fundamental(Dimension),
    /// Any identifier outside the registry. Only created in non-strict mode.
    Custom(String),
}

impl DimensionKey {
    /// An identifier that names a registered dimension always maps to
    /// [`DimensionKey::Fundamental`].
    pub fn from_identifier(identifier: &str) -> Self {
        match Dimension::from_name(identifier) {
            Some(dim) => DimensionKey::Fundamental(dim),
            None => DimensionKey::Custom(identifier.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DimensionKey::Fundamental(dim) => dim.name(),
            DimensionKey::Custom(identifier) => identifier.as_str(),
        }
    }

    /// Abbreviation for registered dimensions, the identifier otherwise.
    pub fn symbol(&self) -> &str {
        match self {
            DimensionKey::Fundamental(dim) => dim.abbreviation(),
            DimensionKey::Custom(identifier) => identifier.as_str(),
        }
    }

    pub fn is_fundamental(&self) -> bool {
        matches!(self, DimensionKey::Fundamental(_))
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes a caller-supplied key into a storage key.
///
/// With `strict` set, anything that does not land on a registered
/// [`Dimension`] is rejected with [`UnitError::UnrecognizedUnit`].
///
/// # Examples
///
/// ```
/// use tesseract::{normalize, Dimension, DimensionKey, UnitKey};
///
/// let key = normalize(&UnitKey::from("Electric Charge"), true).unwrap();
/// assert_eq!(key, DimensionKey::Fundamental(Dimension::ElectricCharge));
///
/// let key = normalize(&UnitKey::from("Θ"), true).unwrap();
/// assert_eq!(key, DimensionKey::Fundamental(Dimension::Temperature));
///
/// assert!(normalize(&UnitKey::from("Kine"), true).is_err());
/// assert_eq!(
///     normalize(&UnitKey::from("Kine"), false).unwrap(),
///     DimensionKey::Custom("kine".to_string())
/// );
/// ```
pub fn normalize(key: &UnitKey<'_>, strict: bool) -> UnitResult<DimensionKey> {
    let normalized = match key {
        UnitKey::Text(text) => match Dimension::from_abbreviation(text) {
            Some(dim) => DimensionKey::Fundamental(dim),
            None => DimensionKey::from_identifier(&collapse_and_lowercase(text)),
        },
        UnitKey::Symbol(identifier) => DimensionKey::from_identifier(identifier),
        UnitKey::Dimension(dim) => DimensionKey::Fundamental(*dim),
    };

    if strict && !normalized.is_fundamental() {
        debug!("Rejecting unrecognized unit {:?} in strict mode", key.raw());
        return Err(UnitError::unrecognized(key.raw()));
    }

    Ok(normalized)
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c' | '-')
}

/// Replaces the first run of whitespace or hyphens with `_`, then lower-cases.
fn collapse_and_lowercase(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut collapsed = false;

    while let Some(c) = chars.next() {
        if !collapsed && is_separator(c) {
            while chars.next_if(|next| is_separator(*next)).is_some() {}
            out.push('_');
            collapsed = true;
        } else {
            out.push(c);
        }
    }

    out.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn custom(identifier: &str) -> DimensionKey {
        DimensionKey::Custom(identifier.to_string())
    }

    #[test]
    fn test_collapse_only_first_run() {
        assert_eq!(collapse_and_lowercase("Electric Charge"), "electric_charge");
        assert_eq!(collapse_and_lowercase("Electric - \t Charge"), "electric_charge");
        assert_eq!(collapse_and_lowercase("a b c"), "a_b c");
        assert_eq!(collapse_and_lowercase("Mass"), "mass");
        assert_eq!(collapse_and_lowercase(" Mass"), "_mass");
        assert_eq!(collapse_and_lowercase(""), "");
    }

    #[test]
    fn test_abbreviation_wins_over_text_rule() {
        let key = normalize(&UnitKey::from("T"), false).unwrap();
        assert_eq!(key, DimensionKey::Fundamental(Dimension::Time));
    }

    #[test]
    fn test_near_miss_abbreviation_falls_through() {
        // "t" is not an abbreviation; it lower-cases to an unknown identifier
        assert_eq!(normalize(&UnitKey::from("t"), false).unwrap(), custom("t"));
        assert_eq!(normalize(&UnitKey::from("θ"), false).unwrap(), custom("θ"));
    }

    #[test]
    fn test_text_matching_canonical_name() {
        for text in ["Mass", "mass", "MASS"] {
            let key = normalize(&UnitKey::from(text), true).unwrap();
            assert_eq!(key, DimensionKey::Fundamental(Dimension::Mass));
        }
    }

    #[test]
    fn test_symbol_is_used_as_is() {
        assert_eq!(
            normalize(&UnitKey::symbol("mass"), true).unwrap(),
            DimensionKey::Fundamental(Dimension::Mass)
        );
        assert_eq!(normalize(&UnitKey::symbol("Mass"), false).unwrap(), custom("Mass"));
        assert_eq!(
            normalize(&UnitKey::symbol("Electric Charge"), false).unwrap(),
            custom("Electric Charge")
        );
        // abbreviations only apply to text
        assert_eq!(normalize(&UnitKey::symbol("M"), false).unwrap(), custom("M"));
    }

    #[test]
    fn test_strict_rejects_unknown() {
        let err = normalize(&UnitKey::symbol("kine"), true).unwrap_err();
        assert_eq!(err, UnitError::UnrecognizedUnit("\"kine\"".to_string()));
        assert!(normalize(&UnitKey::from("Unrecognized Unit"), true).is_err());
    }

    #[test]
    fn test_json_keys() {
        let text = json!("Mass");
        let key = UnitKey::try_from(&text).unwrap();
        assert_eq!(key, UnitKey::from("Mass"));

        for value in [json!(null), json!(3), json!({}), json!([1])] {
            assert!(matches!(
                UnitKey::try_from(&value),
                Err(UnitError::UnrecognizedUnit(_))
            ));
        }
    }

    #[test]
    fn test_dimension_key_symbol() {
        assert_eq!(DimensionKey::Fundamental(Dimension::Temperature).symbol(), "Θ");
        assert_eq!(custom("kine").symbol(), "kine");
        assert_eq!(custom("kine").to_string(), "kine");
    }
}
