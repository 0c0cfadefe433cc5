//! The fundamental dimension registry.
//!
//! A [`Dimension`] is one of the physical base quantities tracked
//! independently by a [`Unit`](crate::Unit). Each carries a canonical
//! identifier (`"length"`) and a unique one-character abbreviation (`"L"`).
//!
//! | dimension         | name              | abbreviation |
//! |-------------------|-------------------|--------------|
//! | `Length`          | `length`          | `L`          |
//! | `Mass`            | `mass`            | `M`          |
//! | `Time`            | `time`            | `T`          |
//! | `Temperature`     | `temperature`     | `Θ`          |
//! | `ElectricCharge`  | `electric_charge` | `Q`          |

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{UnitError, UnitResult};

/// A fundamental physical dimension.
///
/// # Examples
///
/// ```
/// use tesseract::Dimension;
///
/// assert_eq!(Dimension::Temperature.abbreviation(), "Θ");
/// assert_eq!(Dimension::from_abbreviation("Q"), Some(Dimension::ElectricCharge));
/// assert_eq!("electric_charge".parse::<Dimension>().unwrap(), Dimension::ElectricCharge);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Length,
    Mass,
    Time,
    Temperature,
    ElectricCharge,
}

static ABBREVIATIONS: Lazy<HashMap<&'static str, Dimension>> = Lazy::new(|| {
    Dimension::ALL
        .iter()
        .map(|dim| (dim.abbreviation(), *dim))
        .collect()
});

impl Dimension {
    /// Every registered dimension, in registry order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Length,
        Dimension::Mass,
        Dimension::Time,
        Dimension::Temperature,
        Dimension::ElectricCharge,
    ];

    /// Canonical identifier, e.g. `"electric_charge"`.
    pub const fn name(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Time => "time",
            Dimension::Temperature => "temperature",
            Dimension::ElectricCharge => "electric_charge",
        }
    }

    /// One-character symbol used by the symbolic rendering.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Dimension::Length => "L",
            Dimension::Mass => "M",
            Dimension::Time => "T",
            Dimension::Temperature => "Θ",
            Dimension::ElectricCharge => "Q",
        }
    }

    /// Looks up a dimension by its canonical identifier. Exact match only.
    pub fn from_name(name: &str) -> Option<Dimension> {
        Dimension::ALL.iter().copied().find(|dim| dim.name() == name)
    }

    /// Looks up a dimension by abbreviation.
    ///
    /// The match is exact and case-sensitive: `"m"` is not `"M"`.
    pub fn from_abbreviation(abbreviation: &str) -> Option<Dimension> {
        ABBREVIATIONS.get(abbreviation).copied()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = UnitError;

    fn from_str(s: &str) -> UnitResult<Self> {
        Dimension::from_name(s)
            .or_else(|| Dimension::from_abbreviation(s))
            .ok_or_else(|| UnitError::unrecognized(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_abbreviations_are_unique() {
        let unique: HashSet<_> = Dimension::ALL.iter().map(|d| d.abbreviation()).collect();
        assert_eq!(unique.len(), Dimension::ALL.len());
    }

    #[test]
    fn test_reverse_lookup_matches_forward_table() {
        for dim in Dimension::ALL {
            assert_eq!(Dimension::from_abbreviation(dim.abbreviation()), Some(dim));
            assert_eq!(Dimension::from_name(dim.name()), Some(dim));
        }
    }

    #[test]
    fn test_abbreviation_lookup_is_case_sensitive() {
        assert_eq!(Dimension::from_abbreviation("m"), None);
        assert_eq!(Dimension::from_abbreviation("θ"), None);
        assert_eq!(Dimension::from_abbreviation("Mass"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("T".parse::<Dimension>(), Ok(Dimension::Time));
        assert_eq!("temperature".parse::<Dimension>(), Ok(Dimension::Temperature));
        assert!(matches!(
            "kine".parse::<Dimension>(),
            Err(UnitError::UnrecognizedUnit(_))
        ));
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Dimension::ElectricCharge).unwrap();
        assert_eq!(json, "\"electric_charge\"");
        let back: Dimension = serde_json::from_str("\"length\"").unwrap();
        assert_eq!(back, Dimension::Length);
    }
}
