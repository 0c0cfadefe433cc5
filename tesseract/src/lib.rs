//! Dimensional signatures of physical units.
//!
//! A [`Unit`] records, for each fundamental dimension (length, mass, time,
//! temperature, electric charge), the integer power it is raised to. Entries
//! are addressed by flexible keys and the whole signature renders in two
//! textual forms.
//!
//! # Quick start
//!
//! ```rust
//! use tesseract::Unit;
//!
//! let mut energy = Unit::new();
//! energy.set("mass", 1).unwrap();
//! energy.set("L", 2).unwrap();
//! energy.set("Time", -2).unwrap();
//!
//! assert_eq!(energy.inspect(), "mass length^2 / time^2");
//! assert_eq!(energy.to_string(), "ML2T-2");
//! ```
//!
//! # Keys
//!
//! - Text (`&str`, `String`): an exact abbreviation (`"M"`, `"Θ"`) selects
//!   that dimension; anything else has its first whitespace/hyphen run
//!   replaced by `_` and is lower-cased, so `"Electric Charge"` becomes
//!   `electric_charge`.
//! - Identifiers ([`UnitKey::symbol`]): used exactly as given.
//! - [`Dimension`] values.
//!
//! Unknown keys are stored as-is unless the unit is strict, in which case
//! they fail with [`UnitError::UnrecognizedUnit`].
//!
//! # What this crate does not try to solve
//!
//! - Arithmetic between units (multiplying or dividing signatures).
//! - Magnitudes and conversions between units of the same dimension.
//! - Parsing compound unit expressions such as `kg*m/s^2`.
//! - Equality between units.

pub mod config;
pub mod dimension;
pub mod error;
pub mod key;
pub mod unit;
pub mod value;

pub use config::UnitOptions;
pub use dimension::Dimension;
pub use error::{UnitError, UnitResult};
pub use key::{normalize, DimensionKey, UnitKey};
pub use unit::Unit;
pub use value::ExponentValue;
