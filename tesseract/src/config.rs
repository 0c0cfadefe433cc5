//! Unit options and configuration file support.
//!
//! Options can be built in code or read from the `[units]` table of a TOML
//! document:
//!
//! ```toml
//! [units]
//! strict = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{UnitError, UnitResult};

/// Per-instance options for a [`Unit`](crate::Unit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitOptions {
    /// Reject keys outside the fundamental dimension registry.
    pub strict: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    units: UnitOptions,
}

impl UnitOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Parse options from a TOML document.
    ///
    /// A document without a `[units]` table yields the defaults.
    ///
    /// # Returns
    /// * `Ok(UnitOptions)` if the document parses
    /// * `Err(UnitError::Configuration)` otherwise
    pub fn from_toml_str(content: &str) -> UnitResult<Self> {
        let config: ConfigFile = toml::from_str(content).map_err(|e| {
            UnitError::Configuration(format!("Failed to parse config: {}", e))
        })?;

        Ok(config.units)
    }

    /// Load options from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> UnitResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            UnitError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }
}
