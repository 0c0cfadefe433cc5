//! Error types for unit operations.

/// Result type for unit operations
pub type UnitResult<T> = Result<T, UnitError>;

/// Error type for unit operations.
///
/// Every operation that returns one of these leaves the [`Unit`](crate::Unit)
/// it was called on unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// The key is not a string or identifier, or strict mode rejected it.
    #[error("{0} is not a recognized unit")]
    UnrecognizedUnit(String),

    /// The exponent is present but is not a whole number.
    #[error("value must be an integer, got {0}")]
    InvalidValue(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl UnitError {
    pub(crate) fn unrecognized(key: impl std::fmt::Debug) -> Self {
        UnitError::UnrecognizedUnit(format!("{:?}", key))
    }
}
