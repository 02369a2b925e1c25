//! Error types
//!
//! The taxonomy is intentionally small. Malformed user input (bad direction
//! hints, non-numeric page numbers) is never an error: it is normalized to a
//! default. Only contract violations and configuration failures surface here.

use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the crate
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// A required value was absent or outside its contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value was read before it was populated
    #[error("Null state: {0}")]
    NullState(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),
}

impl Error {
    /// Create an [`Error::InvalidArgument`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_paging::Error;
    ///
    /// let err = Error::invalid_argument("id must not be null");
    /// assert!(err.is_invalid_argument());
    /// assert_eq!(err.to_string(), "Invalid argument: id must not be null");
    /// ```
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an [`Error::NullState`]
    pub fn null_state(message: impl Into<String>) -> Self {
        Self::NullState(message.into())
    }

    /// Whether this is an [`Error::InvalidArgument`]
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Whether this is an [`Error::NullState`]
    #[must_use]
    pub fn is_null_state(&self) -> bool {
        matches!(self, Self::NullState(_))
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
