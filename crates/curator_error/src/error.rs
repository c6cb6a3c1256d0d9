//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, InputError, SelectionError};

/// Every error condition the Curator crates can produce.
///
/// # Examples
///
/// ```
/// use curator_error::{CuratorError, ConfigError};
///
/// let config_err = ConfigError::new("Missing [scoring] table");
/// let err: CuratorError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CuratorErrorKind {
    /// Selection failure (invalid complexity, empty pool)
    #[from(SelectionError)]
    Selection(SelectionError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Candidate pool or benchmark table could not be read
    #[from(InputError)]
    Input(InputError),
}

/// Curator error with kind discrimination.
///
/// # Examples
///
/// ```
/// use curator_error::{CuratorResult, ConfigError};
///
/// fn might_fail() -> CuratorResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Curator Error: {}", _0)]
pub struct CuratorError(Box<CuratorErrorKind>);

impl CuratorError {
    /// Create a new error from a kind.
    pub fn new(kind: CuratorErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CuratorErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CuratorErrorKind
impl<T> From<T> for CuratorError
where
    T: Into<CuratorErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Curator operations.
pub type CuratorResult<T> = std::result::Result<T, CuratorError>;
