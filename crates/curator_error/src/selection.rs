//! Selection error types.
//!
//! These are the only failures a selection call can surface. Relaxed
//! admission, missing benchmark data, and unknown candidates are not errors.

/// Specific selection failure conditions.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum SelectionErrorKind {
    /// Complexity score outside `[0, 1]` (or NaN).
    #[display("Complexity score must be within [0, 1], got {}", _0)]
    InvalidComplexity(f64),

    /// The candidate pool was empty at entry.
    #[display("No candidates available for selection")]
    NoCandidates,
}

/// Selection error with location tracking.
///
/// # Examples
///
/// ```
/// use curator_error::{SelectionError, SelectionErrorKind};
///
/// let err = SelectionError::new(SelectionErrorKind::InvalidComplexity(1.5));
/// assert!(format!("{}", err).contains("1.5"));
/// assert!(matches!(err.kind(), SelectionErrorKind::InvalidComplexity(_)));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Selection Error: {} at line {} in {}", kind, line, file)]
pub struct SelectionError {
    /// The specific error kind
    pub kind: SelectionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl SelectionError {
    /// Create a new selection error with location tracking.
    #[track_caller]
    pub fn new(kind: SelectionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SelectionErrorKind {
        &self.kind
    }
}

/// Result type for selection operations.
pub type SelectionResult<T> = Result<T, SelectionError>;
