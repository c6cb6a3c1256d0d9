//! Candidate construction errors.

/// Why a candidate could not be constructed.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required field was never set on the builder.
    #[display("Incomplete builder: {}", _0)]
    Incomplete(String),

    /// A required field is present but blank.
    #[display("Missing required field: {}", _0)]
    MissingField(String),

    /// A numeric field lies outside its allowed range.
    #[display("Field '{}' must be within [0, 1], got {}", field, value)]
    OutOfRange {
        /// The field name
        field: String,
        /// The offending value
        value: f64,
    },

    /// The extension map exceeds its bound.
    #[display("At most {} extension entries allowed, got {}", max, count)]
    TooManyExtensions {
        /// Entries supplied
        count: usize,
        /// Entries allowed
        max: usize,
    },
}

/// Candidate construction error with location tracking.
///
/// ```
/// use curator_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::new(BuilderErrorKind::TooManyExtensions { count: 20, max: 16 });
/// assert!(err.to_string().contains("got 20"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}
