//! Errors reading candidate pools and benchmark tables, or writing results.

/// What went wrong with an input or output document.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputErrorKind {
    /// The file could not be read.
    #[display("Failed to read {}: {}", path, reason)]
    Read {
        /// File path
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// The document is not valid JSON for the expected shape.
    #[display("Failed to parse {} at {}:{}: {}", path, line, column, reason)]
    Parse {
        /// File path
        path: String,
        /// 1-based line of the failure
        line: usize,
        /// 1-based column of the failure
        column: usize,
        /// Parser message
        reason: String,
    },

    /// A result could not be serialized for output.
    #[display("Failed to encode output: {}", _0)]
    Encode(String),
}

/// Input/output document error with location tracking.
///
/// # Examples
///
/// ```
/// use curator_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::Read {
///     path: "pool.json".to_string(),
///     reason: "No such file or directory".to_string(),
/// });
/// assert!(err.to_string().contains("pool.json"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The specific error kind
    pub kind: InputErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InputError {
    /// Create a new input error with location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InputErrorKind {
        &self.kind
    }

    /// A read failure for `path`.
    #[track_caller]
    pub fn read(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::new(InputErrorKind::Read {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }

    /// A parse failure for `path`, keeping the parser's position.
    #[cfg(feature = "json")]
    #[track_caller]
    pub fn parse(path: &std::path::Path, err: &serde_json::Error) -> Self {
        Self::new(InputErrorKind::Parse {
            path: path.display().to_string(),
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        })
    }

    /// An output serialization failure.
    #[track_caller]
    pub fn encode(err: impl std::fmt::Display) -> Self {
        Self::new(InputErrorKind::Encode(err.to_string()))
    }
}
