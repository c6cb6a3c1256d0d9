//! Configuration error types.

/// Configuration error with source location.
///
/// `key` names the offending setting when validation can pin it down, e.g.
/// `scoring.weights.quality`.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {}{} at line {} in {}", key_prefix(key), message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Dotted path of the offending setting
    pub key: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

fn key_prefix(key: &Option<String>) -> String {
    key.as_ref().map(|k| format!("[{}] ", k)).unwrap_or_default()
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use curator_error::ConfigError;
    ///
    /// let err = ConfigError::new("Scoring weights sum to 0.9, expected 1.0");
    /// assert!(err.message.contains("weights"));
    /// assert!(err.key.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            key: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an error attributed to a specific setting.
    ///
    /// ```
    /// use curator_error::ConfigError;
    ///
    /// let err = ConfigError::for_key("scoring.region.scores.mars", "must be within [0, 1]");
    /// assert!(err.to_string().contains("[scoring.region.scores.mars]"));
    /// ```
    #[track_caller]
    pub fn for_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            key: Some(key.into()),
            line: location.line(),
            file: location.file(),
        }
    }
}
