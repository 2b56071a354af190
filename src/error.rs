//! Error types for configuration and input handling.

use std::io;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a run. A low-confidence classification is not an error;
/// it is rendered as `unknown` by the output module.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested ISO 639-1 code does not name a supported language
    #[error("unknown ISO 639-1 language code: {code:?}")]
    UnknownLanguage { code: String },

    /// Minimum relative distance outside the range the detector accepts
    #[error("minimum relative distance must be between 0.0 and 0.99, got {value}")]
    InvalidRelativeDistance { value: f64 },

    /// Reading input or writing results failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an unknown-language error for the offending code
    pub fn unknown_language(code: impl Into<String>) -> Self {
        Self::UnknownLanguage { code: code.into() }
    }

    /// The reader of our output went away, e.g. `lingua-cli -n < big | head`
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
