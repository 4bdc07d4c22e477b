use thiserror::Error;

/// Error types for the lmeval-rs library.
#[derive(Error, Debug)]
pub enum LmEvalError {
    /// Error indicating a mismatch between vector lengths and the dataset size.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Error raised by a progress reporter's output sink.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error from the machine-readable reporter.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error for cases that don't fit the other categories.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for lmeval-rs operations.
pub type Result<T> = std::result::Result<T, LmEvalError>;

/// Extensions for converting from other error types.
impl From<String> for LmEvalError {
    fn from(s: String) -> Self {
        LmEvalError::Other(s)
    }
}

impl From<&str> for LmEvalError {
    fn from(s: &str) -> Self {
        LmEvalError::Other(s.to_string())
    }
}
