use std::fmt;

/// Result alias for fallible core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors produced while building datasets.
#[derive(Debug)]
pub enum CoreError {
    /// A dataset configuration value is invalid for semantic reasons.
    InvalidConfig(&'static str),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidConfig(msg) => write!(f, "invalid dataset config: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}
