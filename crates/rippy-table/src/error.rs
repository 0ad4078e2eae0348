//! Error types for loading table specs.

use thiserror::Error;

/// Result type for table spec operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors that can occur while loading or validating table specs.
///
/// Rendering itself never fails; only the spec loader returns these.
#[derive(Error, Debug)]
pub enum TableError {
    /// IO error while reading a spec file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Input file extension is not a known spec format.
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Spec parsed but describes a table that cannot be rendered as written.
    #[error("invalid table spec: {0}")]
    InvalidSpec(String),
}

impl TableError {
    /// Whether this error came from malformed input text.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, TableError::Json(_) | TableError::Toml(_))
    }
}
