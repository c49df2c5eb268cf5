use thiserror::Error;

/// Main error type for track selection
#[derive(Error, Debug)]
pub enum SelectorError {
    /// The default variant picker was handed an empty enabled set.
    /// Callers only pick a default when more than one variant is enabled.
    #[error("Cannot pick a default variant from an empty variant set")]
    EmptyVariantSet,

    #[error("Invalid variant at manifest index {index}: {reason}")]
    InvalidVariant { index: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SelectorError>;
