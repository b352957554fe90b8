//! Error types for the word segmentation library.
//!
//! The segmentation algorithm itself never fails; the only raised condition
//! is merging a glyph with something that is not a glyph. The remaining
//! variants come from the JSON helpers used by tooling.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or merging layout entities.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An operation received an operand of the wrong kind
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
