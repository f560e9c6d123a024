//! Error types for bar rendering.
//!
//! Most of the engine is deliberately infallible: unknown placeholders, unknown
//! progress units and missing colors all degrade silently. What remains are
//! name lookups for formats, markup modes and progress units, and the output
//! stream itself.

/// Error type for rendering and writing bar output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// An output format name that is not one of the known consumers.
    #[error("unknown output format: {0}")]
    UnknownOutputFormat(String),

    /// A markup mode name other than `none` or `pango`.
    #[error("unknown markup mode: {0}")]
    UnknownMarkup(String),

    /// A progress unit name outside the known periods.
    #[error("unknown progress unit: {0}")]
    UnknownProgressUnit(String),

    /// Block serialization for the structured protocol failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing to the output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
