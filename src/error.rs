//! Error types for rs-mobilizer.
//!
//! Extraction itself almost never fails: selection always falls back to the
//! document root and rule-table problems are reported as data. The variants
//! here cover the few precondition violations that abort a call.

/// Error type for mobilize operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No document was supplied (zero-length input).
    #[error("missing document")]
    MissingDocument,

    /// Configuration or input could not be parsed.
    #[error("parse failed: {0}")]
    ParseError(String),
}

/// Result type alias for mobilize operations.
pub type Result<T> = std::result::Result<T, Error>;
