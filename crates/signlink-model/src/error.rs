//! Validation error type for incoming requests.

/// Errors produced while resolving query parameters into a
/// [`TransferIntent`](crate::TransferIntent).
///
/// These are the only hard request-validation failures; every other
/// parameter is parsed best-effort and falls back to its default.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The required `key` parameter is missing or empty.
    #[error("Missing required parameter: key")]
    MissingKey,

    /// The `content-length` parameter is present but is not an integer in
    /// (0, 1073741824].
    #[error("Invalid content-length: {0}")]
    InvalidContentLength(String),
}
