//! Error type for presigning.

/// Errors that can occur while constructing a presigned URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignError {
    /// The storage endpoint is not an absolute URI with scheme and authority.
    #[error("invalid storage endpoint: {0}")]
    InvalidEndpoint(String),

    /// The bucket name is empty.
    #[error("bucket name must not be empty")]
    EmptyBucket,

    /// The object key is empty.
    #[error("object key must not be empty")]
    EmptyObjectKey,
}
