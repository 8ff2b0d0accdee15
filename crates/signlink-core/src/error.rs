//! Error types for configuration loading and URL issuing.

use signlink_sigv4::SignError;

/// Errors raised while loading the process configuration.
///
/// All of these are fatal: the server refuses to start rather than accept
/// traffic it cannot sign for.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Errors raised while issuing a presigned URL pair.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IssueError {
    /// The signing backend could not produce a URL.
    #[error("signing failed: {0}")]
    SigningFailed(#[from] SignError),
}
