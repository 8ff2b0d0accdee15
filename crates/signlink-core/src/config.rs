//! Configuration management for the signlink gateway.
//!
//! All configuration is driven by environment variables. The storage
//! credentials and bucket are required; the server refuses to start without
//! them. Everything else has a default suitable for local development.

use crate::error::ConfigError;

/// Connection and signing parameters for the S3-compatible storage backend.
///
/// Built once at startup and shared read-only for the lifetime of the
/// process.
#[derive(Clone)]
pub struct StorageConfig {
    /// Storage endpoint URL (scheme + authority).
    pub endpoint: String,
    /// Signing region.
    pub region: String,
    /// The single bucket all URLs are signed for.
    pub bucket: String,
    /// Static access key ID.
    pub access_key: String,
    /// Static secret access key.
    pub secret_key: String,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("access_key", &self.access_key)
            .field("secret_key", &"...")
            .finish()
    }
}

/// Full gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address for the HTTP server.
    pub listen: String,
    /// Log level filter (overridden by `RUST_LOG` when set).
    pub log_level: String,
    /// Storage backend parameters.
    pub storage: StorageConfig,
}

impl GatewayConfig {
    /// Default bind address.
    pub const DEFAULT_LISTEN: &str = "0.0.0.0:1998";

    /// Default storage endpoint.
    pub const DEFAULT_ENDPOINT: &str = "https://s3.bitiful.net";

    /// Default signing region.
    pub const DEFAULT_REGION: &str = "cn-east-1";

    /// Load configuration from environment variables.
    ///
    /// | Variable | Required | Default |
    /// |----------|----------|---------|
    /// | `BUCKET` | yes | - |
    /// | `ACCESS_KEY` / `AWS_ACCESS_KEY_ID` | yes | - |
    /// | `SECRET_KEY` / `AWS_SECRET_ACCESS_KEY` | yes | - |
    /// | `S3_ENDPOINT` | no | `https://s3.bitiful.net` |
    /// | `REGION` | no | `cn-east-1` |
    /// | `GATEWAY_LISTEN` | no | `0.0.0.0:1998` |
    /// | `LOG_LEVEL` | no | `info` |
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when a required variable is unset
    /// or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bucket = require_var("BUCKET")?;
        let access_key = env_var("ACCESS_KEY")
            .or_else(|| env_var("AWS_ACCESS_KEY_ID"))
            .ok_or(ConfigError::MissingVar("ACCESS_KEY"))?;
        let secret_key = env_var("SECRET_KEY")
            .or_else(|| env_var("AWS_SECRET_ACCESS_KEY"))
            .ok_or(ConfigError::MissingVar("SECRET_KEY"))?;

        Ok(Self {
            listen: env_var("GATEWAY_LISTEN").unwrap_or_else(|| Self::DEFAULT_LISTEN.to_owned()),
            log_level: env_var("LOG_LEVEL").unwrap_or_else(|| "info".to_owned()),
            storage: StorageConfig {
                endpoint: env_var("S3_ENDPOINT")
                    .unwrap_or_else(|| Self::DEFAULT_ENDPOINT.to_owned()),
                region: env_var("REGION").unwrap_or_else(|| Self::DEFAULT_REGION.to_owned()),
                bucket,
                access_key,
                secret_key,
            },
        })
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Read a required environment variable.
fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env_var(name).ok_or(ConfigError::MissingVar(name))
}
