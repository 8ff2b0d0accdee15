//! Configuration and URL issuing for the signlink gateway.
//!
//! This crate sits between the HTTP layer and the SigV4 presigner:
//!
//! - [`GatewayConfig`] / [`StorageConfig`] - immutable process configuration
//!   loaded once at startup from environment variables
//! - [`UrlIssuer`] - turns a validated [`TransferIntent`] into a
//!   [`SignedUrlPair`], applying the intent's extension hints to the GET
//!   URL's signed query string
//!
//! [`TransferIntent`]: signlink_model::TransferIntent
//! [`SignedUrlPair`]: signlink_model::SignedUrlPair

mod config;
mod error;
mod issuer;

pub use config::{GatewayConfig, StorageConfig};
pub use error::{ConfigError, IssueError};
pub use issuer::UrlIssuer;
