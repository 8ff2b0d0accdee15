//! Model types for the signlink presigned URL gateway.
//!
//! This crate defines the request-scoped data model shared between the HTTP
//! layer and the URL issuer:
//!
//! - [`TransferIntent`] - the validated, normalized form of a
//!   `/presigned-url` request
//! - [`ExtensionHints`] - the vendor transfer-hint parameters derived from an
//!   intent, destined for the GET URL's signed query string
//! - [`SignedUrlPair`] - the JSON response payload
//! - [`ValidationError`] - rejection reasons for malformed requests
//!
//! All types are constructed once per request and carry no cross-request
//! state.

mod error;
mod hints;
mod types;

pub use error::ValidationError;
pub use hints::{
    ExtensionHints, HINT_CONTENT_DISPOSITION, HINT_LIMIT_RATE, HINT_MAX_REQUESTS, HINT_NO_WAIT,
};
pub use types::{SignedUrlPair, TransferIntent};
