//! HTTP layer for the signlink gateway.
//!
//! This crate turns the issuer into a hyper-compatible service:
//!
//! 1. Health check interception (`GET /health`)
//! 2. CORS preflight requests (`OPTIONS`)
//! 3. Query-string resolution into a [`TransferIntent`]
//!    ([`request::resolve_intent`])
//! 4. URL issuing via [`UrlIssuer`](signlink_core::UrlIssuer)
//! 5. JSON response serialization with permissive CORS headers
//! 6. Error mapping (validation failures to `400`, signing failures to
//!    `500`, both with empty bodies)
//!
//! [`TransferIntent`]: signlink_model::TransferIntent

pub mod body;
pub mod request;
pub mod response;
pub mod service;

pub use body::ResponseBody;
pub use request::resolve_intent;
pub use service::GatewayHttpService;
