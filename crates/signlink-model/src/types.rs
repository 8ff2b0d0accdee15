//! Core request/response types.

/// The validated, normalized form of a `/presigned-url` request.
///
/// An intent is produced by the HTTP layer's parameter resolver and consumed
/// by the URL issuer. Optional fields are `None` when the corresponding query
/// parameter was absent, non-positive, or failed to parse; `expiry_secs` is
/// always resolved (the default is applied at parse time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferIntent {
    /// The object key both URLs are signed for. Never empty.
    pub object_key: String,
    /// Exact upload size constraint for the PUT URL, in bytes.
    /// When present, guaranteed to lie in (0, [`Self::MAX_CONTENT_LENGTH`]].
    pub content_length: Option<i64>,
    /// Lifetime of both URLs, in seconds.
    pub expiry_secs: u64,
    /// Seconds the backend holds a GET connection open for a simultaneous
    /// transfer. When present, guaranteed to lie in [1, [`Self::MAX_NO_WAIT_SECS`]].
    pub no_wait_secs: Option<i64>,
    /// Maximum number of times the GET URL may be redeemed.
    pub max_requests: Option<i64>,
    /// Per-connection byte-rate cap for the GET URL.
    pub limit_rate: Option<i64>,
    /// Whether the GET URL forces an attachment download disposition.
    pub force_download: bool,
}

impl TransferIntent {
    /// Upper bound on the `content-length` constraint: 1 GiB.
    pub const MAX_CONTENT_LENGTH: i64 = 1024 * 1024 * 1024;

    /// URL lifetime applied when `expire` is absent or non-positive.
    pub const DEFAULT_EXPIRY_SECS: u64 = 3600;

    /// Ceiling for the `no-wait` hold time; larger values are clamped.
    pub const MAX_NO_WAIT_SECS: i64 = 10;

    /// Create an intent for the given key with every optional field unset
    /// and the default expiry.
    #[must_use]
    pub fn new(object_key: impl Into<String>) -> Self {
        Self {
            object_key: object_key.into(),
            content_length: None,
            expiry_secs: Self::DEFAULT_EXPIRY_SECS,
            no_wait_secs: None,
            max_requests: None,
            limit_rate: None,
            force_download: false,
        }
    }
}

/// The response payload: one presigned GET URL and one presigned PUT URL for
/// the same object key. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SignedUrlPair {
    /// Presigned download URL, carrying any extension hints in its signed
    /// query string.
    #[serde(rename = "get-url")]
    pub get_url: String,
    /// Presigned upload URL.
    #[serde(rename = "put-url")]
    pub put_url: String,
}
