//! Extension hint derivation.
//!
//! Extension hints are the non-standard query parameters the storage backend
//! recognizes on a GET URL: a simultaneous-transfer hold time, a redemption
//! count limit, a per-connection rate cap, and a forced-download content
//! disposition. They must appear inside the URL's *signed* query string, so
//! the issuer merges them into the request before the signature is computed.

use crate::types::TransferIntent;

/// Hint parameter: seconds to hold a GET connection open for a simultaneous
/// transfer.
pub const HINT_NO_WAIT: &str = "no-wait";

/// Hint parameter: maximum number of times the GET URL may be redeemed.
pub const HINT_MAX_REQUESTS: &str = "x-bitiful-max-requests";

/// Hint parameter: per-connection byte-rate cap.
pub const HINT_LIMIT_RATE: &str = "x-bitiful-limit-rate";

/// Hint parameter: response content disposition override.
pub const HINT_CONTENT_DISPOSITION: &str = "response-content-disposition";

/// An ordered mapping from extension-parameter name to value, derived from a
/// [`TransferIntent`]'s optional fields.
///
/// The mapping is empty when no optional field is set, and is owned
/// exclusively by the single request's signing step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionHints {
    pairs: Vec<(String, String)>,
}

impl ExtensionHints {
    /// Derive the hints for an intent, omitting every absent field.
    ///
    /// # Examples
    ///
    /// ```
    /// use signlink_model::{ExtensionHints, TransferIntent};
    ///
    /// let mut intent = TransferIntent::new("tmp/test");
    /// intent.max_requests = Some(5);
    /// let hints = ExtensionHints::from_intent(&intent);
    /// assert_eq!(
    ///     hints.pairs(),
    ///     &[("x-bitiful-max-requests".to_owned(), "5".to_owned())]
    /// );
    /// ```
    #[must_use]
    pub fn from_intent(intent: &TransferIntent) -> Self {
        let mut pairs = Vec::new();

        if let Some(no_wait) = intent.no_wait_secs {
            pairs.push((HINT_NO_WAIT.to_owned(), no_wait.to_string()));
        }
        if let Some(max_requests) = intent.max_requests {
            pairs.push((HINT_MAX_REQUESTS.to_owned(), max_requests.to_string()));
        }
        if let Some(limit_rate) = intent.limit_rate {
            pairs.push((HINT_LIMIT_RATE.to_owned(), limit_rate.to_string()));
        }
        if intent.force_download {
            pairs.push((HINT_CONTENT_DISPOSITION.to_owned(), "attachment".to_owned()));
        }

        Self { pairs }
    }

    /// Whether no hint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The hint pairs, in derivation order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
