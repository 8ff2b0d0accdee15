//! Query-string resolution: raw request parameters to a [`TransferIntent`].
//!
//! Parsing is deliberately best-effort: a hint parameter that fails to parse
//! as its expected type falls back to absent/default instead of rejecting
//! the request. Only two conditions are hard failures - a missing `key` and
//! a present-but-invalid `content-length`.

use percent_encoding::percent_decode_str;
use signlink_model::{TransferIntent, ValidationError};

/// Parse a raw query string into decoded name/value pairs.
///
/// Names and values are percent-decoded; parameters without `=` get an empty
/// value. Order is preserved, so lookups see the first occurrence of a
/// repeated parameter.
#[must_use]
pub fn parse_query_params(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|param| {
            let (name, value) = param.split_once('=').unwrap_or((param, ""));
            (decode_component(name), decode_component(value))
        })
        .collect()
}

/// Resolve a raw query string into a validated [`TransferIntent`].
///
/// # Errors
///
/// Returns [`ValidationError::MissingKey`] when `key` is absent or empty,
/// and [`ValidationError::InvalidContentLength`] when `content-length` is
/// present but is not an integer in (0, 1 GiB].
///
/// # Examples
///
/// ```
/// use signlink_http::resolve_intent;
///
/// let intent = resolve_intent("key=tmp/test&no-wait=15&expire=600").unwrap();
/// assert_eq!(intent.object_key, "tmp/test");
/// assert_eq!(intent.no_wait_secs, Some(10)); // clamped
/// assert_eq!(intent.expiry_secs, 600);
/// ```
pub fn resolve_intent(query: &str) -> Result<TransferIntent, ValidationError> {
    let params = parse_query_params(query);
    let lookup = |name: &str| {
        params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    };

    let object_key = lookup("key").ok_or(ValidationError::MissingKey)?.to_owned();

    let content_length = match lookup("content-length") {
        None => None,
        Some(raw) => match raw.parse::<i64>() {
            Ok(n) if n > 0 && n <= TransferIntent::MAX_CONTENT_LENGTH => Some(n),
            _ => return Err(ValidationError::InvalidContentLength(raw.to_owned())),
        },
    };

    let no_wait_secs =
        parse_positive(lookup("no-wait")).map(|n| n.min(TransferIntent::MAX_NO_WAIT_SECS));

    let expiry_secs = lookup("expire")
        .and_then(|raw| raw.parse::<u64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(TransferIntent::DEFAULT_EXPIRY_SECS);

    Ok(TransferIntent {
        object_key,
        content_length,
        expiry_secs,
        no_wait_secs,
        max_requests: parse_positive(lookup("max-requests")),
        limit_rate: parse_positive(lookup("limit-rate")),
        force_download: lookup("force-download").is_some_and(is_truthy),
    })
}

/// Parse an optional integer parameter, treating malformed or non-positive
/// values as absent.
fn parse_positive(value: Option<&str>) -> Option<i64> {
    value?.parse::<i64>().ok().filter(|n| *n > 0)
}

/// Truthiness for the `force-download` flag.
fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "t" | "y" | "yes"
    )
}

/// Percent-decode a query component.
fn decode_component(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
