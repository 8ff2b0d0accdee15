//! Response construction: JSON payloads, empty error responses, CORS, and
//! common headers.
//!
//! Error responses deliberately carry an empty body; failure detail goes to
//! the log sink, never to the caller.

use http::StatusCode;
use http::header::HeaderValue;

use crate::body::ResponseBody;

/// Produce a `200 OK` JSON response for a serializable payload.
///
/// Serialization failure degrades to an empty `500` rather than a partial
/// body.
#[must_use]
pub fn json_response<T: serde::Serialize>(payload: &T) -> http::Response<ResponseBody> {
    match serde_json::to_string(payload) {
        Ok(json) => http::Response::builder()
            .status(StatusCode::OK)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(ResponseBody::from_string(json))
            .expect("static response parts should be valid"),
        Err(_) => empty_response(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Produce a response with the given status and no body.
#[must_use]
pub fn empty_response(status: StatusCode) -> http::Response<ResponseBody> {
    http::Response::builder()
        .status(status)
        .body(ResponseBody::empty())
        .expect("static response parts should be valid")
}

/// Produce a CORS preflight response.
#[must_use]
pub fn cors_preflight_response() -> http::Response<ResponseBody> {
    let mut response = empty_response(StatusCode::OK);
    response.headers_mut().insert(
        "Access-Control-Max-Age",
        HeaderValue::from_static("86400"),
    );
    response
}

/// Produce the health check response.
#[must_use]
pub fn health_response() -> http::Response<ResponseBody> {
    http::Response::builder()
        .status(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(ResponseBody::from_string(
            r#"{"status":"running","service":"presign"}"#,
        ))
        .expect("static health response should be valid")
}

/// Add the headers every response carries: permissive CORS, a request id,
/// and the server identity.
#[must_use]
pub fn add_common_headers(
    mut response: http::Response<ResponseBody>,
    request_id: &str,
) -> http::Response<ResponseBody> {
    let headers = response.headers_mut();

    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("*"),
    );

    if let Ok(hv) = HeaderValue::from_str(request_id) {
        headers.insert("x-request-id", hv);
    }

    headers.insert("Server", HeaderValue::from_static("signlink"));

    response
}
