//! Request correlation id extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the correlation id, set by the request-id layer.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The correlation id assigned to the current request.
///
/// Infallible: a request that somehow bypassed the request-id layer
/// yields `"unknown"` rather than an error.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(request_id_from_headers(&parts.headers)))
    }
}

/// Reads the correlation id from a header map.
pub fn request_id_from_headers(headers: &axum::http::HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}
