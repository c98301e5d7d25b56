//! Request classification.
//!
//! Decides whether a request came from the htmx client (partial path) or is
//! a direct navigation (bootstrap path). A request is classified exactly
//! once; both outcomes are terminal for the request.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

/// Header the htmx client sets on every request it issues.
pub const HX_REQUEST_HEADER: &str = "hx-request";

/// True iff the request carries `hx-request: true`.
///
/// The header name is matched case-insensitively (HTTP semantics); the value
/// must be exactly the literal `true`. Anything else — missing header,
/// `false`, or no request context at all — classifies as a direct
/// navigation.
#[must_use]
pub fn is_partial_request(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST_HEADER)
        .is_some_and(|value| value.as_bytes() == b"true")
}

/// Extractor form of [`is_partial_request`].
///
/// ```ignore
/// async fn users(HxRequest(is_partial): HxRequest) -> impl IntoResponse { ... }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HxRequest(pub bool);

impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(is_partial_request(&parts.headers)))
    }
}
