//! Generic page endpoint.
//!
//! Routes every path through classification: htmx requests get the scope's
//! default fragment rendered as a partial, direct navigations get the
//! bootstrap page that re-issues the request after load.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Response;
use hx_response::PartialResponse;

use crate::classify::HxRequest;
use crate::error::ServerError;
use crate::handlers::scope_for_path;
use crate::respond::dispatch;
use crate::state::AppState;

/// Handle GET / (root page).
pub(crate) async fn get_root(
    State(state): State<Arc<AppState>>,
    HxRequest(is_partial): HxRequest,
    uri: Uri,
) -> Result<Response, ServerError> {
    page_impl(String::new(), &state, is_partial, &uri)
}

/// Handle GET /{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    HxRequest(is_partial): HxRequest,
    uri: Uri,
) -> Result<Response, ServerError> {
    page_impl(path, &state, is_partial, &uri)
}

/// Shared implementation: queue the scope's default fragment and dispatch.
fn page_impl(
    path: String,
    state: &AppState,
    is_partial: bool,
    uri: &Uri,
) -> Result<Response, ServerError> {
    let scope = scope_for_path(&path);
    let mut response = PartialResponse::new();
    response.add_fragment("");
    dispatch(state, is_partial, Some(uri), &scope, response)
}
