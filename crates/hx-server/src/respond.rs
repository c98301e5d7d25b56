//! Response dispatch.
//!
//! The response-serialization path: a classified request either finalizes
//! its accumulated [`PartialResponse`] or receives the full-page bootstrap
//! view carrying the originally requested path.

use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};
use hx_response::PartialResponse;
use hx_views::{Value, ViewScope};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Model handed to the bootstrap view.
///
/// The bootstrap page re-issues `initial_request` as a partial request once
/// the full page (and the htmx client) has loaded.
#[derive(Debug, Serialize)]
pub struct BootstrapModel {
    /// Originally requested path + query string.
    pub initial_request: String,
}

/// Serialize the response for a classified request.
///
/// On the partial path: invoke the application's response hook, render the
/// accumulated fragments and wrappers, and emit the result as a single
/// `text/html` body. On the bootstrap path: render the configured bootstrap
/// view with the original path + query as its model (falling back to the
/// configured default path when there is no request context).
///
/// Everything is buffered; a failure anywhere produces an error response
/// without any partial output.
///
/// # Errors
///
/// Returns [`ServerError`] when fragment or bootstrap rendering fails.
pub fn dispatch(
    state: &AppState,
    is_partial: bool,
    uri: Option<&Uri>,
    scope: &ViewScope,
    mut response: PartialResponse,
) -> Result<Response, ServerError> {
    if is_partial {
        if let Some(hook) = &state.hook {
            hook(&mut response);
        }
        let html = response.render(state.engine.as_ref(), scope)?;
        return Ok(Html(html).into_response());
    }

    // Direct navigation: serve the page proper, which re-issues the request
    // as a partial once loaded.
    let initial_request = uri.map_or_else(
        || state.bootstrap.default_path.clone(),
        |uri| {
            uri.path_and_query()
                .map_or_else(|| uri.path().to_owned(), ToString::to_string)
        },
    );
    tracing::debug!(initial_request = %initial_request, "serving bootstrap page");

    let model = Value::from_serialize(&BootstrapModel { initial_request });
    let html = state
        .engine
        .render(&state.bootstrap.view, scope, Some(&model))?;
    Ok(Html(html).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hx_views::{MockEngine, ViewError};

    use crate::state::BootstrapConfig;

    use super::*;

    fn state_with(engine: MockEngine) -> AppState {
        AppState {
            engine: Arc::new(engine),
            bootstrap: BootstrapConfig::default(),
            hook: None,
        }
    }

    fn scope() -> ViewScope {
        ViewScope::new("users", "list")
    }

    #[tokio::test]
    async fn test_partial_path_renders_fragments() {
        let state = state_with(MockEngine::new().with_template("users/list.html", "<ul></ul>"));
        let mut response = PartialResponse::new();
        response.add_fragment("");

        let result = dispatch(&state, true, None, &scope(), response).unwrap();

        assert_eq!(result.status(), axum::http::StatusCode::OK);
        let body = axum::body::to_bytes(result.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"<ul></ul>");
    }

    #[tokio::test]
    async fn test_bootstrap_path_carries_original_uri() {
        let state = state_with(
            MockEngine::new().with_template("home/index.html", "<body data-init=\"{model}\">"),
        );
        let uri: Uri = "/users/list?page=2".parse().unwrap();

        let result = dispatch(&state, false, Some(&uri), &scope(), PartialResponse::new()).unwrap();

        let body = axum::body::to_bytes(result.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("/users/list?page=2"));
    }

    #[tokio::test]
    async fn test_bootstrap_without_request_context_uses_default_path() {
        let state = state_with(
            MockEngine::new().with_template("home/index.html", "<body data-init=\"{model}\">"),
        );

        let result = dispatch(&state, false, None, &scope(), PartialResponse::new()).unwrap();

        let body = axum::body::to_bytes(result.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        // BootstrapModel renders as a map; the default path must be in there.
        assert!(body.contains("initial_request"));
        assert!(body.contains("\"/\""));
    }

    #[test]
    fn test_hook_runs_before_rendering() {
        let engine = MockEngine::new()
            .with_template("users/list.html", "<ul></ul>")
            .with_template("shared/part/title.html", "<h1>{model}</h1>");
        let mut state = state_with(engine);
        state.hook = Some(Arc::new(|response: &mut PartialResponse| {
            response.set_title("Users");
        }));
        let mut response = PartialResponse::new();
        response.add_fragment("");

        let result = dispatch(&state, true, None, &scope(), response);

        assert!(result.is_ok());
    }

    #[test]
    fn test_hook_not_invoked_on_bootstrap_path() {
        // The hook belongs to the partial finalize path only; the bootstrap
        // view renders untouched.
        let state = AppState {
            engine: Arc::new(
                MockEngine::new().with_template("home/index.html", "<body>{model}</body>"),
            ),
            bootstrap: BootstrapConfig::default(),
            hook: Some(Arc::new(|response: &mut PartialResponse| {
                response.add_fragment("never-resolved");
            })),
        };

        let result = dispatch(&state, false, None, &scope(), PartialResponse::new());

        assert!(result.is_ok());
    }

    #[test]
    fn test_render_failure_propagates() {
        let state = state_with(MockEngine::new());
        let mut response = PartialResponse::new();
        response.add_fragment("missing");

        let err = dispatch(&state, true, None, &scope(), response).unwrap_err();

        assert!(matches!(err, ServerError::View(ViewError::NotFound { .. })));
    }
}
