//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use hx_response::PartialResponse;
use hx_views::ViewEngine;

/// Hook invoked with the in-progress response immediately before rendering.
///
/// This is the per-application extension point: adjust titles, wrappers, or
/// fragments based on state not known when the handler queued them.
pub type ResponseHook = Arc<dyn Fn(&mut PartialResponse) + Send + Sync>;

/// Bootstrap page settings for non-partial requests.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// View rendered for direct navigations (explicit template path).
    pub view: String,
    /// Path handed to the bootstrap page when no request context exists.
    pub default_path: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            view: "home/index.html".to_owned(),
            default_path: "/".to_owned(),
        }
    }
}

/// Application state shared across all handlers.
pub struct AppState {
    /// View engine rendering fragments and the bootstrap page.
    pub engine: Arc<dyn ViewEngine>,
    /// Bootstrap page settings.
    pub bootstrap: BootstrapConfig,
    /// Response hook, if the application registered one.
    pub hook: Option<ResponseHook>,
}
