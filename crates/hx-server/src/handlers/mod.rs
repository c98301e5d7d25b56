//! HTTP request handlers.

pub(crate) mod pages;

use hx_views::ViewScope;

/// Derive the view scope from a URL path (without leading slash).
///
/// The last path segment is the action, everything before it the
/// controller; a single segment gets the `index` action; the root path maps
/// to `home/index`.
pub(crate) fn scope_for_path(path: &str) -> ViewScope {
    match path.trim_matches('/') {
        "" => ViewScope::new("home", "index"),
        trimmed => match trimmed.rsplit_once('/') {
            Some((controller, action)) => ViewScope::new(controller, action),
            None => ViewScope::new(trimmed, "index"),
        },
    }
}
