//! Fragment lookup path synthesis.
//!
//! Turns a fragment identifier plus routing metadata into an ordered list of
//! template paths to try. The scope's area, when present, contributes a
//! fallback path so nested area templates are reachable without callers
//! spelling out the full path.

/// Routing metadata for convention-based fragment lookup.
///
/// The area name comes from structured routing data supplied by the host
/// application, never parsed out of endpoint display strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewScope {
    /// Handler group the request is routed to (e.g. "users").
    pub controller: String,
    /// Action within the handler group (e.g. "list").
    pub action: String,
    /// Named sub-area, for multi-tenant/pluggable module layouts.
    pub area: Option<String>,
}

impl ViewScope {
    /// Create a scope without an area.
    #[must_use]
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
            area: None,
        }
    }

    /// Attach an area name.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// The scope's default template path: `{controller}/{action}.{ext}`.
    #[must_use]
    pub fn default_template(&self, ext: &str) -> String {
        format!("{}/{}.{ext}", self.controller, self.action)
    }
}

/// Synthesize the ordered list of template paths to try for `name`.
///
/// - An identifier already carrying the template extension is an explicit
///   path and is looked up directly, bypassing conventions.
/// - An empty identifier means the scope's default template.
/// - Anything else is searched under the controller's directory, then under
///   `shared/`.
/// - When the scope names an area, the synthesized area path
///   `areas/{area}/views/{controller}/{action}.{ext}` is appended as the
///   final fallback.
#[must_use]
pub fn candidates(name: &str, scope: &ViewScope, ext: &str) -> Vec<String> {
    let suffix = format!(".{ext}");
    if name.ends_with(&suffix) {
        return vec![name.to_owned()];
    }

    let mut paths = Vec::with_capacity(3);
    if name.is_empty() {
        paths.push(scope.default_template(ext));
    } else {
        paths.push(format!("{}/{name}{suffix}", scope.controller));
        paths.push(format!("shared/{name}{suffix}"));
    }

    if let Some(ref area) = scope.area {
        paths.push(format!(
            "areas/{area}/views/{}/{}{suffix}",
            scope.controller, scope.action
        ));
    }

    paths
}
