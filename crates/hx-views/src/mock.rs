//! Mock view engine for testing.
//!
//! Provides [`MockEngine`] for unit testing without template files.

use std::collections::HashMap;

use minijinja::Value;

use crate::engine::{ViewEngine, ViewError};
use crate::locate::{ViewScope, candidates};

/// Mock view engine for testing.
///
/// Stores template bodies in memory, keyed by the same paths the production
/// engine would look up, and substitutes the literal `{model}` placeholder
/// with the model's string form. Use the builder methods to configure the
/// mock with test data.
///
/// # Example
///
/// ```ignore
/// use hx_views::{MockEngine, Value, ViewEngine, ViewScope};
///
/// let engine = MockEngine::new().with_template("users/row.html", "<li>{model}</li>");
/// let scope = ViewScope::new("users", "list");
/// let html = engine.render("row", &scope, Some(&Value::from("alice"))).unwrap();
/// assert_eq!(html, "<li>alice</li>");
/// ```
#[derive(Debug, Default)]
pub struct MockEngine {
    templates: HashMap<String, String>,
    extension: String,
}

impl MockEngine {
    /// Create a new empty mock engine with the `html` extension.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
            extension: "html".to_owned(),
        }
    }

    /// Add a template body under the given path.
    #[must_use]
    pub fn with_template(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.templates.insert(path.into(), body.into());
        self
    }

    /// Override the template extension used for candidate lookup.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

/// String form of a model value: bare strings render without quotes.
fn model_to_string(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), ToOwned::to_owned)
}

impl ViewEngine for MockEngine {
    fn render(
        &self,
        name: &str,
        scope: &ViewScope,
        model: Option<&Value>,
    ) -> Result<String, ViewError> {
        let attempted = candidates(name, scope, &self.extension);

        for path in &attempted {
            if let Some(body) = self.templates.get(path) {
                let rendered = match model {
                    Some(value) => body.replace("{model}", &model_to_string(value)),
                    None => body.clone(),
                };
                return Ok(rendered);
            }
        }

        Err(ViewError::NotFound {
            name: name.to_owned(),
            attempted,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_renders_template_with_model() {
        let engine = MockEngine::new().with_template("users/row.html", "<li>{model}</li>");
        let scope = ViewScope::new("users", "list");

        let html = engine
            .render("row", &scope, Some(&Value::from("alice")))
            .unwrap();

        assert_eq!(html, "<li>alice</li>");
    }

    #[test]
    fn test_renders_template_without_model() {
        let engine = MockEngine::new().with_template("users/list.html", "<ul></ul>");
        let scope = ViewScope::new("users", "list");

        let html = engine.render("", &scope, None).unwrap();

        assert_eq!(html, "<ul></ul>");
    }

    #[test]
    fn test_resolves_through_same_candidates_as_production() {
        let engine = MockEngine::new().with_template("shared/row.html", "<li>{model}</li>");
        let scope = ViewScope::new("users", "list");

        let html = engine
            .render("row", &scope, Some(&Value::from(7)))
            .unwrap();

        assert_eq!(html, "<li>7</li>");
    }

    #[test]
    fn test_missing_template_reports_attempted() {
        let engine = MockEngine::new();
        let scope = ViewScope::new("users", "list");

        let err = engine.render("row", &scope, None).unwrap_err();

        assert!(matches!(err, ViewError::NotFound { .. }));
        assert!(err.to_string().contains("users/row.html"));
    }
}
