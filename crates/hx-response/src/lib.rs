//! Partial response assembly for the HX rendering layer.
//!
//! A [`PartialResponse`] accumulates an ordered list of fragment-render
//! requests plus an ordered list of wrapper fragments, then renders the
//! whole thing through a [`ViewEngine`] in one shot:
//!
//! 1. Each fragment renders in insertion order; the results are trimmed and
//!    joined with newlines.
//! 2. Each wrapper then renders with the accumulated body as its model,
//!    replacing the body — the last wrapper added produces the outermost
//!    markup.
//!
//! Rendering is all-or-nothing: any resolution or render failure aborts the
//! whole response before a single byte reaches the client.
//!
//! # Example
//!
//! ```ignore
//! use hx_response::PartialResponse;
//!
//! let mut response = PartialResponse::new();
//! response
//!     .set_title("Inbox")
//!     .add_fragments("message", messages)
//!     .wrap_in("layout");
//! let html = response.render(&engine, &scope)?;
//! ```

use hx_views::{Value, ViewEngine, ViewError, ViewScope};
use serde::Serialize;

/// Reserved fragment name for title injection.
///
/// Consuming applications must provide a matching template (conventionally
/// `shared/part/title.html`) that renders the title text passed as `model`.
pub const TITLE_FRAGMENT: &str = "part/title";

/// Reserved fragment name for background injection.
///
/// Consuming applications must provide a matching template (conventionally
/// `shared/part/background.html`).
pub const BACKGROUND_FRAGMENT: &str = "part/background";

/// One unit of render work: a fragment name plus an optional model.
///
/// An empty name resolves to the current scope's default template. The same
/// name may appear multiple times with different models — that is the
/// supported way to render a list of items through one fragment.
#[derive(Clone, Debug)]
pub struct FragmentRequest {
    /// Fragment identifier, resolved by the view engine.
    pub name: String,
    /// Model passed to the template, if any.
    pub model: Option<Value>,
}

/// Ordered accumulator for one request's partial response.
///
/// Owned by a single request's handler; create one per request and drop it
/// with the request. Every mutator returns `&mut Self` for chaining.
#[derive(Clone, Debug, Default)]
pub struct PartialResponse {
    fragments: Vec<FragmentRequest>,
    wrappers: Vec<String>,
}

impl PartialResponse {
    /// Create an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment with no model.
    pub fn add_fragment(&mut self, name: impl Into<String>) -> &mut Self {
        self.fragments.push(FragmentRequest {
            name: name.into(),
            model: None,
        });
        self
    }

    /// Append a fragment rendering `model`.
    pub fn add_fragment_with<T: Serialize>(&mut self, name: impl Into<String>, model: T) -> &mut Self {
        self.fragments.push(FragmentRequest {
            name: name.into(),
            model: Some(Value::from_serialize(&model)),
        });
        self
    }

    /// Append one fragment per model, preserving order.
    ///
    /// An empty iterator appends a single model-less fragment, same as
    /// [`add_fragment`](Self::add_fragment).
    pub fn add_fragments<T, I>(&mut self, name: impl Into<String>, models: I) -> &mut Self
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
    {
        let name = name.into();
        let mut appended = false;
        for model in models {
            self.fragments.push(FragmentRequest {
                name: name.clone(),
                model: Some(Value::from_serialize(&model)),
            });
            appended = true;
        }
        if !appended {
            self.fragments.push(FragmentRequest { name, model: None });
        }
        self
    }

    /// Insert a title fragment at the front of the sequence.
    ///
    /// Repeated calls do not replace earlier titles: each call inserts at
    /// position 0, so titles stack in reverse call order with the most
    /// recent call rendered first.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.fragments.insert(
            0,
            FragmentRequest {
                name: TITLE_FRAGMENT.to_owned(),
                model: Some(Value::from(title.into())),
            },
        );
        self
    }

    /// Insert a background fragment at the front of the sequence.
    ///
    /// Stacks on repeated calls exactly like [`set_title`](Self::set_title).
    pub fn set_background(&mut self, background: impl Into<String>) -> &mut Self {
        self.fragments.insert(
            0,
            FragmentRequest {
                name: BACKGROUND_FRAGMENT.to_owned(),
                model: Some(Value::from(background.into())),
            },
        );
        self
    }

    /// Append a wrapper fragment.
    ///
    /// Wrappers fold around the rendered body in insertion order: the first
    /// wrapper added is applied first (innermost), the last added ends up
    /// outermost.
    pub fn wrap_in(&mut self, name: impl Into<String>) -> &mut Self {
        self.wrappers.push(name.into());
        self
    }

    /// Empty both the fragment sequence and the wrapper list.
    pub fn clear(&mut self) -> &mut Self {
        self.fragments.clear();
        self.wrappers.clear();
        self
    }

    /// Queued fragments, in render order.
    #[must_use]
    pub fn fragments(&self) -> &[FragmentRequest] {
        &self.fragments
    }

    /// Queued wrappers, in application order.
    #[must_use]
    pub fn wrappers(&self) -> &[String] {
        &self.wrappers
    }

    /// True when nothing has been queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.wrappers.is_empty()
    }

    /// Render the accumulated response to a single string.
    ///
    /// Fragments render sequentially in insertion order; each result is
    /// trimmed and the results are joined with `"\n"`. Wrappers then fold
    /// around the body in insertion order, each receiving the current body
    /// as its model. The body is passed to wrappers as a safe string, so a
    /// layout can embed it with `{{ model }}` without double-escaping.
    ///
    /// # Errors
    ///
    /// Returns the first [`ViewError`] encountered; nothing is emitted on
    /// failure.
    pub fn render(&self, engine: &dyn ViewEngine, scope: &ViewScope) -> Result<String, ViewError> {
        let mut parts = Vec::with_capacity(self.fragments.len());
        for fragment in &self.fragments {
            let html = engine.render(&fragment.name, scope, fragment.model.as_ref())?;
            parts.push(html.trim().to_owned());
        }

        let mut body = parts.join("\n");
        for wrapper in &self.wrappers {
            let model = Value::from_safe_string(body);
            body = engine.render(wrapper, scope, Some(&model))?;
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use hx_views::MockEngine;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn scope() -> ViewScope {
        ViewScope::new("users", "list")
    }

    // ========================================================================
    // Builder ordering
    // ========================================================================

    #[test]
    fn test_render_order_matches_call_order() {
        let mut response = PartialResponse::new();
        response.add_fragment("one").add_fragment("two").add_fragment("three");

        let names: Vec<_> = response.fragments().iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_set_title_lands_at_front() {
        let mut response = PartialResponse::new();
        response.add_fragment("body").set_title("Inbox");

        assert_eq!(response.fragments()[0].name, TITLE_FRAGMENT);
        assert_eq!(response.fragments()[1].name, "body");
    }

    #[test]
    fn test_repeated_set_title_stacks_in_reverse_call_order() {
        let mut response = PartialResponse::new();
        response.set_title("first").set_title("second");

        let models: Vec<_> = response
            .fragments()
            .iter()
            .map(|f| f.model.as_ref().unwrap().as_str().unwrap().to_owned())
            .collect();

        // Last call renders first; nothing deduplicates.
        assert_eq!(models, vec!["second", "first"]);
    }

    #[test]
    fn test_set_background_lands_at_front() {
        let mut response = PartialResponse::new();
        response.add_fragment("body").set_background("dark");

        assert_eq!(response.fragments()[0].name, BACKGROUND_FRAGMENT);
    }

    #[test]
    fn test_add_fragments_empty_equals_bare_add_fragment() {
        let mut with_empty = PartialResponse::new();
        with_empty.add_fragments("row", Vec::<String>::new());

        assert_eq!(with_empty.fragments().len(), 1);
        assert_eq!(with_empty.fragments()[0].name, "row");
        assert!(with_empty.fragments()[0].model.is_none());
    }

    #[test]
    fn test_add_fragments_one_per_model_in_order() {
        let mut response = PartialResponse::new();
        response.add_fragments("row", ["a", "b", "c"]);

        let fragments = response.fragments();
        assert_eq!(fragments.len(), 3);
        for (fragment, expected) in fragments.iter().zip(["a", "b", "c"]) {
            assert_eq!(fragment.name, "row");
            assert_eq!(fragment.model.as_ref().unwrap().as_str(), Some(expected));
        }
    }

    #[test]
    fn test_duplicate_fragments_allowed() {
        let mut response = PartialResponse::new();
        response
            .add_fragment_with("row", json!({"id": 1}))
            .add_fragment_with("row", json!({"id": 2}));

        assert_eq!(response.fragments().len(), 2);
    }

    #[test]
    fn test_clear_empties_both_sequences() {
        let mut response = PartialResponse::new();
        response.add_fragment("body").wrap_in("layout").clear();

        assert!(response.is_empty());
    }

    #[test]
    fn test_chaining_returns_same_handle() {
        let mut response = PartialResponse::new();
        response
            .set_title("Inbox")
            .add_fragment("body")
            .add_fragments("row", ["a"])
            .wrap_in("layout")
            .clear()
            .add_fragment("other");

        assert_eq!(response.fragments().len(), 1);
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    #[test]
    fn test_render_trims_and_joins_with_newline() {
        let engine = MockEngine::new()
            .with_template("users/one.html", "  <p>one</p>\n")
            .with_template("users/two.html", "\n\t<p>two</p>  ");
        let mut response = PartialResponse::new();
        response.add_fragment("one").add_fragment("two");

        let html = response.render(&engine, &scope()).unwrap();

        assert_eq!(html, "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn test_render_empty_response_is_empty_string() {
        let engine = MockEngine::new();

        let html = PartialResponse::new().render(&engine, &scope()).unwrap();

        assert_eq!(html, "");
    }

    #[test]
    fn test_render_after_clear_is_empty_string() {
        let engine = MockEngine::new();
        let mut response = PartialResponse::new();
        response.add_fragment("body").wrap_in("layout").clear();

        let html = response.render(&engine, &scope()).unwrap();

        assert_eq!(html, "");
    }

    #[test]
    fn test_wrappers_fold_last_added_outermost() {
        let engine = MockEngine::new()
            .with_template("users/body.html", "body")
            .with_template("shared/inner.html", "<a>{model}</a>")
            .with_template("shared/outer.html", "<b>{model}</b>");
        let mut response = PartialResponse::new();
        response.add_fragment("body").wrap_in("inner").wrap_in("outer");

        let html = response.render(&engine, &scope()).unwrap();

        assert_eq!(html, "<b><a>body</a></b>");
    }

    #[test]
    fn test_end_to_end_list_in_layout() {
        let engine = MockEngine::new()
            .with_template("users/list.html", "<ul></ul>")
            .with_template("shared/layout.html", "<div>{model}</div>");
        let mut response = PartialResponse::new();
        response.add_fragment("list").wrap_in("layout");

        let html = response.render(&engine, &scope()).unwrap();

        assert_eq!(html, "<div><ul></ul></div>");
    }

    #[test]
    fn test_render_models_through_one_fragment() {
        let engine = MockEngine::new().with_template("users/row.html", "<li>{model}</li>");
        let mut response = PartialResponse::new();
        response.add_fragments("row", ["a", "b"]);

        let html = response.render(&engine, &scope()).unwrap();

        assert_eq!(html, "<li>a</li>\n<li>b</li>");
    }

    #[test]
    fn test_missing_fragment_aborts_whole_render() {
        let engine = MockEngine::new().with_template("users/one.html", "<p>one</p>");
        let mut response = PartialResponse::new();
        response.add_fragment("one").add_fragment("missing");

        let err = response.render(&engine, &scope()).unwrap_err();

        assert!(matches!(err, ViewError::NotFound { .. }));
        assert!(err.to_string().contains("users/missing.html"));
    }

    #[test]
    fn test_missing_wrapper_aborts_whole_render() {
        let engine = MockEngine::new().with_template("users/body.html", "body");
        let mut response = PartialResponse::new();
        response.add_fragment("body").wrap_in("layout");

        let err = response.render(&engine, &scope()).unwrap_err();

        assert!(matches!(err, ViewError::NotFound { .. }));
        assert!(err.to_string().contains("layout"));
    }

    #[test]
    fn test_empty_name_renders_scope_default() {
        let engine = MockEngine::new().with_template("users/list.html", "<ul></ul>");
        let mut response = PartialResponse::new();
        response.add_fragment("");

        let html = response.render(&engine, &scope()).unwrap();

        assert_eq!(html, "<ul></ul>");
    }
}
