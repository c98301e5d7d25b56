//! View engine trait and error types.

use minijinja::Value;

use crate::locate::ViewScope;

/// Error returned when fragment rendering fails.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// No template matched any of the synthesized lookup paths.
    #[error("no view found for '{name}' (attempted: {})", .attempted.join(", "))]
    NotFound {
        /// The fragment identifier as requested.
        name: String,
        /// Every template path that was tried, in lookup order.
        attempted: Vec<String>,
    },
    /// The template was found but failed to render.
    #[error("view '{name}' failed to render: {source}")]
    Render {
        /// The resolved template path.
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Renders named view fragments to strings.
///
/// The engine is a black box to the response layer: given a fragment
/// identifier, the current [`ViewScope`], and an optional model value, it
/// returns the rendered markup or a [`ViewError`]. Implementations resolve
/// identifiers through [`candidates`](crate::candidates) so that explicit
/// paths, convention lookup, and the area fallback behave identically across
/// backends.
pub trait ViewEngine: Send + Sync {
    /// Render the fragment identified by `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NotFound`] when no candidate template exists,
    /// or [`ViewError::Render`] when the template itself fails.
    fn render(
        &self,
        name: &str,
        scope: &ViewScope,
        model: Option<&Value>,
    ) -> Result<String, ViewError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_attempted_paths() {
        let err = ViewError::NotFound {
            name: "row".to_owned(),
            attempted: vec!["users/row.html".to_owned(), "shared/row.html".to_owned()],
        };

        let msg = err.to_string();
        assert!(msg.contains("'row'"));
        assert!(msg.contains("users/row.html"));
        assert!(msg.contains("shared/row.html"));
    }
}
