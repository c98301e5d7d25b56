//! minijinja-backed view engine.
//!
//! Loads templates from a directory and resolves fragment identifiers
//! through [`candidates`]. The fragment model is exposed to templates as
//! the `model` variable; HTML auto-escaping follows minijinja's defaults
//! for the template extension.

use std::path::Path;

use minijinja::{Environment, ErrorKind, Value, context, path_loader};

use crate::engine::{ViewEngine, ViewError};
use crate::locate::{ViewScope, candidates};
use crate::script::htmx_script;

/// View engine backed by a minijinja [`Environment`] with a directory loader.
///
/// # Example
///
/// ```ignore
/// use hx_views::{JinjaEngine, ViewEngine, ViewScope};
///
/// let engine = JinjaEngine::new("templates").with_htmx_version("2.0.4");
/// let scope = ViewScope::new("home", "index");
/// let html = engine.render("", &scope, None)?;
/// ```
pub struct JinjaEngine {
    env: Environment<'static>,
    extension: String,
}

impl JinjaEngine {
    /// Create an engine loading templates from `template_dir`.
    ///
    /// Uses the `html` template extension and the unpinned htmx version
    /// until overridden.
    #[must_use]
    pub fn new(template_dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(template_dir.as_ref()));
        register_htmx_script(&mut env, "latest".to_owned());

        Self {
            env,
            extension: "html".to_owned(),
        }
    }

    /// Override the template extension (default: `html`).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Pin the htmx version emitted by the `htmx_script` template global.
    #[must_use]
    pub fn with_htmx_version(mut self, version: impl Into<String>) -> Self {
        register_htmx_script(&mut self.env, version.into());
        self
    }
}

/// Register the `htmx_script` global, capturing the default version.
///
/// Templates may still override per call site: `{{ htmx_script("1.9.10") }}`.
fn register_htmx_script(env: &mut Environment<'_>, default_version: String) {
    env.add_function("htmx_script", move |version: Option<String>| {
        Value::from_safe_string(htmx_script(version.as_deref().unwrap_or(&default_version)))
    });
}

impl ViewEngine for JinjaEngine {
    fn render(
        &self,
        name: &str,
        scope: &ViewScope,
        model: Option<&Value>,
    ) -> Result<String, ViewError> {
        let attempted = candidates(name, scope, &self.extension);

        for path in &attempted {
            let template = match self.env.get_template(path) {
                Ok(template) => template,
                Err(e) if e.kind() == ErrorKind::TemplateNotFound => continue,
                Err(source) => {
                    return Err(ViewError::Render {
                        name: path.clone(),
                        source,
                    });
                }
            };

            let ctx = match model {
                Some(value) => context! { model => value.clone() },
                None => context! {},
            };

            return template.render(ctx).map_err(|source| ViewError::Render {
                name: path.clone(),
                source,
            });
        }

        tracing::debug!(fragment = name, "no template matched any candidate path");
        Err(ViewError::NotFound {
            name: name.to_owned(),
            attempted,
        })
    }
}
