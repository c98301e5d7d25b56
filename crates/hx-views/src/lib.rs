//! View engine abstraction for the HX partial-rendering layer.
//!
//! This crate provides a [`ViewEngine`] trait for abstracting fragment
//! rendering from the underlying template engine. This enables:
//!
//! - **Unit testing** without template files on disk
//! - **Engine flexibility** (minijinja today, anything renderable tomorrow)
//! - **Clean separation** between response assembly and template lookup
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ViewEngine`] trait with a single `render()` method
//! - [`JinjaEngine`] implementation backed by a minijinja environment with a
//!   directory loader
//! - [`MockEngine`] for testing (behind the `mock` feature flag)
//! - [`ViewScope`] carrying the routing metadata that drives convention-based
//!   fragment lookup, and [`candidates`] which synthesizes the lookup paths
//!
//! # Fragment resolution
//!
//! A fragment identifier is either an explicit template path (recognized by
//! the template extension suffix, loaded directly) or a bare logical name
//! resolved against the current scope's conventions:
//!
//! 1. `{controller}/{name}.{ext}`
//! 2. `shared/{name}.{ext}`
//! 3. `areas/{area}/views/{controller}/{action}.{ext}` (only when the scope
//!    names an area)
//!
//! An empty identifier resolves to the scope's default template,
//! `{controller}/{action}.{ext}`.
//!
//! # Example
//!
//! ```ignore
//! use hx_views::{JinjaEngine, ViewEngine, ViewScope};
//!
//! let engine = JinjaEngine::new("templates");
//! let scope = ViewScope::new("users", "list");
//! let html = engine.render("row", &scope, None)?;
//! ```

mod engine;
mod jinja;
mod locate;
#[cfg(feature = "mock")]
mod mock;
mod script;

pub use engine::{ViewEngine, ViewError};
pub use jinja::JinjaEngine;
pub use locate::{ViewScope, candidates};
#[cfg(feature = "mock")]
pub use mock::MockEngine;
pub use script::htmx_script;

/// The dynamic value type fragments carry as their model.
///
/// Re-exported so downstream crates don't need a direct minijinja
/// dependency.
pub use minijinja::Value;
