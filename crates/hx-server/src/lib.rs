//! HTTP server integration for the HX partial-rendering layer.
//!
//! This crate wires the response builder and view engine into axum:
//! - [`HxRequest`] / [`is_partial_request`] classify inbound requests
//! - [`dispatch`] serializes a classified request (partial finalize or
//!   full-page bootstrap)
//! - [`run_server`] serves a template directory as a complete htmx
//!   application with a generic page route
//!
//! # Quick Start
//!
//! ```ignore
//! use hx_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         ..Default::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (hx-server)
//!                        │
//!                        ├─► hx-request: true ──► PartialResponse ──► ViewEngine
//!                        │                            (fragments + wrappers)
//!                        │
//!                        └─► direct navigation ──► bootstrap view
//!                                (initial_request = original path + query)
//! ```

mod app;
mod classify;
mod error;
mod handlers;
mod middleware;
mod respond;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use hx_views::JinjaEngine;

pub use classify::{HX_REQUEST_HEADER, HxRequest, is_partial_request};
pub use error::ServerError;
pub use respond::{BootstrapModel, dispatch};
pub use state::{AppState, BootstrapConfig, ResponseHook};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Template directory.
    pub template_dir: PathBuf,
    /// Template file extension.
    pub extension: String,
    /// Bootstrap view (explicit template path).
    pub bootstrap_view: String,
    /// Path the bootstrap page re-issues when no request context exists.
    pub default_path: String,
    /// htmx version emitted by the `htmx_script` template global.
    pub htmx_version: String,
    /// Application version (startup logging).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            template_dir: PathBuf::from("templates"),
            extension: "html".to_owned(),
            bootstrap_view: "home/index.html".to_owned(),
            default_path: "/".to_owned(),
            htmx_version: "latest".to_owned(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    run_server_with_hook(config, None).await
}

/// Run the server with an application response hook.
///
/// The hook runs on every partial response immediately before rendering,
/// letting the embedding application adjust titles, wrappers, or fragments.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server_with_hook(
    config: ServerConfig,
    hook: Option<ResponseHook>,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = JinjaEngine::new(&config.template_dir)
        .with_extension(config.extension.clone())
        .with_htmx_version(config.htmx_version.clone());

    let state = Arc::new(AppState {
        engine: Arc::new(engine),
        bootstrap: BootstrapConfig {
            view: config.bootstrap_view.clone(),
            default_path: config.default_path.clone(),
        },
        hook,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, version = %config.version, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from HX config.
///
/// # Arguments
///
/// * `config` - HX configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &hx_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        template_dir: config.views_resolved.template_dir.clone(),
        extension: config.views_resolved.extension.clone(),
        bootstrap_view: config.bootstrap.view.clone(),
        default_path: config.bootstrap.default_path.clone(),
        htmx_version: config.htmx.version.clone(),
        version,
    }
}
