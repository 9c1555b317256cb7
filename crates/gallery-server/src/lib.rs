//! HTTP server for the gallery showcase.
//!
//! Serves server-rendered HTML: the welcome page, one page per discovered
//! component under `/design/{component}`, and a JSON listing of valid
//! route segments under `/api/components`. Every render re-scans the
//! components directory and re-reads the source; there is no cross-request
//! cache and no shared mutable state beyond the read-only configuration.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use gallery_render::PreviewRegistry;
//! use gallery_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         source_dir: PathBuf::from("demos/components"),
//!         ..ServerConfig::default()
//!     };
//!     run_server(config, PreviewRegistry::with_builtins(), None)
//!         .await
//!         .unwrap();
//! }
//! ```

mod app;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use gallery_render::{Highlight, PageRenderer, PreviewMode, PreviewRegistry};
use gallery_scan::ComponentScanner;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Components source directory.
    pub source_dir: PathBuf,
    /// How the Preview section is produced.
    pub preview_mode: PreviewMode,
    /// Theme passed to the highlighter and the sandbox embed.
    pub theme: String,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            source_dir: PathBuf::from("components"),
            preview_mode: PreviewMode::Sandbox,
            theme: "auto".to_owned(),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `registry` - Preview registry for inline previews
/// * `highlighter` - Optional external highlighting capability
///
/// # Errors
///
/// Returns an error if the server fails to bind or start.
pub async fn run_server(
    config: ServerConfig,
    registry: PreviewRegistry,
    highlighter: Option<Box<dyn Highlight>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let scanner = ComponentScanner::new(config.source_dir.clone());

    let mut renderer = PageRenderer::new(scanner, registry)
        .with_preview_mode(config.preview_mode)
        .with_theme(config.theme.clone());
    if let Some(highlighter) = highlighter {
        renderer = renderer.with_highlighter(highlighter);
    }

    let state = Arc::new(AppState {
        renderer,
        verbose: config.verbose,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

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

/// Create server configuration from gallery config.
///
/// # Arguments
///
/// * `config` - Gallery configuration
/// * `version` - Application version
/// * `verbose` - Enable verbose output
#[must_use]
pub fn server_config_from_gallery_config(
    config: &gallery_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.components_resolved.source_dir.clone(),
        preview_mode: match config.preview.mode {
            gallery_config::PreviewSetting::Inline => PreviewMode::Inline,
            gallery_config::PreviewSetting::Sandbox => PreviewMode::Sandbox,
        },
        theme: config.preview.theme.clone(),
        verbose,
        version,
    }
}
