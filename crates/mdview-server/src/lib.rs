//! HTTP viewer boundary for mdview.
//!
//! Serves the documentation viewer with axum: one page route that
//! resolves the active document from the `doc` query parameter,
//! renders its body and heading tree, and embeds both into the page
//! shell, plus a small static route for the embedded stylesheets.
//!
//! The document repository is built once at startup from a filesystem
//! scan and shared read-only across requests. An empty source
//! directory aborts startup; a viewer with nothing to show is a
//! configuration error.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use mdview_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         source_dir: PathBuf::from("docs"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod page;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use mdview_site::DocRepository;
use mdview_storage::{FsStorage, Storage};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Documentation source directory.
    pub source_dir: PathBuf,
    /// Page title and navbar brand.
    pub title: String,
    /// Label of the document-switcher menu.
    pub menu_label: String,
    /// Serve the dark stylesheet set.
    pub dark_mode: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            source_dir: PathBuf::from("docs"),
            title: "Documentation".to_owned(),
            menu_label: "Available documents".to_owned(),
            dark_mode: false,
        }
    }
}

/// Run the server.
///
/// Scans the source directory once, then serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the source directory holds no documents or the
/// server fails to bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storage: Arc<dyn Storage> = Arc::new(FsStorage::new(config.source_dir.clone()));

    // Refuses to start on an empty repository (RepoError::Empty).
    let repo = DocRepository::scan(storage.as_ref())?;
    tracing::info!(
        source_dir = %config.source_dir.display(),
        documents = repo.documents().len(),
        "Document repository ready"
    );

    let state = Arc::new(AppState {
        repo,
        storage,
        title: config.title,
        menu_label: config.menu_label,
        dark_mode: config.dark_mode,
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

/// Create server configuration from an mdview config.
#[must_use]
pub fn server_config_from_config(config: &mdview_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs.source_dir.clone(),
        title: config.viewer.title.clone(),
        menu_label: config.viewer.menu_label.clone(),
        dark_mode: config.viewer.dark_mode,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7878);
        assert_eq!(config.source_dir, PathBuf::from("docs"));
        assert!(!config.dark_mode);
    }

    #[test]
    fn test_server_config_from_config() {
        let mut loaded = mdview_config::Config::default();
        loaded.server.port = 9000;
        loaded.viewer.title = "My Docs".to_owned();
        loaded.viewer.dark_mode = true;

        let config = server_config_from_config(&loaded);

        assert_eq!(config.port, 9000);
        assert_eq!(config.title, "My Docs");
        assert!(config.dark_mode);
    }
}
