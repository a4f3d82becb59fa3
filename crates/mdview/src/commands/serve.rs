//! `mdview serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdview_config::{CliSettings, Config};
use mdview_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover mdview.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Page title shown in the navbar (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Enable dark mode (overrides config).
    #[arg(long)]
    dark_mode: bool,

    /// Disable dark mode.
    #[arg(long, conflicts_with = "dark_mode")]
    no_dark_mode: bool,

    /// Enable verbose output (request and scan logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        // Resolve flags before moving into CliSettings
        let dark_mode = self.resolve_dark_mode();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            source_dir: self.source_dir,
            title: self.title,
            dark_mode,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!("mdview {version}"));
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Source directory: {}",
            config.docs.source_dir.display()
        ));
        if config.viewer.dark_mode {
            output.info("Dark mode: enabled");
        }

        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }

    /// Resolve dark mode from --dark-mode/--no-dark-mode flags.
    ///
    /// Neither flag means the config file decides.
    fn resolve_dark_mode(&self) -> Option<bool> {
        self.no_dark_mode.then_some(false).or(self.dark_mode.then_some(true))
    }
}
