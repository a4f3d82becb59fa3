//! Configuration management for mdview.
//!
//! Parses `mdview.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. CLI settings
//! can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 7878
//!
//! [docs]
//! source_dir = "docs"
//!
//! [viewer]
//! title = "Documentation"
//! menu_label = "Available documents"
//! dark_mode = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdview.toml";

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly given config path does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded
/// config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the page title.
    pub title: Option<String>,
    /// Override the dark mode flag.
    pub dark_mode: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerSection,
    /// Documentation source configuration.
    pub docs: DocsSection,
    /// Viewer presentation configuration.
    pub viewer: ViewerSection,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Documentation source configuration section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocsSection {
    /// Source directory for Markdown files. Relative paths are
    /// resolved against the config file's directory.
    pub source_dir: PathBuf,
}

impl Default for DocsSection {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("docs"),
        }
    }
}

/// Viewer presentation configuration section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ViewerSection {
    /// Page title and navbar brand.
    pub title: String,
    /// Label of the document-switcher menu.
    pub menu_label: String,
    /// Serve the dark stylesheet set.
    pub dark_mode: bool,
}

impl Default for ViewerSection {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            menu_label: "Available documents".to_owned(),
            dark_mode: false,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Uses `explicit` when given, otherwise auto-discovers
    /// `mdview.toml` upward from the current directory; falls back to
    /// defaults when no file is found. CLI settings are applied last.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an explicit path is missing or a
    /// found file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => {
                if !p.is_file() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                Some(p.to_path_buf())
            }
            None => discover(),
        };

        let mut config = match &path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.config_path = path;
        config.resolve_source_dir();

        if let Some(cli) = cli {
            config.apply_cli(cli);
        }

        Ok(config)
    }

    /// Parse a config file.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Resolve a relative source dir against the config file location.
    fn resolve_source_dir(&mut self) {
        if self.docs.source_dir.is_relative()
            && let Some(base) = self.config_path.as_ref().and_then(|p| p.parent())
        {
            self.docs.source_dir = base.join(&self.docs.source_dir);
        }
    }

    /// Apply CLI overrides on top of loaded values.
    fn apply_cli(&mut self, cli: &CliSettings) {
        if let Some(host) = &cli.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &cli.source_dir {
            self.docs.source_dir.clone_from(source_dir);
        }
        if let Some(title) = &cli.title {
            self.viewer.title.clone_from(title);
        }
        if let Some(dark_mode) = cli.dark_mode {
            self.viewer.dark_mode = dark_mode;
        }
    }
}

/// Search for `mdview.toml` from the current directory upward.
fn discover() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7878);
        assert_eq!(config.docs.source_dir, Path::new("docs"));
        assert_eq!(config.viewer.title, "Documentation");
        assert_eq!(config.viewer.menu_label, "Available documents");
        assert!(!config.viewer.dark_mode);
    }

    #[test]
    fn test_load_full_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(
            temp.path(),
            r#"
[server]
host = "0.0.0.0"
port = 9000

[docs]
source_dir = "manuals"

[viewer]
title = "Project Docs"
menu_label = "Manuals"
dark_mode = true
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.docs.source_dir, temp.path().join("manuals"));
        assert_eq!(config.viewer.title, "Project Docs");
        assert_eq!(config.viewer.menu_label, "Manuals");
        assert!(config.viewer.dark_mode);
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[server]\nport = 8000\n");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.viewer.title, "Documentation");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = Config::load(Some(Path::new("/missing/mdview.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[server\nport=");

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_relative_source_dir_resolved_against_config_dir() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[docs]\nsource_dir = \"content\"\n");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.docs.source_dir, temp.path().join("content"));
    }

    #[test]
    fn test_absolute_source_dir_untouched() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[docs]\nsource_dir = \"/srv/docs\"\n");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.docs.source_dir, Path::new("/srv/docs"));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[server]\nport = 8000\n");

        let cli = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9999),
            source_dir: Some(PathBuf::from("/override/docs")),
            title: Some("Overridden".to_owned()),
            dark_mode: Some(true),
        };
        let config = Config::load(Some(&path), Some(&cli)).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.docs.source_dir, Path::new("/override/docs"));
        assert_eq!(config.viewer.title, "Overridden");
        assert!(config.viewer.dark_mode);
    }

    #[test]
    fn test_cli_none_fields_do_not_override() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[viewer]\ntitle = \"Kept\"\n");

        let config = Config::load(Some(&path), Some(&CliSettings::default())).unwrap();

        assert_eq!(config.viewer.title, "Kept");
    }
}
