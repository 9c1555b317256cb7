//! Configuration management for the gallery showcase.
//!
//! Parses `gallery.toml` with serde and auto-discovers the config file in
//! the current directory and its parents. CLI settings can be applied
//! during load via [`CliSettings`] and take precedence over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "gallery.toml";

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
    /// Override components source directory.
    pub source_dir: Option<PathBuf>,
    /// Override preview mode.
    pub preview: Option<PreviewSetting>,
}

/// Preview mode setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewSetting {
    /// Server-rendered previews from the registry.
    Inline,
    /// Embedded editable sandbox.
    Sandbox,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Component discovery configuration (paths are relative strings from
    /// TOML).
    components: ComponentsConfigRaw,
    /// Preview configuration.
    pub preview: PreviewConfig,

    /// Resolved components configuration (set after loading).
    #[serde(skip)]
    pub components_resolved: ComponentsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Raw components configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ComponentsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved component discovery configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ComponentsConfig {
    /// Directory holding component source files.
    pub source_dir: PathBuf,
}

/// Preview configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// How the Preview section is produced.
    pub mode: PreviewSetting,
    /// Theme passed to the highlighter and the sandbox embed.
    pub theme: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            mode: PreviewSetting::Sandbox,
            theme: "auto".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise
    /// searches for `gallery.toml` in the current directory and parents,
    /// falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing/validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.components_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(preview) = settings.preview {
            self.preview.mode = preview;
        }
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to the current working
    /// directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to a base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            components: ComponentsConfigRaw::default(),
            preview: PreviewConfig::default(),
            components_resolved: ComponentsConfig {
                source_dir: base.join("components"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Resolve raw path strings relative to the config file's directory.
    fn resolve_paths(&mut self, base: &Path) {
        let source_dir = self.components.source_dir.as_deref().unwrap_or("components");
        let source_dir = Path::new(source_dir);
        self.components_resolved.source_dir = if source_dir.is_absolute() {
            source_dir.to_path_buf()
        } else {
            base.join(source_dir)
        };
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation(
                "server.host cannot be empty".to_owned(),
            ));
        }
        if self.preview.theme.is_empty() {
            return Err(ConfigError::Validation(
                "preview.theme cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
