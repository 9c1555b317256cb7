//! `gallery serve` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use gallery_config::{CliSettings, Config, PreviewSetting};
use gallery_render::PreviewRegistry;
use gallery_server::{run_server, server_config_from_gallery_config};

use crate::error::CliError;
use crate::output::Output;

/// Preview mode flag.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum PreviewArg {
    /// Server-rendered previews from the registry.
    Inline,
    /// Embedded editable sandbox.
    Sandbox,
}

impl From<PreviewArg> for PreviewSetting {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Inline => Self::Inline,
            PreviewArg::Sandbox => Self::Sandbox,
        }
    }
}

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover gallery.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Components source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Preview mode for component pages (overrides config).
    #[arg(long, value_enum)]
    preview: Option<PreviewArg>,

    /// Enable verbose output (show per-request render logs).
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

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            source_dir: self.source_dir,
            preview: self.preview.map(PreviewSetting::from),
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Components directory: {}",
            config.components_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Preview mode: {}",
            match config.preview.mode {
                PreviewSetting::Inline => "inline",
                PreviewSetting::Sandbox => "sandbox",
            }
        ));

        if !config.components_resolved.source_dir.is_dir() {
            output.warning(&format!(
                "Components directory does not exist: {}",
                config.components_resolved.source_dir.display()
            ));
        }

        // Build server config and run
        let server_config =
            server_config_from_gallery_config(&config, version.to_owned(), self.verbose);
        run_server(server_config, PreviewRegistry::with_builtins(), None)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_preview_arg_mapping() {
        assert_eq!(
            PreviewSetting::from(PreviewArg::Inline),
            PreviewSetting::Inline
        );
        assert_eq!(
            PreviewSetting::from(PreviewArg::Sandbox),
            PreviewSetting::Sandbox
        );
    }
}
