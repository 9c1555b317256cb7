//! `gallery list` command implementation.

use std::path::PathBuf;

use clap::Args;
use gallery_config::{CliSettings, Config};
use gallery_scan::ComponentScanner;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Path to configuration file (default: auto-discover gallery.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Components source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl ListArgs {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let scanner = ComponentScanner::new(config.components_resolved.source_dir.clone());
        let descriptors = scanner.scan();

        if descriptors.is_empty() {
            output.warning(&format!(
                "No components found in {}",
                config.components_resolved.source_dir.display()
            ));
            return Ok(());
        }

        output.highlight(&format!(
            "Components in {}",
            config.components_resolved.source_dir.display()
        ));
        for descriptor in &descriptors {
            output.info(&format!(
                "  {}  /design/{}",
                descriptor.display_name, descriptor.route_key
            ));
        }
        output.success(&format!("{} component(s)", descriptors.len()));

        Ok(())
    }
}
