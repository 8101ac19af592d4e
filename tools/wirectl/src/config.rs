//! `config` command: inspect and scaffold configuration files

use crate::report::Report;
use anyhow::{Context, Result};
use clap::Subcommand;
use common::WireConfig;
use std::path::PathBuf;
use tracing::info;
use wire_codec::WireError;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    #[command(about = "Print the merged configuration (defaults, files, environment)")]
    Show {
        /// Output format: yaml or json
        #[arg(long, default_value = "yaml")]
        format: String,
    },

    /// Write a configuration file with default values
    #[command(about = "Write the default configuration to a .yaml or .json file")]
    Init {
        /// Destination file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn handle_command(cmd: &ConfigCommands, config: &WireConfig) -> Result<Report> {
    match cmd {
        ConfigCommands::Show { format } => Ok(Report::new(
            config.render(format)?,
            serde_json::to_value(config).context("Failed to serialize configuration")?,
        )),
        ConfigCommands::Init { path, force } => {
            if path.exists() && !force {
                return Err(WireError::invalid_parameter(
                    "path",
                    format!("{} already exists (use --force to overwrite)", path.display()),
                )
                .into());
            }

            WireConfig::default()
                .save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Default configuration written to {}", path.display());

            Ok(Report::new(
                format!("Wrote {}", path.display()),
                serde_json::json!({ "path": path.display().to_string() }),
            ))
        },
    }
}
