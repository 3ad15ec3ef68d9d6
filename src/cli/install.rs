//! Install the SuperClaude framework into the Copilot CLI directory.
//!
//! Installation is a read-modify-write pass over the host's configuration:
//! the bundled assets are copied in, then the MCP server map and the flat
//! settings are reconciled in memory and written back atomically. The
//! version marker is written last, so an aborted run never leaves a marker
//! claiming an install that didn't finish.
//!
//! # Examples
//!
//! ```bash
//! # Default server set (every server that needs no API key)
//! scopilot install
//!
//! # Explicit selection with credentials
//! scopilot install --servers context7,magic --api-key magic=sk-21st
//!
//! # Reinstall over an existing setup
//! scopilot install --force
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::common;
use crate::constants::DEFAULT_AGENT;
use crate::core::ScopilotError;
use crate::installer::{CopilotDirs, DistAssets, VersionMarker};
use crate::mcp::McpConfig;
use crate::registry;
use crate::settings::CopilotSettings;

/// Command to install the framework.
#[derive(Args)]
pub struct InstallCommand {
    /// MCP servers to configure (defaults to every server that needs no API key)
    #[arg(long, value_delimiter = ',', value_name = "NAME")]
    servers: Vec<String>,

    /// API key for a server, as SERVER=SECRET (repeatable)
    #[arg(long = "api-key", value_name = "SERVER=SECRET")]
    api_keys: Vec<String>,

    /// Directory holding the bundled distribution assets
    #[arg(long, env = crate::constants::ASSETS_DIR_ENV, value_name = "PATH")]
    assets_dir: Option<String>,

    /// Reinstall even if a version marker is already present
    #[arg(short, long)]
    force: bool,

    /// Do not set SuperClaude as the default chat agent
    #[arg(long)]
    no_default_agent: bool,
}

impl InstallCommand {
    /// Execute the install against a resolved Copilot directory.
    pub async fn execute(self, dirs: &CopilotDirs) -> Result<()> {
        dirs.ensure_host_exists()?;

        // With --force the marker is not even read, so a corrupt marker
        // never blocks a reinstall.
        if !self.force
            && let Some(marker) = VersionMarker::load(&dirs.marker_path())?
        {
            return Err(ScopilotError::AlreadyInstalled { version: marker.version }.into());
        }

        let assets = DistAssets::resolve(self.assets_dir.as_deref())?;
        assets.validate()?;

        let selection = common::build_selection(
            &self.servers,
            common::default_server_names(),
            &self.api_keys,
        )?;

        let files = assets.install_into(dirs).await?;
        tracing::info!(count = files.len(), "copied framework assets");

        let mcp_path = dirs.mcp_config_path();
        let mut mcp = McpConfig::load_or_default(&mcp_path)?;
        mcp.apply_selection(&selection, registry::registry());
        mcp.save(&mcp_path)?;

        let settings_path = dirs.settings_path();
        let mut settings = CopilotSettings::load_or_default(&settings_path)?;
        if self.no_default_agent {
            settings.apply_first_run_defaults();
        } else {
            settings.merge_default_agent_settings();
        }
        settings.save(&settings_path)?;

        // Marker last: its presence means the steps above completed.
        let marker = VersionMarker::new(selection.names, files);
        marker.save(&dirs.marker_path())?;

        println!(
            "{} SuperClaude v{} into {}",
            "Installed".green().bold(),
            marker.version,
            dirs.root().display()
        );
        println!(
            "  {} asset files, {} MCP servers configured",
            marker.files.len(),
            marker.servers.len()
        );
        if !self.no_default_agent {
            println!("  Default agent set to '{DEFAULT_AGENT}'");
        }

        Ok(())
    }
}
