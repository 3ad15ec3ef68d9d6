//! Update an existing SuperClaude installation.
//!
//! `update` refreshes the copied assets and re-runs the same reconciliation
//! as `install`, reusing the server selection recorded in the version marker
//! so the user is not asked to reselect. Credentials already stored in
//! `mcp-config.json` survive the refresh; `--api-key` replaces them.
//!
//! Deselecting a server with `--servers` does not remove its entry from
//! `mcp-config.json`; only addition and refresh are implemented.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::common;
use crate::installer::{CopilotDirs, DistAssets, VersionMarker};
use crate::mcp::McpConfig;
use crate::registry;
use crate::settings::CopilotSettings;

/// Command to update an existing installation.
#[derive(Args)]
pub struct UpdateCommand {
    /// MCP servers to configure (defaults to the previously installed set)
    #[arg(long, value_delimiter = ',', value_name = "NAME")]
    servers: Vec<String>,

    /// API key for a server, as SERVER=SECRET (repeatable)
    #[arg(long = "api-key", value_name = "SERVER=SECRET")]
    api_keys: Vec<String>,

    /// Directory holding the bundled distribution assets
    #[arg(long, env = crate::constants::ASSETS_DIR_ENV, value_name = "PATH")]
    assets_dir: Option<String>,

    /// Do not re-assert SuperClaude as the default chat agent
    #[arg(long)]
    no_default_agent: bool,
}

impl UpdateCommand {
    /// Execute the update against a resolved Copilot directory.
    pub async fn execute(self, dirs: &CopilotDirs) -> Result<()> {
        dirs.ensure_host_exists()?;

        let previous = VersionMarker::load_required(&dirs.marker_path())?;
        tracing::debug!(from = %previous.version, "updating existing installation");

        let assets = DistAssets::resolve(self.assets_dir.as_deref())?;
        assets.validate()?;

        // Stale recorded names (servers dropped from a newer registry) are
        // tolerated; the reconciler skips them.
        let selection =
            common::build_selection(&self.servers, previous.servers.clone(), &self.api_keys)?;

        let files = assets.install_into(dirs).await?;

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

        let marker = VersionMarker::new(selection.names, files);
        marker.save(&dirs.marker_path())?;

        println!(
            "{} SuperClaude {} -> {}",
            "Updated".green().bold(),
            previous.version,
            marker.version
        );
        println!("  {} MCP servers refreshed", marker.servers.len());

        Ok(())
    }
}
