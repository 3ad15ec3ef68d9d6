//! Uninstall the SuperClaude framework.
//!
//! Removes the asset files recorded in the version marker, unsets the
//! default agent when it is still ours, and deletes the marker. MCP server
//! entries in `mcp-config.json` are deliberately preserved: they may carry
//! user-entered API keys, and removing them would break a later reinstall's
//! secret preservation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::constants::DEFAULT_AGENT;
use crate::installer::{CopilotDirs, DistAssets, VersionMarker};
use crate::settings::CopilotSettings;

/// Command to uninstall the framework.
#[derive(Args)]
pub struct UninstallCommand {}

impl UninstallCommand {
    /// Execute the uninstall against a resolved Copilot directory.
    pub async fn execute(self, dirs: &CopilotDirs) -> Result<()> {
        let marker = VersionMarker::load_required(&dirs.marker_path())?;

        let removed = DistAssets::remove_installed(dirs, &marker.files)?;

        let settings_path = dirs.settings_path();
        let mut settings = CopilotSettings::load_or_default(&settings_path)?;
        if settings.unset_default_agent(DEFAULT_AGENT) {
            settings.save(&settings_path)?;
            println!("  Default agent '{DEFAULT_AGENT}' unset");
        } else if let Some(current) = settings.default_agent() {
            // The user switched agents since install; leave their choice alone.
            tracing::debug!(agent = %current, "default agent not ours, leaving in place");
        }

        VersionMarker::remove(&dirs.marker_path())?;

        println!(
            "{} SuperClaude v{} ({} asset files removed)",
            "Uninstalled".green().bold(),
            marker.version,
            removed.len()
        );
        println!("  MCP server configurations were preserved in mcp-config.json");

        Ok(())
    }
}
