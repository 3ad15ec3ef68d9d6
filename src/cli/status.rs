//! Report the installation state.
//!
//! `status` never fails on a missing installation; "not installed" is a
//! reportable state, not an error. Parse failures in the persisted files
//! still surface as errors, since they mean the state cannot be read.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::constants::DEFAULT_AGENT;
use crate::installer::{CopilotDirs, VersionMarker};
use crate::mcp::McpConfig;
use crate::registry;
use crate::settings::CopilotSettings;

/// Command to report the installation state.
#[derive(Args)]
pub struct StatusCommand {}

impl StatusCommand {
    /// Execute the status report against a resolved Copilot directory.
    pub async fn execute(self, dirs: &CopilotDirs) -> Result<()> {
        if !dirs.root().is_dir() {
            println!("{}: Copilot CLI directory not found at {}", "not installed".yellow(), dirs.root().display());
            return Ok(());
        }

        let Some(marker) = VersionMarker::load(&dirs.marker_path())? else {
            println!("{}: run 'scopilot install' to set up SuperClaude", "not installed".yellow());
            return Ok(());
        };

        println!("{}: SuperClaude v{}", "installed".green().bold(), marker.version);
        println!("  Installed at: {}", marker.installed_at.to_rfc3339());
        println!("  Location:     {}", dirs.root().display());
        println!("  Selection:    {}", marker.servers.join(", "));

        let mcp = McpConfig::load_or_default(&dirs.mcp_config_path())?;
        let present = mcp.managed_present(registry::registry());
        println!("  Configured:   {}", if present.is_empty() { "(none)".to_string() } else { present.join(", ") });

        let settings = CopilotSettings::load_or_default(&dirs.settings_path())?;
        match settings.default_agent() {
            Some(agent) if agent == DEFAULT_AGENT => {
                println!("  Default agent: {agent}");
            }
            Some(agent) => {
                println!("  Default agent: {agent} {}", "(changed by user)".yellow());
            }
            None => {
                println!("  Default agent: (not set)");
            }
        }

        Ok(())
    }
}
