//! Command-line interface for scopilot.
//!
//! Each command lives in its own module with its own argument structure and
//! execution logic. The Copilot directory is resolved once here and passed
//! into every command, so commands never consult ambient global state and
//! tests can point the whole CLI at a temp directory.
//!
//! # Available Commands
//!
//! - `install` - Provision the SuperClaude framework into Copilot CLI
//! - `update` - Refresh an existing installation, reusing the recorded selection
//! - `uninstall` - Remove installed assets and the version marker
//! - `status` - Report the installation state (never fatal)
//! - `build` - Convert source markdown into distribution assets
//!
//! # Basic Workflow
//!
//! ```bash
//! scopilot install --servers context7,magic --api-key magic=sk-21st
//! scopilot status
//! scopilot update
//! scopilot uninstall
//! ```

mod build;
pub mod common;
mod install;
mod status;
mod uninstall;
mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::installer::CopilotDirs;

/// Main CLI application structure for scopilot.
///
/// Handles global flags and delegates to subcommands. All global options
/// are available to every subcommand.
#[derive(Parser)]
#[command(
    name = "scopilot",
    about = "Install the SuperClaude agent framework into GitHub Copilot CLI",
    version,
    long_about = "scopilot provisions the SuperClaude agent framework (prompts, agent \
                  descriptors, and MCP server configurations) into a GitHub Copilot CLI setup, \
                  preserving the user's own configuration entries and API keys."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Copilot CLI configuration directory (defaults to ~/.copilot)
    #[arg(long, global = true, env = crate::constants::COPILOT_DIR_ENV, value_name = "PATH")]
    copilot_dir: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Install the SuperClaude framework
    Install(install::InstallCommand),

    /// Update an existing installation
    Update(update::UpdateCommand),

    /// Remove the installed framework
    Uninstall(uninstall::UninstallCommand),

    /// Report the installation state
    Status(status::StatusCommand),

    /// Convert source markdown into distribution assets
    Build(build::BuildCommand),
}

impl Cli {
    /// The tracing filter directive implied by the verbosity flags.
    ///
    /// Used by `main` when `RUST_LOG` is not set.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        let dirs = CopilotDirs::resolve(self.copilot_dir.as_deref())?;

        match self.command {
            Commands::Install(cmd) => cmd.execute(&dirs).await,
            Commands::Update(cmd) => cmd.execute(&dirs).await,
            Commands::Uninstall(cmd) => cmd.execute(&dirs).await,
            Commands::Status(cmd) => cmd.execute(&dirs).await,
            Commands::Build(cmd) => cmd.execute().await,
        }
    }
}
