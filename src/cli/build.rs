//! Build distribution assets from source markdown.
//!
//! The build pipeline is offline tooling for packaging: it never touches
//! the Copilot directory. See [`crate::convert`] for the transform itself.
//!
//! ```bash
//! scopilot build --source ./framework --out ./assets
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::convert;
use crate::core::ScopilotError;

/// Command to convert source markdown into distribution assets.
#[derive(Args)]
pub struct BuildCommand {
    /// Directory of source markdown files with YAML frontmatter
    #[arg(long, value_name = "DIR")]
    source: PathBuf,

    /// Output directory for the assets tree (agents/ and prompts/)
    #[arg(long, value_name = "DIR")]
    out: PathBuf,

    /// Overwrite outputs that already exist
    #[arg(short, long)]
    force: bool,
}

impl BuildCommand {
    /// Execute the conversion.
    pub async fn execute(self) -> Result<()> {
        if !self.source.is_dir() {
            return Err(ScopilotError::Other {
                message: format!("source directory not found: {}", self.source.display()),
            }
            .into());
        }

        let report = convert::convert_tree(&self.source, &self.out, self.force)?;

        println!(
            "{} {} agents into {}",
            "Built".green().bold(),
            report.converted,
            self.out.display()
        );
        if report.skipped > 0 {
            println!("  {} existing outputs skipped (use --force to overwrite)", report.skipped);
        }

        Ok(())
    }
}
