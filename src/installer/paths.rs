//! Copilot CLI directory layout.
//!
//! All paths the installer touches hang off a single base directory,
//! resolved once per run and threaded explicitly into every command. Nothing
//! else in the crate consults the environment for paths, which keeps the
//! reconciliation core pure and the commands testable against temp
//! directories.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::constants::{AGENTS_DIR, MCP_CONFIG_FILE, PROMPTS_DIR, SETTINGS_FILE, VERSION_MARKER_FILE};
use crate::core::ScopilotError;

/// Resolved locations inside the Copilot CLI configuration directory.
#[derive(Debug, Clone)]
pub struct CopilotDirs {
    root: PathBuf,
}

impl CopilotDirs {
    /// Resolve the Copilot directory.
    ///
    /// An explicit override (from `--copilot-dir` or `SCOPILOT_COPILOT_DIR`)
    /// wins, with `~` expanded; otherwise the default is `~/.copilot`.
    pub fn resolve(override_dir: Option<&str>) -> Result<Self> {
        let root = match override_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).into_owned()),
            None => {
                let home = dirs::home_dir().ok_or_else(|| ScopilotError::Other {
                    message: "Could not determine home directory".to_string(),
                })?;
                home.join(".copilot")
            }
        };

        Ok(Self { root })
    }

    /// Build directly from a known base directory.
    #[must_use]
    pub fn from_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// The base directory itself.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fail with [`ScopilotError::CopilotNotFound`] unless the base
    /// directory exists.
    ///
    /// SuperClaude installs into an existing Copilot CLI setup; it never
    /// creates the base directory itself.
    pub fn ensure_host_exists(&self) -> Result<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(ScopilotError::CopilotNotFound { path: self.root.display().to_string() }.into())
        }
    }

    /// Path of `mcp-config.json`.
    #[must_use]
    pub fn mcp_config_path(&self) -> PathBuf {
        self.root.join(MCP_CONFIG_FILE)
    }

    /// Path of `config.json`.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// Path of the version marker.
    #[must_use]
    pub fn marker_path(&self) -> PathBuf {
        self.root.join(VERSION_MARKER_FILE)
    }

    /// Directory receiving agent descriptors.
    #[must_use]
    pub fn agents_dir(&self) -> PathBuf {
        self.root.join(AGENTS_DIR)
    }

    /// Directory receiving prompt markdown.
    #[must_use]
    pub fn prompts_dir(&self) -> PathBuf {
        self.root.join(PROMPTS_DIR)
    }
}
