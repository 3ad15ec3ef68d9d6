//! The version marker (`.superclaude.json`).
//!
//! Presence of the marker is the installed-or-not signal for `update`,
//! `status`, and `uninstall`. Besides version and install time it records
//! the last-used server selection, so `update` can refresh without asking
//! the user to reselect, and the relative paths of every copied asset file,
//! so `uninstall` can remove exactly what install created.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::ScopilotError;

/// Persisted record of an installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionMarker {
    /// Installed scopilot version.
    pub version: String,

    /// When the install/update ran.
    pub installed_at: DateTime<Utc>,

    /// Server names of the last applied selection.
    pub servers: Vec<String>,

    /// Copied asset files, relative to the Copilot directory.
    #[serde(default)]
    pub files: Vec<String>,
}

impl VersionMarker {
    /// A marker for the current crate version, timestamped now.
    #[must_use]
    pub fn new(servers: Vec<String>, files: Vec<String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            installed_at: Utc::now(),
            servers,
            files,
        }
    }

    /// Load the marker if one exists.
    ///
    /// `Ok(None)` means not installed; a present but malformed marker is an
    /// error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        crate::utils::read_json_file(path).map(Some).map_err(|e| {
            ScopilotError::ConfigParseError {
                path: path.display().to_string(),
                reason: e.root_cause().to_string(),
            }
            .into()
        })
    }

    /// Load the marker, failing with [`ScopilotError::NotInstalled`] when
    /// absent.
    pub fn load_required(path: &Path) -> Result<Self> {
        Self::load(path)?.ok_or_else(|| ScopilotError::NotInstalled.into())
    }

    /// Save the marker atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        crate::utils::write_json_file(path, self, true)
    }

    /// Remove the marker file if present.
    pub fn remove(path: &Path) -> Result<()> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}
