//! Distribution asset location and deployment.
//!
//! The scopilot package ships an `assets/` tree next to the binary holding
//! the built framework files: `agents/*.json` descriptors and `prompts/*.md`
//! prompt bodies (produced offline by `scopilot build`). Install and update
//! copy that tree into the Copilot directory and report the relative paths
//! of every copied file so the marker can record them.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::{AGENTS_DIR, PROMPTS_DIR};
use crate::core::ScopilotError;
use crate::installer::CopilotDirs;

/// The bundled distribution assets directory.
#[derive(Debug, Clone)]
pub struct DistAssets {
    root: PathBuf,
}

impl DistAssets {
    /// Resolve the assets directory.
    ///
    /// An explicit override (from `--assets-dir` or `SCOPILOT_ASSETS_DIR`)
    /// wins, with `~` expanded; otherwise the `assets/` directory next to
    /// the running executable is used.
    pub fn resolve(override_dir: Option<&str>) -> Result<Self> {
        let root = match override_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).into_owned()),
            None => {
                let exe = std::env::current_exe()
                    .context("Could not determine the scopilot executable path")?;
                let exe_dir = exe.parent().ok_or_else(|| ScopilotError::Other {
                    message: "scopilot executable has no parent directory".to_string(),
                })?;
                exe_dir.join("assets")
            }
        };

        Ok(Self { root })
    }

    /// The assets directory itself.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fail with [`ScopilotError::AssetsMissing`] unless the expected tree
    /// is present.
    pub fn validate(&self) -> Result<()> {
        let complete = self.root.is_dir()
            && self.root.join(AGENTS_DIR).is_dir()
            && self.root.join(PROMPTS_DIR).is_dir();

        if complete {
            Ok(())
        } else {
            Err(ScopilotError::AssetsMissing { path: self.root.display().to_string() }.into())
        }
    }

    /// Copy the asset tree into the Copilot directory.
    ///
    /// Existing files are overwritten (install refreshes the framework
    /// files; user customizations belong in the config files, which are
    /// merged, not copied). Returns the copied files' paths relative to the
    /// Copilot directory, sorted for stable marker contents.
    pub async fn install_into(&self, dirs: &CopilotDirs) -> Result<Vec<String>> {
        let mut installed = Vec::new();

        for subdir in [AGENTS_DIR, PROMPTS_DIR] {
            let source_dir = self.root.join(subdir);
            let target_dir = dirs.root().join(subdir);
            crate::utils::ensure_dir(&target_dir)?;

            for entry in WalkDir::new(&source_dir).min_depth(1).max_depth(1) {
                let entry = entry
                    .with_context(|| format!("Failed to read assets in {}", source_dir.display()))?;
                if !entry.file_type().is_file() {
                    continue;
                }

                let file_name = entry.file_name().to_string_lossy().into_owned();
                let target = target_dir.join(&file_name);
                tokio::fs::copy(entry.path(), &target).await.with_context(|| {
                    format!("Failed to copy {} to {}", entry.path().display(), target.display())
                })?;

                tracing::debug!(file = %target.display(), "installed asset");
                installed.push(format!("{subdir}/{file_name}"));
            }
        }

        installed.sort();
        Ok(installed)
    }

    /// Remove previously installed asset files from the Copilot directory.
    ///
    /// Takes the relative paths recorded in the marker; files the user
    /// already removed are skipped silently. Only files under the agents
    /// and prompts directories are eligible, so a hand-edited marker cannot
    /// point the removal anywhere else.
    pub fn remove_installed(dirs: &CopilotDirs, files: &[String]) -> Result<Vec<String>> {
        let mut removed = Vec::new();

        for relative in files {
            let allowed = Path::new(relative)
                .components()
                .all(|c| matches!(c, std::path::Component::Normal(_)))
                && (relative.starts_with(&format!("{AGENTS_DIR}/"))
                    || relative.starts_with(&format!("{PROMPTS_DIR}/")));
            if !allowed {
                tracing::warn!(file = %relative, "skipping suspicious marker entry");
                continue;
            }

            let path = dirs.root().join(relative);
            if path.exists() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
                removed.push(relative.clone());
            }
        }

        Ok(removed)
    }
}
