//! Shared test environment for the integration suite.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated Copilot and assets directories for one test.
pub struct TestEnvironment {
    _temp: TempDir,
    copilot_dir: PathBuf,
    assets_dir: PathBuf,
}

impl TestEnvironment {
    /// A temp layout with an existing (empty) Copilot directory and a valid
    /// assets tree.
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let copilot_dir = temp.path().join("copilot");
        let assets_dir = temp.path().join("assets");
        fs::create_dir_all(&copilot_dir).unwrap();
        write_assets(&assets_dir);

        Self { _temp: temp, copilot_dir, assets_dir }
    }

    /// Like [`TestEnvironment::new`], but without the Copilot directory, to
    /// exercise the missing-host precondition.
    pub fn without_copilot_dir() -> Self {
        let env = Self::new();
        fs::remove_dir_all(&env.copilot_dir).unwrap();
        env
    }

    pub fn copilot_dir(&self) -> &Path {
        &self.copilot_dir
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// A `scopilot` invocation pointed at this environment.
    pub fn scopilot(&self) -> Command {
        let mut cmd = Command::cargo_bin("scopilot").unwrap();
        cmd.env("SCOPILOT_COPILOT_DIR", &self.copilot_dir)
            .env("SCOPILOT_ASSETS_DIR", &self.assets_dir)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Parse a JSON file under the Copilot directory.
    pub fn read_copilot_json(&self, name: &str) -> Value {
        let raw = fs::read_to_string(self.copilot_dir.join(name)).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    /// Write a JSON file under the Copilot directory.
    pub fn write_copilot_json(&self, name: &str, value: &Value) {
        fs::write(self.copilot_dir.join(name), serde_json::to_string_pretty(value).unwrap())
            .unwrap();
    }
}

/// A minimal but complete assets tree: one agent descriptor and its prompt.
pub fn write_assets(root: &Path) {
    fs::create_dir_all(root.join("agents")).unwrap();
    fs::create_dir_all(root.join("prompts")).unwrap();
    fs::write(
        root.join("agents").join("superclaude.json"),
        r#"{"name": "superclaude", "prompt": "prompts/superclaude.md"}"#,
    )
    .unwrap();
    fs::write(root.join("prompts").join("superclaude.md"), "# SuperClaude\n\nOrchestrate.\n")
        .unwrap();
}
