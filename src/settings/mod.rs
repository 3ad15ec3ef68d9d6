//! Copilot CLI settings (`config.json`) management.
//!
//! The settings file is a flat key-value JSON map the user edits freely. The
//! installer touches exactly five keys and leaves everything else alone:
//!
//! - `chat.defaultAgent` is re-asserted to `superclaude` on every
//!   install/update (unless the caller opts out).
//! - `chat.model` and the three feature flags (thinking, todo list,
//!   delegation) are written only when currently absent. A user's prior
//!   explicit choice, including an explicit `false`, is never overwritten.
//!
//! Uninstall removes `chat.defaultAgent` only when it still equals the value
//! we installed, so an agent the user switched to afterwards is never
//! clobbered.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::constants::{
    DEFAULT_AGENT, DEFAULT_MODEL, SETTING_DEFAULT_AGENT, SETTING_DELEGATION, SETTING_MODEL,
    SETTING_THINKING, SETTING_TODO_LIST,
};
use crate::core::ScopilotError;

/// The flat settings map persisted as `config.json`.
///
/// All keys are held opaquely so user settings round-trip untouched.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CopilotSettings {
    /// Every key in the file, installer-known or not.
    #[serde(flatten)]
    pub entries: BTreeMap<String, Value>,
}

impl CopilotSettings {
    /// Load an existing `config.json` or start from an empty map.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            crate::utils::read_json_file(path).map_err(|e| {
                ScopilotError::ConfigParseError {
                    path: path.display().to_string(),
                    reason: e.root_cause().to_string(),
                }
                .into()
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Save the settings, fully replacing the prior file contents.
    pub fn save(&self, path: &Path) -> Result<()> {
        crate::utils::write_json_file(path, self, true)
    }

    /// The current default agent, if the key is set to a string.
    #[must_use]
    pub fn default_agent(&self) -> Option<&str> {
        self.entries.get(SETTING_DEFAULT_AGENT).and_then(Value::as_str)
    }

    /// Unconditionally set `chat.defaultAgent` to the SuperClaude agent.
    pub fn assert_default_agent(&mut self) {
        self.entries
            .insert(SETTING_DEFAULT_AGENT.to_string(), Value::String(DEFAULT_AGENT.to_string()));
    }

    /// Write the model and feature-flag defaults for keys not yet set.
    ///
    /// First-write-wins: a key the user already set, to any value, is left
    /// alone.
    pub fn apply_first_run_defaults(&mut self) {
        let defaults: [(&str, Value); 4] = [
            (SETTING_MODEL, Value::String(DEFAULT_MODEL.to_string())),
            (SETTING_THINKING, Value::Bool(true)),
            (SETTING_TODO_LIST, Value::Bool(true)),
            (SETTING_DELEGATION, Value::Bool(true)),
        ];

        for (key, value) in defaults {
            self.entries.entry(key.to_string()).or_insert(value);
        }
    }

    /// The full install/update settings merge: re-assert the default agent,
    /// then fill in first-run defaults.
    pub fn merge_default_agent_settings(&mut self) {
        self.assert_default_agent();
        self.apply_first_run_defaults();
    }

    /// Remove `chat.defaultAgent` if it still equals `expected`.
    ///
    /// Returns whether the key was removed.
    pub fn unset_default_agent(&mut self, expected: &str) -> bool {
        if self.default_agent() == Some(expected) {
            self.entries.remove(SETTING_DEFAULT_AGENT);
            true
        } else {
            false
        }
    }
}
