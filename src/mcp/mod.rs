//! MCP (Model Context Protocol) server configuration management.
//!
//! This module owns the reconciliation of SuperClaude's managed MCP servers
//! into Copilot CLI's `mcp-config.json`, including:
//! - Merging managed server entries without touching user-added ones
//! - Preserving user-set environment values (API keys) across reinstalls
//! - Applying newly supplied credentials over stale stored values
//! - Safe atomic updates to the configuration file
//!
//! The heart of the module is [`merge_servers`], a pure function from the
//! existing server map, a [`SelectionRequest`], and the static registry to a
//! new server map. It performs no I/O; [`McpConfig`] wraps it with load/save.
//!
//! # Merge contract
//!
//! After every merge:
//! - Entries whose name is not in the registry are carried over verbatim.
//! - Every selected, known server is present with its launch configuration
//!   refreshed to the current registry default.
//! - Environment values a prior entry already had win over registry defaults,
//!   so user-set secrets survive reinstallation; a credential supplied on
//!   this invocation wins over both.
//! - Selection names unknown to the registry are skipped silently, so a
//!   stale recorded selection never breaks an update.
//! - The merge is idempotent.
//!
//! Deselecting a previously installed server does *not* remove its entry;
//! only addition and refresh are implemented. This is a known limitation,
//! kept deliberately.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::ScopilotError;
use crate::registry::ServerDefinition;


/// Input to one reconciliation pass: the server names the caller wants
/// present, plus any credentials to apply.
///
/// Credentials are only meaningful for names whose definition requires one;
/// entries for other names are ignored.
#[derive(Debug, Clone, Default)]
pub struct SelectionRequest {
    /// Managed server names to ensure present.
    pub names: Vec<String>,

    /// Server name -> secret value supplied on this invocation.
    pub credentials: BTreeMap<String, String>,
}

impl SelectionRequest {
    /// A selection with the given names and no credentials.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect(), credentials: BTreeMap::new() }
    }
}

/// The `mcp-config.json` file structure.
///
/// The file may contain both installer-managed and user-managed server
/// entries; server bodies are kept as opaque JSON so user entries round-trip
/// byte-identically. Unknown top-level keys are preserved through the
/// flattened `other` map.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct McpConfig {
    /// Map of server names to their configuration bodies.
    #[serde(rename = "mcpServers", default)]
    pub mcp_servers: BTreeMap<String, Value>,

    /// Other top-level keys preserved from the original file.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl McpConfig {
    /// Load an existing `mcp-config.json` or start from an empty one.
    ///
    /// An absent file is a valid, empty configuration; a present but
    /// malformed file is an error so user data is never clobbered by a
    /// misparse.
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

    /// Save the configuration, fully replacing the prior file contents.
    ///
    /// The file is written atomically with two-space indentation.
    pub fn save(&self, path: &Path) -> Result<()> {
        crate::utils::write_json_file(path, self, true)
    }

    /// Reconcile the server map against a selection and the registry.
    pub fn apply_selection(&mut self, selection: &SelectionRequest, registry: &[ServerDefinition]) {
        self.mcp_servers = merge_servers(&self.mcp_servers, selection, registry);
    }

    /// Names of registry-managed servers currently present in the map.
    #[must_use]
    pub fn managed_present<'a>(&'a self, registry: &[ServerDefinition]) -> Vec<&'a str> {
        self.mcp_servers
            .keys()
            .filter(|name| registry.iter().any(|def| def.name == name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Merge a desired set of managed servers into an existing server map.
///
/// Pure function: the result is a new map, sharing no structure with the
/// input, and no I/O happens here. The operation is total over its input
/// domain; absent registry entries, absent credentials, and absent prior
/// entries are all handled states, not errors.
///
/// See the module documentation for the full contract.
#[must_use]
pub fn merge_servers(
    existing: &BTreeMap<String, Value>,
    selection: &SelectionRequest,
    registry: &[ServerDefinition],
) -> BTreeMap<String, Value> {
    // Unmanaged entries carry over verbatim; managed ones are rebuilt below
    // only if selected, which leaves previously installed but deselected
    // servers in place untouched.
    let mut result: BTreeMap<String, Value> = existing.clone();

    for name in &selection.names {
        let Some(definition) = registry.iter().find(|def| def.name == name.as_str()) else {
            // Tolerate stale selections recorded against a newer registry.
            tracing::debug!(server = %name, "ignoring unknown server in selection");
            continue;
        };

        let mut body = definition.fresh_body();

        // Registry defaults, then prior user-set values, then any credential
        // supplied on this invocation.
        let mut env = env_entries(&body);
        if let Some(prior) = existing.get(name.as_str()) {
            env.extend(env_entries(prior));
        }
        if definition.requires_credential
            && let (Some(var), Some(secret)) =
                (definition.credential_env_var, selection.credentials.get(name.as_str()))
        {
            env.insert(var.to_string(), Value::String(secret.clone()));
        }

        if let Some(obj) = body.as_object_mut() {
            if env.is_empty() {
                obj.remove("env");
            } else {
                obj.insert("env".to_string(), Value::Object(env));
            }
        }

        result.insert(name.clone(), body);
    }

    result
}

/// The `env` map of a server body, or an empty map when absent.
fn env_entries(body: &Value) -> Map<String, Value> {
    body.get("env").and_then(Value::as_object).cloned().unwrap_or_default()
}
