//! Static registry of known MCP servers.
//!
//! The registry is the compiled-in list of servers the installer is allowed
//! to create and refresh in `mcp-config.json`. Any entry in the persisted
//! configuration whose name is not listed here is user-owned and must never
//! be touched by the reconciler.
//!
//! Each definition carries the "factory default" launch configuration for
//! its server plus, where the server needs an API key, the environment
//! variable the key is injected under. The registry is data, not behavior:
//! reconciliation treats the launch bodies as opaque JSON.

use serde_json::{Value, json};
use std::sync::LazyLock;

/// A single known MCP server.
#[derive(Debug, Clone)]
pub struct ServerDefinition {
    /// Unique server name, also the key in `mcp-config.json`.
    pub name: &'static str,

    /// Whether this server needs an API key to function.
    pub requires_credential: bool,

    /// Environment variable the credential is injected under.
    ///
    /// Present iff `requires_credential` is set.
    pub credential_env_var: Option<&'static str>,

    /// Factory default launch configuration body.
    pub launch_config: Value,
}

impl ServerDefinition {
    /// A deep copy of the default launch configuration.
    #[must_use]
    pub fn fresh_body(&self) -> Value {
        self.launch_config.clone()
    }
}

/// The SuperClaude MCP server set.
static REGISTRY: LazyLock<Vec<ServerDefinition>> = LazyLock::new(|| {
    vec![
        ServerDefinition {
            name: "context7",
            requires_credential: false,
            credential_env_var: None,
            launch_config: json!({
                "command": "npx",
                "args": ["-y", "@upstash/context7-mcp"],
                "tools": ["*"],
            }),
        },
        ServerDefinition {
            name: "sequential-thinking",
            requires_credential: false,
            credential_env_var: None,
            launch_config: json!({
                "command": "npx",
                "args": ["-y", "@modelcontextprotocol/server-sequential-thinking"],
                "tools": ["*"],
            }),
        },
        ServerDefinition {
            name: "magic",
            requires_credential: true,
            credential_env_var: Some("TWENTYFIRST_API_KEY"),
            launch_config: json!({
                "command": "npx",
                "args": ["-y", "@21st-dev/magic"],
                "tools": ["*"],
            }),
        },
        ServerDefinition {
            name: "playwright",
            requires_credential: false,
            credential_env_var: None,
            launch_config: json!({
                "command": "npx",
                "args": ["-y", "@playwright/mcp@latest"],
                "tools": ["*"],
            }),
        },
        ServerDefinition {
            name: "morphllm-fast-apply",
            requires_credential: true,
            credential_env_var: Some("MORPH_API_KEY"),
            launch_config: json!({
                "command": "npx",
                "args": ["-y", "@morph-llm/morph-fast-apply"],
                "tools": ["*"],
            }),
        },
        ServerDefinition {
            name: "serena",
            requires_credential: false,
            credential_env_var: None,
            launch_config: json!({
                "command": "uvx",
                "args": [
                    "--from",
                    "git+https://github.com/oraios/serena",
                    "serena",
                    "start-mcp-server",
                ],
                "tools": ["*"],
            }),
        },
        ServerDefinition {
            name: "tavily",
            requires_credential: true,
            credential_env_var: Some("TAVILY_API_KEY"),
            launch_config: json!({
                "command": "npx",
                "args": ["-y", "tavily-mcp"],
                "tools": ["*"],
            }),
        },
    ]
});

/// All known server definitions.
#[must_use]
pub fn registry() -> &'static [ServerDefinition] {
    &REGISTRY
}

/// Look up a definition by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ServerDefinition> {
    REGISTRY.iter().find(|def| def.name == name)
}

/// Whether a server name is installer-managed.
#[must_use]
pub fn is_managed(name: &str) -> bool {
    find(name).is_some()
}

/// The default selection when the user names no servers: every registry
/// server that works without a credential.
#[must_use]
pub fn default_selection() -> Vec<String> {
    REGISTRY
        .iter()
        .filter(|def| !def.requires_credential)
        .map(|def| def.name.to_string())
        .collect()
}
