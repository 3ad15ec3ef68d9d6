//! Global constants used throughout the scopilot codebase.
//!
//! This module contains the fixed file names, settings keys, and default
//! values of the SuperClaude framework installation. Defining them centrally
//! keeps the reconciler, the CLI commands, and the tests in agreement about
//! the on-disk contract.

/// File name of the MCP server configuration inside the Copilot directory.
pub const MCP_CONFIG_FILE: &str = "mcp-config.json";

/// File name of the flat settings map inside the Copilot directory.
pub const SETTINGS_FILE: &str = "config.json";

/// File name of the version marker written by `install` and read back by
/// `update`, `status`, and `uninstall`.
pub const VERSION_MARKER_FILE: &str = ".superclaude.json";

/// Directory (inside the Copilot directory) receiving agent descriptors.
pub const AGENTS_DIR: &str = "agents";

/// Directory (inside the Copilot directory) receiving prompt markdown.
pub const PROMPTS_DIR: &str = "prompts";

/// Settings key selecting the default chat agent.
pub const SETTING_DEFAULT_AGENT: &str = "chat.defaultAgent";

/// Settings key selecting the chat model.
pub const SETTING_MODEL: &str = "chat.model";

/// Settings key toggling extended thinking.
pub const SETTING_THINKING: &str = "chat.thinkingEnabled";

/// Settings key toggling the todo list surface.
pub const SETTING_TODO_LIST: &str = "chat.todoListEnabled";

/// Settings key toggling sub-agent delegation.
pub const SETTING_DELEGATION: &str = "chat.delegationEnabled";

/// The agent identifier asserted as the default agent on install.
pub const DEFAULT_AGENT: &str = "superclaude";

/// The model identifier written when the user has not chosen one.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4";

/// Environment variable overriding the Copilot CLI directory.
pub const COPILOT_DIR_ENV: &str = "SCOPILOT_COPILOT_DIR";

/// Environment variable overriding the bundled assets directory.
pub const ASSETS_DIR_ENV: &str = "SCOPILOT_ASSETS_DIR";
