//! scopilot - SuperClaude framework installer for GitHub Copilot CLI
//!
//! scopilot provisions the SuperClaude agent framework (markdown prompts,
//! JSON agent descriptors, and MCP server configurations) into a GitHub
//! Copilot CLI configuration directory, and keeps it current across updates
//! without disturbing anything the user configured themselves.
//!
//! # Architecture Overview
//!
//! The interesting part of the crate is the configuration reconciliation in
//! [`mcp`] and [`settings`]: pure in-memory merges of installer-managed
//! entries into user-editable JSON files. Their contract:
//!
//! - **Non-destructive**: entries and keys the installer does not own are
//!   carried through byte-identically.
//! - **Secret-preserving**: API keys the user entered earlier survive
//!   reinstallation; a key supplied on the command line replaces them.
//! - **Idempotent**: running the same install or update twice produces the
//!   same files.
//!
//! Everything else is plumbing around that core: asset copying, the version
//! marker, and the CLI surface.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (`install`, `update`, `uninstall`,
//!   `status`, `build`)
//! - [`mcp`] - MCP server map reconciliation and `mcp-config.json` handling
//! - [`settings`] - Flat settings (`config.json`) reconciliation
//! - [`registry`] - Compiled-in table of known MCP servers
//! - [`installer`] - Host directory layout, asset deployment, version marker
//! - [`convert`] - Offline markdown-to-assets build pipeline
//!
//! # Supporting Modules
//!
//! - [`core`] - Error types and user-friendly error reporting
//! - [`constants`] - File names, settings keys, and defaults
//! - [`utils`] - Atomic file writes and JSON helpers
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Install with the default server set
//! scopilot install
//!
//! # Install specific servers with an API key
//! scopilot install --servers context7,magic --api-key magic=sk-21st
//!
//! # Refresh an existing installation
//! scopilot update
//!
//! # Inspect or remove
//! scopilot status
//! scopilot uninstall
//! ```

pub mod cli;
pub mod constants;
pub mod convert;
pub mod core;
pub mod installer;
pub mod mcp;
pub mod registry;
pub mod settings;
pub mod utils;
