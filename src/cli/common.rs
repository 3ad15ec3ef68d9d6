//! Helpers shared by the CLI commands.

use anyhow::Result;
use std::collections::BTreeMap;

use crate::core::ScopilotError;
use crate::mcp::SelectionRequest;
use crate::registry;

/// Parse repeated `--api-key server=secret` arguments into a credential map.
///
/// The secret may contain `=`; only the first one splits.
pub fn parse_api_keys(args: &[String]) -> Result<BTreeMap<String, String>> {
    let mut credentials = BTreeMap::new();

    for arg in args {
        let Some((server, secret)) = arg.split_once('=') else {
            return Err(ScopilotError::InvalidApiKeyArg { arg: arg.clone() }.into());
        };
        if server.is_empty() || secret.is_empty() {
            return Err(ScopilotError::InvalidApiKeyArg { arg: arg.clone() }.into());
        }
        credentials.insert(server.to_string(), secret.to_string());
    }

    Ok(credentials)
}

/// Build a [`SelectionRequest`] from CLI flags and a fallback name list.
///
/// `--servers` wins when given; otherwise `fallback` (the registry's
/// credential-free default on install, the marker's recorded selection on
/// update) is used.
pub fn build_selection(
    server_flags: &[String],
    fallback: Vec<String>,
    api_key_args: &[String],
) -> Result<SelectionRequest> {
    let names = if server_flags.is_empty() { fallback } else { server_flags.to_vec() };

    Ok(SelectionRequest { names, credentials: parse_api_keys(api_key_args)? })
}

/// The registry's credential-free default selection.
#[must_use]
pub fn default_server_names() -> Vec<String> {
    registry::default_selection()
}
