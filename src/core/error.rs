//! Error handling for scopilot.
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with the exact corrective command to run
//!
//! The two main types are [`ScopilotError`], the enumerated failure cases,
//! and [`ErrorContext`], a wrapper that carries an optional suggestion and
//! details for terminal display. Use [`user_friendly_error`] at the top level
//! of the CLI to convert any [`anyhow::Error`] into a displayable context.
//!
//! Every fatal precondition (missing host installation, already installed,
//! not installed, missing assets) maps to a suggestion naming the command
//! that fixes it; unexpected I/O failures are reported with their message
//! and terminate the run with a non-zero status.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for scopilot operations.
///
/// Each variant represents a specific failure mode and is written for end
/// users, not just developers. The reconciliation core itself is total over
/// its inputs and never produces these; they all describe preconditions of
/// the surrounding installer.
#[derive(Error, Debug)]
pub enum ScopilotError {
    /// The Copilot CLI configuration directory does not exist.
    ///
    /// SuperClaude is installed *into* an existing Copilot CLI setup, so a
    /// missing base directory means the host tool was never run (or a wrong
    /// `--copilot-dir` was given).
    #[error("Copilot CLI directory not found: {path}")]
    CopilotNotFound {
        /// The directory that was expected to exist
        path: String,
    },

    /// A version marker is already present and `--force` was not given.
    #[error("SuperClaude {version} is already installed")]
    AlreadyInstalled {
        /// The version recorded in the existing marker
        version: String,
    },

    /// No version marker was found where one is required.
    #[error("SuperClaude is not installed")]
    NotInstalled,

    /// The bundled distribution assets could not be found or are incomplete.
    #[error("distribution assets not found at: {path}")]
    AssetsMissing {
        /// The assets directory that was checked
        path: String,
    },

    /// A persisted configuration file exists but could not be parsed.
    #[error("failed to parse {path}: {reason}")]
    ConfigParseError {
        /// Path of the malformed file
        path: String,
        /// Parser error message
        reason: String,
    },

    /// A `--api-key` argument was not of the form `server=secret`.
    #[error("invalid --api-key argument: {arg}")]
    InvalidApiKeyArg {
        /// The argument as given on the command line
        arg: String,
    },

    /// Standard I/O error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error wrapper.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Catch-all for errors that don't fit other categories.
    #[error("{message}")]
    Other {
        /// Description of the error
        message: String,
    },
}

/// Error context wrapper adding user-facing guidance to a [`ScopilotError`].
///
/// The context is displayed on stderr with color coding: the error in red,
/// details in yellow, the suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ScopilotError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ScopilotError) -> Self {
        Self { error, suggestion: None, details: None }
    }

    /// Add an actionable suggestion, shown in green.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add explanatory details, shown in yellow.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with contextual suggestions.
///
/// Known [`ScopilotError`] variants are enriched with the corrective command
/// for their precondition; everything else is wrapped as
/// [`ScopilotError::Other`] with its full context chain preserved in the
/// message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<ScopilotError>() {
        Ok(e) => e,
        Err(other) => {
            return ErrorContext::new(ScopilotError::Other { message: format!("{other:#}") });
        }
    };

    let (details, suggestion): (Option<String>, Option<String>) = match &error {
        ScopilotError::CopilotNotFound { .. } => (
            Some("SuperClaude is installed into an existing Copilot CLI setup".to_string()),
            Some(
                "Install GitHub Copilot CLI and run it once, or pass --copilot-dir <PATH>"
                    .to_string(),
            ),
        ),
        ScopilotError::AlreadyInstalled { .. } => (
            None,
            Some("Run 'scopilot install --force' to reinstall over the existing setup".to_string()),
        ),
        ScopilotError::NotInstalled => (None, Some("Run 'scopilot install' first".to_string())),
        ScopilotError::AssetsMissing { .. } => (
            Some("The scopilot package may be corrupt or incompletely extracted".to_string()),
            Some("Reinstall the scopilot package, or pass --assets-dir <PATH>".to_string()),
        ),
        ScopilotError::ConfigParseError { path, .. } => (
            Some(format!("{path} may be malformed or contain invalid JSON; it was left untouched")),
            Some("Fix or remove the file, then re-run the command".to_string()),
        ),
        ScopilotError::InvalidApiKeyArg { .. } => (
            None,
            Some("Use the form --api-key <server>=<secret>, e.g. --api-key magic=sk-1".to_string()),
        ),
        _ => (None, None),
    };

    ErrorContext { error, suggestion, details }
}
