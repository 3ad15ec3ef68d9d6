//! Core types for scopilot.
//!
//! This module holds the error handling foundation used throughout the
//! codebase: strongly-typed errors ([`ScopilotError`]) for precise handling
//! in code, and user-friendly contexts ([`ErrorContext`]) with actionable
//! suggestions for CLI users. Every fatal condition the installer can hit
//! maps to a suggestion naming the exact corrective command.

pub mod error;

pub use error::{ErrorContext, ScopilotError, user_friendly_error};
