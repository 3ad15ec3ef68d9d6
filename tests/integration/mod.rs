//! Integration test suite for scopilot.
//!
//! End-to-end tests that drive the compiled binary against temporary
//! Copilot and assets directories via the `SCOPILOT_COPILOT_DIR` and
//! `SCOPILOT_ASSETS_DIR` overrides. No test touches the real home
//! directory.
//!
//! # Running
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **install**: fresh install, preconditions, merge behavior
//! - **update**: selection reuse, secret preservation, stale selections
//! - **uninstall_status**: teardown behavior and status reporting
//! - **build**: markdown-to-assets pipeline, end-to-end with install

mod fixtures;

mod build;
mod uninstall_status;
mod update;
