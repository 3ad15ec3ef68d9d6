//! Installation plumbing: host directory layout, distribution assets, and
//! the version marker.
//!
//! The CLI commands orchestrate these pieces; none of them reaches into the
//! environment on its own beyond the explicit overrides passed down from the
//! command line.

pub mod assets;
pub mod marker;
pub mod paths;

pub use assets::DistAssets;
pub use marker::VersionMarker;
pub use paths::CopilotDirs;
