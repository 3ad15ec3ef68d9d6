//! Shared utilities.
//!
//! - [`fs`] - File system operations with atomic writes and JSON helpers

pub mod fs;

pub use fs::{
    atomic_write, ensure_dir, read_json_file, read_text_file, safe_write, write_json_file,
    write_text_file,
};
