//! Command handlers
//!
//! Each handler reports progress through cliclack and returns an outcome value
//! describing what it did. Best-effort steps log warnings instead of failing.

pub mod add;
pub mod init;
pub mod list;

pub use add::{run_add, AddOutcome};
pub use init::{run_init, InitOutcome, InitReport};
pub use list::{run_list, ComponentAvailability};

use std::path::Path;

/// `path` relative to the project directory, for messages
pub(crate) fn display_relative(project_dir: &Path, path: &Path) -> String {
    path.strip_prefix(project_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}
