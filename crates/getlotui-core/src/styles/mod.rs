//! Idempotent patching of the global stylesheet and the Tailwind config
//!
//! Every operation can be run any number of times and reports whether it
//! changed anything. I/O errors are returned to the caller, which decides
//! whether they are fatal.

pub mod build_config;
pub mod stylesheet;

pub use build_config::{patch_build_config, BuildConfigPatch};
pub use stylesheet::{inject_directives, inject_tokens, locate_or_create, TailwindDirectives};

/// What a patch operation did to its file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The file did not exist and was written from scratch
    Created,
    /// Existing content was modified
    Patched,
    /// Nothing to do
    Unchanged,
    /// The file has a shape we do not know how to patch; left as is
    Unpatchable,
}

impl PatchOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, PatchOutcome::Created | PatchOutcome::Patched)
    }
}
