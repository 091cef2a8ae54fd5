//! Package installation
//!
//! This module provides:
//! - The `PackageInstaller` seam used by the commands
//! - A subprocess-backed installer and a no-op one for `--skip-install`

pub mod installer;

pub use installer::{filter_stderr, InstallOutcome, PackageInstaller, SkipInstaller, SystemInstaller};
