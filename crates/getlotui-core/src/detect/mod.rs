//! Project detection
//!
//! This module provides:
//! - Adapter and package manager types
//! - Detection of both from marker files in a project directory

pub mod adapter;
pub mod project;

pub use adapter::{Adapter, PackageManager};
pub use project::{
    detect, detect_adapter, detect_package_manager, flutter_package_name, tailwind_major,
    Detection, PackageJson,
};
