//! Component templates
//!
//! This module provides:
//! - The known component catalog and name normalization
//! - Per-component dependency lists for the web adapter
//! - Template fetching from local directories or remote URLs
//! - Copying templates into a project

pub mod catalog;
pub mod copier;
pub mod dependencies;
pub mod fetcher;

pub use catalog::{
    normalize_component_name, template_file_name, template_relative_path, KNOWN_COMPONENTS,
};
pub use copier::copy_component;
pub use dependencies::get_component_dependencies;
pub use fetcher::{TemplateFetcher, TemplateSource, TEMPLATE_DIR_ENV, TEMPLATE_URL_ENV};
