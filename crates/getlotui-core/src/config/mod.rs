//! Project configuration and generated starter files

pub mod generator;
pub mod project;

pub use generator::{theme_file, utility_file, GeneratedFile, WEB_CORE_PACKAGES};
pub use project::{ConfigError, ProjectConfig, CONFIG_FILE_NAME};
