//! getlotui core - project detection and component scaffolding
//!
//! This library implements the `getlotui` CLI: it detects which platform a
//! project targets, records that in `getlotui.config.json`, and copies
//! component templates into the project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Detection, dependency lookup, template fetching, file patching
//! - **Layer 2: Side Effects** - `PackageInstaller` trait for running the package manager
//! - **Layer 3: Commands** - `init`, `add` and `list` handlers that report through cliclack
//!
//! # Example Usage
//!
//! ```ignore
//! use getlotui_core::{commands, install::SystemInstaller, templates};
//!
//! let dir = std::env::current_dir()?;
//! commands::run_init(&dir, &SystemInstaller).await?;
//!
//! let fetcher = templates::TemplateFetcher::new(templates::TemplateSource::resolve(None)?);
//! commands::run_add(&dir, "button", &fetcher, &SystemInstaller).await?;
//! ```

pub mod commands;
pub mod config;
pub mod detect;
pub mod install;
pub mod styles;
pub mod templates;

// Re-export main types for convenience
pub use config::{ConfigError, ProjectConfig, CONFIG_FILE_NAME};
pub use detect::{detect, Adapter, Detection, PackageManager};
pub use install::{InstallOutcome, PackageInstaller, SkipInstaller, SystemInstaller};
pub use templates::{get_component_dependencies, TemplateFetcher, TemplateSource};
