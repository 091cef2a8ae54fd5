//! `add <component>`: copy a component template into the project

use super::display_relative;
use crate::config::{ConfigError, ProjectConfig};
use crate::detect::{self, Adapter};
use crate::install::{InstallOutcome, PackageInstaller};
use crate::templates::{
    copy_component, get_component_dependencies, normalize_component_name, template_file_name,
    template_relative_path, TemplateFetcher, KNOWN_COMPONENTS,
};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// What `add` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// No config file; run `init` first
    NotInitialized,
    /// The configured adapter has no template with this name
    NotFound {
        component: String,
        adapter: Adapter,
    },
    Added {
        component: String,
        path: PathBuf,
        dependencies: Vec<String>,
        /// Dependency install, when there were dependencies to install
        install: Option<InstallOutcome>,
        import_hint: String,
    },
}

/// Add `component` to the project in `project_dir`
pub async fn run_add<I: PackageInstaller>(
    project_dir: &Path,
    component: &str,
    fetcher: &TemplateFetcher,
    installer: &I,
) -> Result<AddOutcome> {
    // Step 1: Require an initialized project
    let config = match ProjectConfig::load(project_dir).await {
        Ok(config) => config,
        Err(ConfigError::NotFound(_)) => {
            cliclack::log::error("No getlotui config found. Run `getlotui init` first.")?;
            return Ok(AddOutcome::NotInitialized);
        }
        Err(e) => return Err(e.into()),
    };

    // Step 2-3: Resolve the template
    let name = normalize_component_name(component);
    let Some(content) = fetcher.fetch_component(config.adapter, &name).await? else {
        tracing::debug!(
            "No template {} in {}",
            template_relative_path(config.adapter, &name),
            fetcher.source().describe()
        );
        cliclack::log::error(format!(
            "Component '{}' not found for the {} adapter.\nAvailable components: {}",
            name,
            config.adapter,
            KNOWN_COMPONENTS.join(", ")
        ))?;
        return Ok(AddOutcome::NotFound {
            component: name,
            adapter: config.adapter,
        });
    };

    // Step 4: Copy, replacing any previous copy
    let target_dir = config.components_path(project_dir);
    let file_name = template_file_name(config.adapter, &name);
    let path = copy_component(&content, &target_dir, &file_name).await?;
    cliclack::log::success(format!(
        "Added {} to {}",
        name,
        display_relative(project_dir, &path)
    ))?;

    // Step 5: Dependencies (web only)
    let dependencies = match config.adapter {
        Adapter::Web => get_component_dependencies(&name),
        _ => Vec::new(),
    };
    let install = if dependencies.is_empty() {
        None
    } else {
        Some(
            installer
                .install(&dependencies, project_dir, config.package_manager)
                .await,
        )
    };

    // Step 6: Usage hint
    let import_hint = import_hint(project_dir, &config, &name);
    cliclack::log::info(format!("Import it with:\n  {}", import_hint.cyan()))?;

    Ok(AddOutcome::Added {
        component: name,
        path,
        dependencies,
        install,
        import_hint,
    })
}

/// Import statement for a copied component
pub fn import_hint(project_dir: &Path, config: &ProjectConfig, component: &str) -> String {
    let components_dir = config.components_dir.trim_start_matches("./").trim_matches('/');
    match config.adapter {
        Adapter::Flutter => {
            let package = detect::flutter_package_name(project_dir).unwrap_or_else(|| "app".to_string());
            let within_lib = components_dir.strip_prefix("lib/").unwrap_or(components_dir);
            format!(
                "import 'package:{}/{}/{}.dart';",
                package, within_lib, component
            )
        }
        _ => format!(
            "import {{ {} }} from \"@/{}/{}\";",
            component, components_dir, component
        ),
    }
}
