//! `init`: detect the project, write the config and starter files

use super::display_relative;
use crate::config::{theme_file, utility_file, GeneratedFile, ProjectConfig, WEB_CORE_PACKAGES};
use crate::detect::{self, Adapter};
use crate::install::{InstallOutcome, PackageInstaller};
use crate::styles::{self, PatchOutcome, TailwindDirectives};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// What `init` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// A config file was already present; nothing was written
    AlreadyInitialized { config_path: PathBuf },
    Initialized(InitReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub config: ProjectConfig,
    pub config_path: PathBuf,
    /// Files created or modified, in the order they were touched
    pub changed_files: Vec<PathBuf>,
    /// Steps that failed or were skipped
    pub warnings: Vec<String>,
    /// Core package install, web only
    pub install: Option<InstallOutcome>,
}

impl InitReport {
    fn warn(&mut self, message: String) -> Result<()> {
        cliclack::log::warning(&message)?;
        self.warnings.push(message);
        Ok(())
    }

    fn touched(&mut self, path: PathBuf) {
        if !self.changed_files.contains(&path) {
            self.changed_files.push(path);
        }
    }
}

/// Initialize the project in `project_dir`
pub async fn run_init<I: PackageInstaller>(project_dir: &Path, installer: &I) -> Result<InitOutcome> {
    // Step 1: Never touch an initialized project
    let config_path = ProjectConfig::path_in(project_dir);
    if ProjectConfig::exists_in(project_dir) {
        cliclack::log::warning(format!(
            "{} already exists, skipping init",
            display_relative(project_dir, &config_path)
        ))?;
        return Ok(InitOutcome::AlreadyInitialized { config_path });
    }

    // Step 2: Detect adapter and package manager
    let detection = detect::detect(project_dir);
    cliclack::log::info(format!(
        "Detected {} project using {}",
        detection.adapter.display_name(),
        detection.package_manager
    ))?;

    // Step 3: Persist the config
    let config = ProjectConfig::from_detection(detection);
    let config_path = config
        .save(project_dir)
        .await
        .context("Failed to write project config")?;
    cliclack::log::success(format!(
        "Created {}",
        display_relative(project_dir, &config_path)
    ))?;

    let mut report = InitReport {
        config: config.clone(),
        config_path: config_path.clone(),
        changed_files: vec![config_path],
        warnings: Vec::new(),
        install: None,
    };

    // Step 4: Theme tokens
    let theme = theme_file(config.adapter, &config.theme_dir);
    write_starter_file(project_dir, &theme, "theme file", &mut report).await?;

    // Step 5: Style-merging helper
    match utility_file(config.adapter) {
        Some(utils) => write_starter_file(project_dir, &utils, "utility file", &mut report).await?,
        None => report.warn(
            "No utility file for an unknown project type. Add a class-merging helper yourself."
                .to_string(),
        )?,
    }

    // Step 6: Web projects get core packages and Tailwind wiring
    if config.adapter == Adapter::Web {
        let packages: Vec<String> = WEB_CORE_PACKAGES.iter().map(|p| p.to_string()).collect();
        let outcome = installer
            .install(&packages, project_dir, config.package_manager)
            .await;
        if let InstallOutcome::Failed { retry_command, .. } = &outcome {
            report.warnings.push(format!("Core packages not installed: {}", retry_command));
        }
        report.install = Some(outcome);

        apply_web_styles(project_dir, &config, &mut report).await?;
    }

    // Step 7: Summary
    if report.warnings.is_empty() {
        cliclack::log::success(format!(
            "Initialized getlotui for {}",
            config.adapter.display_name()
        ))?;
    } else {
        cliclack::log::warning(format!(
            "Initialized getlotui for {} with {} warning(s)",
            config.adapter.display_name(),
            report.warnings.len()
        ))?;
    }

    Ok(InitOutcome::Initialized(report))
}

/// Write a generated file, turning failures into warnings
///
/// An existing file is left as it is.
async fn write_starter_file(
    project_dir: &Path,
    file: &GeneratedFile,
    label: &str,
    report: &mut InitReport,
) -> Result<()> {
    let path = project_dir.join(&file.relative_path);
    if path.exists() {
        return report.warn(format!(
            "{} already exists, keeping it instead of the getlotui {}",
            file.relative_path, label
        ));
    }
    match write_file(&path, file.contents).await {
        Ok(()) => {
            cliclack::log::success(format!("Created {} {}", label, file.relative_path))?;
            report.touched(path);
        }
        Err(e) => report.warn(format!("Could not create {}: {:#}", label, e))?,
    }
    Ok(())
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Stylesheet directives, design tokens and the Tailwind content glob
///
/// Each step runs even if an earlier one failed.
async fn apply_web_styles(
    project_dir: &Path,
    config: &ProjectConfig,
    report: &mut InitReport,
) -> Result<()> {
    let stylesheet = match styles::locate_or_create(project_dir).await {
        Ok((path, outcome)) => {
            let shown = display_relative(project_dir, &path);
            if outcome == PatchOutcome::Created {
                cliclack::log::success(format!("Created {}", shown))?;
                report.touched(path.clone());
            }
            Some(path)
        }
        Err(e) => {
            report.warn(format!("Could not locate or create a global stylesheet: {:#}", e))?;
            None
        }
    };

    if let Some(path) = stylesheet {
        let shown = display_relative(project_dir, &path);
        let directives = TailwindDirectives::for_major(detect::tailwind_major(project_dir));

        match styles::inject_directives(&path, directives).await {
            Ok(outcome) => {
                log_patch(&format!("Tailwind directives in {}", shown), outcome)?;
                if outcome.changed() {
                    report.touched(path.clone());
                }
            }
            Err(e) => report.warn(format!("Could not add Tailwind directives: {:#}", e))?,
        }

        match styles::inject_tokens(&path).await {
            Ok(outcome) => {
                log_patch(&format!("Design tokens in {}", shown), outcome)?;
                if outcome.changed() {
                    report.touched(path.clone());
                }
            }
            Err(e) => report.warn(format!("Could not add design tokens: {:#}", e))?,
        }
    }

    match styles::patch_build_config(project_dir, &config.components_dir).await {
        Ok(patch) => {
            let shown = display_relative(project_dir, &patch.path);
            match patch.outcome {
                PatchOutcome::Unpatchable => report.warn(format!(
                    "Could not patch {}. Add \"{}\" to its content array.",
                    shown,
                    styles::build_config::component_glob(&config.components_dir)
                ))?,
                outcome => {
                    log_patch(&shown, outcome)?;
                    if outcome.changed() {
                        report.touched(patch.path);
                    }
                }
            }
        }
        Err(e) => report.warn(format!("Could not update the Tailwind config: {:#}", e))?,
    }

    Ok(())
}

fn log_patch(what: &str, outcome: PatchOutcome) -> Result<()> {
    match outcome {
        PatchOutcome::Created => cliclack::log::success(format!("Created {}", what))?,
        PatchOutcome::Patched => cliclack::log::success(format!("Updated {}", what))?,
        PatchOutcome::Unchanged => cliclack::log::info(format!("{} already set up", what))?,
        PatchOutcome::Unpatchable => cliclack::log::warning(format!("Left {} unchanged", what))?,
    }
    Ok(())
}
