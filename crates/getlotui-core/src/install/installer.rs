//! Package installation through the project's package manager
//!
//! Installs never return an error. Launch failures and non-zero exits become
//! `InstallOutcome::Failed` with filtered stderr and a command to retry by hand.

use crate::detect::PackageManager;
use colored::Colorize;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Most stderr lines surfaced on failure
const MAX_DIAGNOSTIC_LINES: usize = 12;

/// Prefixes of routine stderr lines that are not worth showing
const NOISE_PREFIXES: &[&str] = &["npm warn", "npm notice", "warn", "warning", "notice"];

/// Result of an install attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    Failed {
        diagnostics: Vec<String>,
        retry_command: String,
    },
    /// Installation was not attempted
    Skipped { retry_command: String },
}

impl InstallOutcome {
    pub fn success(&self) -> bool {
        matches!(self, InstallOutcome::Installed)
    }
}

/// Something that can add packages to a project
#[allow(async_fn_in_trait)]
pub trait PackageInstaller {
    async fn install(
        &self,
        packages: &[String],
        cwd: &Path,
        package_manager: PackageManager,
    ) -> InstallOutcome;
}

/// Runs the package manager as a child process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInstaller;

impl PackageInstaller for SystemInstaller {
    async fn install(
        &self,
        packages: &[String],
        cwd: &Path,
        package_manager: PackageManager,
    ) -> InstallOutcome {
        if packages.is_empty() {
            return InstallOutcome::Installed;
        }
        let binary = package_manager.binary();
        run_package_manager(OsStr::new(&binary), packages, cwd, package_manager).await
    }
}

/// Spawn `program` with the install arguments of `package_manager`
async fn run_package_manager(
    program: &OsStr,
    packages: &[String],
    cwd: &Path,
    package_manager: PackageManager,
) -> InstallOutcome {
    let retry_command = package_manager.manual_command(packages);
    let binary = program.to_string_lossy();
    let args = package_manager.install_args(packages);
    tracing::debug!("Running {} {} in {}", binary, args.join(" "), cwd.display());

    let spinner = cliclack::spinner();
    spinner.start(format!(
        "Installing {} with {}...",
        packages.join(", "),
        package_manager
    ));

    // Spawned directly, never through a shell
    let output = TokioCommand::new(program)
        .args(&args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await;

    let outcome = match output {
        Ok(out) if out.status.success() => {
            spinner.stop(format!("Installed {}", packages.join(", ")));
            InstallOutcome::Installed
        }
        Ok(out) => {
            spinner.error(format!(
                "{} exited with code {}",
                package_manager,
                out.status.code().unwrap_or(-1)
            ));
            InstallOutcome::Failed {
                diagnostics: filter_stderr(&String::from_utf8_lossy(&out.stderr)),
                retry_command,
            }
        }
        Err(e) => {
            spinner.error(format!("Could not run {}", binary));
            InstallOutcome::Failed {
                diagnostics: vec![format!("Failed to run {}: {}", binary, e)],
                retry_command,
            }
        }
    };

    report_failure(&outcome);
    outcome
}

/// Reports the command instead of running it
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipInstaller;

impl PackageInstaller for SkipInstaller {
    async fn install(
        &self,
        packages: &[String],
        _cwd: &Path,
        package_manager: PackageManager,
    ) -> InstallOutcome {
        if packages.is_empty() {
            return InstallOutcome::Installed;
        }
        let retry_command = package_manager.manual_command(packages);
        let _ = cliclack::log::info(format!(
            "Skipping install. Run it yourself: {}",
            retry_command.yellow()
        ));
        InstallOutcome::Skipped { retry_command }
    }
}

/// Stderr lines worth showing, without warnings, notices and funding chatter
pub fn filter_stderr(stderr: &str) -> Vec<String> {
    let lines: Vec<String> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let lower = line.to_lowercase();
            !NOISE_PREFIXES.iter().any(|p| lower.starts_with(p)) && !lower.contains("fund")
        })
        .map(str::to_string)
        .collect();

    let skip = lines.len().saturating_sub(MAX_DIAGNOSTIC_LINES);
    lines.into_iter().skip(skip).collect()
}

fn report_failure(outcome: &InstallOutcome) {
    if let InstallOutcome::Failed {
        diagnostics,
        retry_command,
    } = outcome
    {
        let mut message = String::from("Package installation failed.");
        for line in diagnostics {
            message.push_str(&format!("\n  {}", line.dimmed()));
        }
        message.push_str(&format!("\nInstall manually with: {}", retry_command.yellow()));
        let _ = cliclack::log::warning(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_drops_noise() {
        let stderr = "\
npm WARN deprecated inflight@1.0.6: leaks memory
npm notice New major version of npm available!
warning package.json: No license field

npm ERR! code E404
npm ERR! 404 Not Found - GET https://registry.npmjs.org/@nope%2fpkg
3 packages are looking for funding
";
        let lines = filter_stderr(stderr);
        assert_eq!(
            lines,
            vec![
                "npm ERR! code E404",
                "npm ERR! 404 Not Found - GET https://registry.npmjs.org/@nope%2fpkg",
            ]
        );
    }

    #[test]
    fn test_filter_keeps_tail() {
        let stderr: String = (0..30).map(|i| format!("error line {}\n", i)).collect();
        let lines = filter_stderr(&stderr);
        assert_eq!(lines.len(), MAX_DIAGNOSTIC_LINES);
        assert_eq!(lines.last().unwrap(), "error line 29");
    }

    #[tokio::test]
    async fn test_empty_package_list_is_noop() {
        let outcome = SystemInstaller
            .install(&[], Path::new("."), PackageManager::Npm)
            .await;
        assert!(outcome.success());
    }

    #[tokio::test]
    async fn test_spawn_failure_is_reported() {
        // A nonexistent working directory makes the spawn fail
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let outcome = SystemInstaller
            .install(&["clsx".to_string()], &missing, PackageManager::Pnpm)
            .await;
        match outcome {
            InstallOutcome::Failed { retry_command, .. } => {
                assert_eq!(retry_command, "pnpm add clsx");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_reported() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("pnpm");
        std::fs::write(
            &script,
            "#!/bin/sh\necho 'WARN  deprecated subdependency' >&2\necho 'ERR_PNPM_FETCH_404 GET https://registry.npmjs.org/nope: Not Found' >&2\nexit 1\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let outcome = run_package_manager(
            script.as_os_str(),
            &["nope".to_string()],
            dir.path(),
            PackageManager::Pnpm,
        )
        .await;

        assert_eq!(
            outcome,
            InstallOutcome::Failed {
                diagnostics: vec![
                    "ERR_PNPM_FETCH_404 GET https://registry.npmjs.org/nope: Not Found".to_string()
                ],
                retry_command: "pnpm add nope".to_string(),
            }
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_is_installed() {
        let dir = tempfile::TempDir::new().unwrap();
        let outcome = run_package_manager(
            OsStr::new("true"),
            &["clsx".to_string()],
            dir.path(),
            PackageManager::Npm,
        )
        .await;
        assert!(outcome.success());
    }

    #[tokio::test]
    async fn test_skip_installer_reports_command() {
        let outcome = SkipInstaller
            .install(&["clsx".to_string()], Path::new("."), PackageManager::Yarn)
            .await;
        assert_eq!(
            outcome,
            InstallOutcome::Skipped {
                retry_command: "yarn add clsx".to_string()
            }
        );
    }
}
