//! Target platform and package manager types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform family a project is scaffolded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adapter {
    Expo,
    Flutter,
    Web,
    Unknown,
}

impl Adapter {
    /// Name used in the config file and as the template subdirectory
    pub fn as_str(&self) -> &'static str {
        match self {
            Adapter::Expo => "expo",
            Adapter::Flutter => "flutter",
            Adapter::Web => "web",
            Adapter::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Adapter::Expo => "Expo / React Native",
            Adapter::Flutter => "Flutter",
            Adapter::Web => "Web (React + Tailwind)",
            Adapter::Unknown => "Unknown",
        }
    }

    /// Extension of component templates for this adapter
    pub fn template_extension(&self) -> &'static str {
        match self {
            Adapter::Flutter => "dart",
            _ => "tsx",
        }
    }

    /// Default directory components are copied into
    pub fn default_components_dir(&self) -> &'static str {
        match self {
            Adapter::Flutter => "lib/components",
            _ => "components/ui",
        }
    }

    /// Default directory for the generated theme file
    pub fn default_theme_dir(&self) -> &'static str {
        match self {
            Adapter::Flutter => "lib/theme",
            _ => "theme",
        }
    }
}

impl fmt::Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// JavaScript package manager, picked from the lockfile in the project root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Lockfile whose presence selects this manager
    pub fn lockfile(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Bun => "bun.lockb",
        }
    }

    /// Executable name, with the Windows shim suffix where one is needed
    pub fn binary(&self) -> String {
        if cfg!(windows) {
            let suffix = match self {
                PackageManager::Bun => "exe",
                _ => "cmd",
            };
            format!("{}.{}", self.as_str(), suffix)
        } else {
            self.as_str().to_string()
        }
    }

    /// Arguments for adding `packages` to the project
    ///
    /// npm gets flags that silence audit, funding and progress noise; the
    /// other managers take a plain `add`.
    pub fn install_args(&self, packages: &[String]) -> Vec<String> {
        let mut args = match self {
            PackageManager::Npm => vec!["install".to_string()],
            _ => vec!["add".to_string()],
        };
        args.extend(packages.iter().cloned());
        if matches!(self, PackageManager::Npm) {
            args.extend(
                ["--no-audit", "--no-fund", "--loglevel=error"]
                    .iter()
                    .map(|s| s.to_string()),
            );
        }
        args
    }

    /// Command a user can paste to retry an install by hand
    pub fn manual_command(&self, packages: &[String]) -> String {
        let verb = match self {
            PackageManager::Npm => "install",
            _ => "add",
        };
        format!("{} {} {}", self.as_str(), verb, packages.join(" "))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
