//! Project detection from marker files in the working directory
//!
//! Detection never fails: unreadable or malformed files count as an absent signal.

use super::adapter::{Adapter, PackageManager};
use semver::VersionReq;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Expo app config files, any of which marks an Expo project
const EXPO_CONFIG_FILES: &[&str] = &["app.json", "app.config.js", "app.config.ts"];

/// Web build-tool config files
const WEB_CONFIG_FILES: &[&str] = &[
    "next.config.js",
    "next.config.mjs",
    "next.config.ts",
    "vite.config.js",
    "vite.config.mjs",
    "vite.config.ts",
    "tailwind.config.js",
    "tailwind.config.ts",
];

/// Dependencies that mark a web project
const WEB_DEPENDENCIES: &[&str] = &["next", "react-dom", "vite"];

/// Lockfiles in priority order; the first one present wins
const LOCKFILE_PRIORITY: &[PackageManager] = &[
    PackageManager::Pnpm,
    PackageManager::Yarn,
    PackageManager::Bun,
];

/// Result of inspecting a project directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub adapter: Adapter,
    pub package_manager: PackageManager,
}

/// The parts of `package.json` detection cares about
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    #[serde(default)]
    pub dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
}

impl PackageJson {
    /// Read `package.json` from `dir`, or `None` if missing or malformed
    pub fn read(dir: &Path) -> Option<Self> {
        let path = dir.join("package.json");
        let content = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(pkg) => Some(pkg),
            Err(e) => {
                tracing::debug!("Ignoring malformed {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Version requirement string for a dependency, if it is a string
    pub fn dependency_version(&self, name: &str) -> Option<&str> {
        self.dependencies
            .get(name)
            .or_else(|| self.dev_dependencies.get(name))
            .and_then(|v| v.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct Pubspec {
    name: Option<String>,
}

/// Inspect `dir` and classify the project
pub fn detect(dir: &Path) -> Detection {
    let detection = Detection {
        adapter: detect_adapter(dir),
        package_manager: detect_package_manager(dir),
    };
    tracing::debug!(
        "Detected adapter={} package_manager={} in {}",
        detection.adapter,
        detection.package_manager,
        dir.display()
    );
    detection
}

/// Classify the project as expo, flutter, web or unknown
pub fn detect_adapter(dir: &Path) -> Adapter {
    let package_json = PackageJson::read(dir);

    let expo_dependency = package_json
        .as_ref()
        .is_some_and(|pkg| pkg.has_dependency("expo"));
    if expo_dependency || any_exists(dir, EXPO_CONFIG_FILES) {
        return Adapter::Expo;
    }

    if dir.join("pubspec.yaml").is_file() {
        return Adapter::Flutter;
    }

    let web_dependency = package_json
        .as_ref()
        .is_some_and(|pkg| WEB_DEPENDENCIES.iter().any(|dep| pkg.has_dependency(dep)));
    if web_dependency || any_exists(dir, WEB_CONFIG_FILES) {
        return Adapter::Web;
    }

    Adapter::Unknown
}

/// Pick the package manager from lockfile presence, defaulting to npm
pub fn detect_package_manager(dir: &Path) -> PackageManager {
    LOCKFILE_PRIORITY
        .iter()
        .copied()
        .find(|pm| dir.join(pm.lockfile()).exists())
        .unwrap_or_default()
}

/// Major version of `tailwindcss` required by `package.json`, if it can be read
pub fn tailwind_major(dir: &Path) -> Option<u64> {
    let pkg = PackageJson::read(dir)?;
    let raw = pkg.dependency_version("tailwindcss")?;
    let req = VersionReq::parse(raw.trim()).ok()?;
    req.comparators.first().map(|c| c.major)
}

/// Dart package name from `pubspec.yaml`
pub fn flutter_package_name(dir: &Path) -> Option<String> {
    let content = std::fs::read_to_string(dir.join("pubspec.yaml")).ok()?;
    let pubspec: Pubspec = serde_yaml::from_str(&content).ok()?;
    pubspec.name
}

fn any_exists(dir: &Path, names: &[&str]) -> bool {
    names.iter().any(|name| dir.join(name).exists())
}
