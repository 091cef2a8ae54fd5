//! Persisted project configuration (`getlotui.config.json`)

use crate::detect::{Adapter, Detection, PackageManager};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the project config, written to the project root
pub const CONFIG_FILE_NAME: &str = "getlotui.config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} not found. Run `getlotui init` first.", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Settings recorded by `init` and read by `add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub adapter: Adapter,
    pub package_manager: PackageManager,
    pub components_dir: String,
    pub theme_dir: String,
}

impl ProjectConfig {
    /// Config with the adapter's conventional directories
    pub fn from_detection(detection: Detection) -> Self {
        Self {
            adapter: detection.adapter,
            package_manager: detection.package_manager,
            components_dir: detection.adapter.default_components_dir().to_string(),
            theme_dir: detection.adapter.default_theme_dir().to_string(),
        }
    }

    pub fn path_in(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    pub fn exists_in(project_dir: &Path) -> bool {
        Self::path_in(project_dir).is_file()
    }

    pub async fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(project_dir);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path));
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub async fn save(&self, project_dir: &Path) -> Result<PathBuf, ConfigError> {
        let path = Self::path_in(project_dir);
        let mut content = serde_json::to_string_pretty(self).map_err(|source| {
            ConfigError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        content.push('\n');
        tokio::fs::write(&path, content)
            .await
            .map_err(|source| ConfigError::Write {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    /// Absolute components directory for a project rooted at `project_dir`
    pub fn components_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.components_dir)
    }
}
