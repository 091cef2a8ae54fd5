//! Writing component templates into a project

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write template `content` to `target_dir/file_name`, replacing any existing file
pub async fn copy_component(content: &[u8], target_dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let target_path = target_dir.join(file_name);
    fs::write(&target_path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

    tracing::debug!("Copied {} bytes to {}", content.len(), target_path.display());
    Ok(target_path)
}
