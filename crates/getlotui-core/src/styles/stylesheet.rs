//! Global stylesheet: locating it and injecting Tailwind directives and design tokens

use super::PatchOutcome;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Conventional stylesheet locations, searched in order
pub const STYLESHEET_CANDIDATES: &[&str] = &[
    "app/globals.css",
    "src/app/globals.css",
    "styles/globals.css",
    "src/styles/globals.css",
    "src/index.css",
    "src/globals.css",
    "global.css",
];

/// Created when no candidate exists
pub const DEFAULT_STYLESHEET: &str = "app/globals.css";

/// Comment that opens the token block and marks it as present
pub const TOKEN_MARKER: &str = "/* getlotui design tokens */";

const TAILWIND_V3_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";
const TAILWIND_V4_DIRECTIVES: &str = "@import \"tailwindcss\";\n";

/// Either form counts as "directives present"
const DIRECTIVE_MARKERS: &[&str] = &[
    "@tailwind base",
    "@import \"tailwindcss\"",
    "@import 'tailwindcss'",
];

const TOKEN_BLOCK: &str = r#"/* getlotui design tokens */
@layer base {
  :root {
    --background: 0 0% 100%;
    --foreground: 222 47% 11%;
    --primary: 239 84% 67%;
    --primary-foreground: 0 0% 100%;
    --secondary: 210 40% 96%;
    --secondary-foreground: 222 47% 11%;
    --muted: 210 40% 96%;
    --muted-foreground: 215 16% 47%;
    --border: 214 32% 91%;
    --destructive: 0 84% 60%;
    --radius: 0.5rem;
  }

  .dark {
    --background: 222 47% 11%;
    --foreground: 210 40% 98%;
    --primary: 239 84% 67%;
    --primary-foreground: 0 0% 100%;
    --secondary: 217 33% 17%;
    --secondary-foreground: 210 40% 98%;
    --muted: 217 33% 17%;
    --muted-foreground: 215 20% 65%;
    --border: 217 33% 17%;
    --destructive: 0 63% 31%;
  }
}
"#;

/// Tailwind directive syntax to inject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailwindDirectives {
    /// `@tailwind base; @tailwind components; @tailwind utilities;`
    #[default]
    V3,
    /// `@import "tailwindcss";`
    V4,
}

impl TailwindDirectives {
    /// Directive form for the `tailwindcss` major version, when known
    pub fn for_major(major: Option<u64>) -> Self {
        match major {
            Some(m) if m >= 4 => Self::V4,
            _ => Self::V3,
        }
    }

    pub fn block(&self) -> &'static str {
        match self {
            Self::V3 => TAILWIND_V3_DIRECTIVES,
            Self::V4 => TAILWIND_V4_DIRECTIVES,
        }
    }
}

pub fn has_directives(content: &str) -> bool {
    DIRECTIVE_MARKERS.iter().any(|m| content.contains(m))
}

pub fn has_tokens(content: &str) -> bool {
    content.contains(TOKEN_MARKER)
}

/// `content` with the directive block prepended, or `None` if already present
pub fn with_directives(content: &str, directives: TailwindDirectives) -> Option<String> {
    if has_directives(content) {
        return None;
    }
    let block = directives.block();
    if content.is_empty() {
        Some(block.to_string())
    } else {
        Some(format!("{}\n{}", block, content))
    }
}

/// `content` with the token block appended, or `None` if already present
pub fn with_tokens(content: &str) -> Option<String> {
    if has_tokens(content) {
        return None;
    }
    let mut patched = content.to_string();
    if !patched.is_empty() {
        if !patched.ends_with('\n') {
            patched.push('\n');
        }
        patched.push('\n');
    }
    patched.push_str(TOKEN_BLOCK);
    Some(patched)
}

/// Find the project's global stylesheet, creating an empty one if none exists
pub async fn locate_or_create(project_dir: &Path) -> Result<(PathBuf, PatchOutcome)> {
    if let Some(found) = STYLESHEET_CANDIDATES
        .iter()
        .map(|rel| project_dir.join(rel))
        .find(|path| path.is_file())
    {
        tracing::debug!("Using stylesheet {}", found.display());
        return Ok((found, PatchOutcome::Unchanged));
    }

    let path = project_dir.join(DEFAULT_STYLESHEET);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, "")
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;
    Ok((path, PatchOutcome::Created))
}

/// Prepend the Tailwind directives to the stylesheet unless present
pub async fn inject_directives(path: &Path, directives: TailwindDirectives) -> Result<PatchOutcome> {
    rewrite(path, |content| with_directives(content, directives)).await
}

/// Append the design tokens to the stylesheet unless present
pub async fn inject_tokens(path: &Path) -> Result<PatchOutcome> {
    rewrite(path, with_tokens).await
}

async fn rewrite<F>(path: &Path, patch: F) -> Result<PatchOutcome>
where
    F: FnOnce(&str) -> Option<String>,
{
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    match patch(&content) {
        Some(patched) => {
            fs::write(path, patched)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(PatchOutcome::Patched)
        }
        None => Ok(PatchOutcome::Unchanged),
    }
}
