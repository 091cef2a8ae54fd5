//! Tailwind config: make sure its `content` globs cover the components directory

use super::PatchOutcome;
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::fs;

/// Start of the `content` array in a Tailwind config
static CONTENT_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bcontent\s*:\s*\[").expect("valid content array regex"));

/// Config file names, tried in order
pub const BUILD_CONFIG_CANDIDATES: &[&str] = &[
    "tailwind.config.ts",
    "tailwind.config.js",
    "tailwind.config.mjs",
    "tailwind.config.cjs",
];

/// Written when no candidate exists
pub const DEFAULT_BUILD_CONFIG: &str = "tailwind.config.js";

/// Result of patching the build config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfigPatch {
    pub path: PathBuf,
    pub outcome: PatchOutcome,
}

/// `./components/ui/**/*.{js,ts,jsx,tsx}` for `components/ui`
pub fn component_glob(components_dir: &str) -> String {
    format!("{}/**/*.{{js,ts,jsx,tsx}}", component_dir_ref(components_dir))
}

fn component_dir_ref(components_dir: &str) -> String {
    let dir = components_dir
        .trim_start_matches("./")
        .trim_matches('/');
    format!("./{}", dir)
}

/// Whether the config already references the components directory
///
/// The reference must end at a path separator, a quote or the end of the
/// text, so `./components/ui-legacy` does not count for `components/ui`.
pub fn references_components(content: &str, components_dir: &str) -> bool {
    let dir_ref = component_dir_ref(components_dir);
    content.match_indices(&dir_ref).any(|(start, _)| {
        matches!(
            content[start + dir_ref.len()..].chars().next(),
            None | Some('/' | '"' | '\'' | '`')
        )
    })
}

/// Insert the component glob at the start of the `content` array
///
/// Returns `None` when no `content: [` declaration can be found.
pub fn insert_component_glob(content: &str, components_dir: &str) -> Option<String> {
    if !CONTENT_ARRAY.is_match(content) {
        return None;
    }
    let glob = component_glob(components_dir);
    let patched = CONTENT_ARRAY.replacen(content, 1, |caps: &Captures| {
        format!("{}\n    \"{}\",", &caps[0], glob)
    });
    Some(patched.into_owned())
}

/// Complete config used when the project has none
pub fn default_config(components_dir: &str) -> String {
    format!(
        r#"/** @type {{import('tailwindcss').Config}} */
module.exports = {{
  darkMode: ["class"],
  content: [
    "./app/**/*.{{js,ts,jsx,tsx,mdx}}",
    "./pages/**/*.{{js,ts,jsx,tsx,mdx}}",
    "./src/**/*.{{js,ts,jsx,tsx,mdx}}",
    "{glob}",
  ],
  theme: {{
    extend: {{
      colors: {{
        border: "hsl(var(--border))",
        background: "hsl(var(--background))",
        foreground: "hsl(var(--foreground))",
        primary: {{
          DEFAULT: "hsl(var(--primary))",
          foreground: "hsl(var(--primary-foreground))",
        }},
        secondary: {{
          DEFAULT: "hsl(var(--secondary))",
          foreground: "hsl(var(--secondary-foreground))",
        }},
        muted: {{
          DEFAULT: "hsl(var(--muted))",
          foreground: "hsl(var(--muted-foreground))",
        }},
        destructive: "hsl(var(--destructive))",
      }},
      borderRadius: {{
        lg: "var(--radius)",
        md: "calc(var(--radius) - 2px)",
        sm: "calc(var(--radius) - 4px)",
      }},
    }},
  }},
  plugins: [],
}};
"#,
        glob = component_glob(components_dir)
    )
}

/// Ensure the build config covers `components_dir`, creating it if missing
pub async fn patch_build_config(project_dir: &Path, components_dir: &str) -> Result<BuildConfigPatch> {
    let existing = BUILD_CONFIG_CANDIDATES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|path| path.is_file());

    let Some(path) = existing else {
        let path = project_dir.join(DEFAULT_BUILD_CONFIG);
        fs::write(&path, default_config(components_dir))
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        return Ok(BuildConfigPatch {
            path,
            outcome: PatchOutcome::Created,
        });
    };

    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if references_components(&content, components_dir) {
        return Ok(BuildConfigPatch {
            path,
            outcome: PatchOutcome::Unchanged,
        });
    }

    let outcome = match insert_component_glob(&content, components_dir) {
        Some(patched) => {
            fs::write(&path, patched)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            PatchOutcome::Patched
        }
        None => {
            tracing::debug!("No content array found in {}", path.display());
            PatchOutcome::Unpatchable
        }
    };

    Ok(BuildConfigPatch { path, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EXISTING: &str = r#"import type { Config } from "tailwindcss";

export default {
  content: ["./src/**/*.{ts,tsx}"],
  plugins: [],
} satisfies Config;
"#;

    #[test]
    fn test_component_glob_normalizes_dir() {
        assert_eq!(
            component_glob("components/ui"),
            "./components/ui/**/*.{js,ts,jsx,tsx}"
        );
        assert_eq!(component_glob("./components/ui/"), component_glob("components/ui"));
    }

    #[test]
    fn test_insert_into_content_array() {
        let patched = insert_component_glob(EXISTING, "components/ui").unwrap();
        assert!(patched.contains("content: [\n    \"./components/ui/**/*.{js,ts,jsx,tsx}\","));
        assert!(patched.contains("\"./src/**/*.{ts,tsx}\"]"));
        assert_eq!(patched.matches("./components/ui").count(), 1);
    }

    #[test]
    fn test_insert_without_content_array() {
        assert!(insert_component_glob("module.exports = {}", "components/ui").is_none());
    }

    #[test]
    fn test_content_key_needs_word_boundary() {
        let config = "module.exports = { textcontent: [\"a\"] };\n";
        assert!(insert_component_glob(config, "components/ui").is_none());
    }

    #[test]
    fn test_sibling_dir_is_not_a_reference() {
        let config = r#"module.exports = { content: ["./components/ui-legacy/**/*.tsx"] };"#;
        assert!(!references_components(config, "components/ui"));
        assert!(references_components(
            r#"content: ["./components/ui/**/*.tsx"]"#,
            "components/ui"
        ));
        assert!(references_components(r#"content: ['./components/ui']"#, "components/ui"));
    }

    #[tokio::test]
    async fn test_sibling_dir_config_gets_glob() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tailwind.config.js");
        std::fs::write(
            &path,
            "module.exports = {\n  content: [\"./components/ui-legacy/**/*.tsx\"],\n};\n",
        )
        .unwrap();

        let patch = patch_build_config(dir.path(), "components/ui").await.unwrap();
        assert_eq!(patch.outcome, PatchOutcome::Patched);
        let patched = std::fs::read_to_string(&path).unwrap();
        assert!(patched.contains(&component_glob("components/ui")));
        assert!(patched.contains("./components/ui-legacy/**/*.tsx"));
    }

    #[test]
    fn test_default_config_references_components() {
        let config = default_config("components/ui");
        assert!(references_components(&config, "components/ui"));
        assert!(config.contains("module.exports"));
    }

    #[tokio::test]
    async fn test_creates_default_when_missing() {
        let dir = TempDir::new().unwrap();
        let patch = patch_build_config(dir.path(), "components/ui").await.unwrap();
        assert_eq!(patch.outcome, PatchOutcome::Created);
        assert_eq!(patch.path, dir.path().join(DEFAULT_BUILD_CONFIG));
    }

    #[tokio::test]
    async fn test_patches_existing_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tailwind.config.ts");
        std::fs::write(&path, EXISTING).unwrap();

        let first = patch_build_config(dir.path(), "components/ui").await.unwrap();
        assert_eq!(first.outcome, PatchOutcome::Patched);
        let after_first = std::fs::read(&path).unwrap();

        let second = patch_build_config(dir.path(), "components/ui").await.unwrap();
        assert_eq!(second.outcome, PatchOutcome::Unchanged);
        assert_eq!(std::fs::read(&path).unwrap(), after_first);
    }

    #[tokio::test]
    async fn test_already_configured_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tailwind.config.js");
        let config = default_config("components/ui");
        std::fs::write(&path, &config).unwrap();

        let patch = patch_build_config(dir.path(), "components/ui").await.unwrap();
        assert_eq!(patch.outcome, PatchOutcome::Unchanged);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), config);
    }

    #[tokio::test]
    async fn test_unrecognized_structure_left_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tailwind.config.js");
        let original = "const shared = require('./shared');\nmodule.exports = shared;\n";
        std::fs::write(&path, original).unwrap();

        let patch = patch_build_config(dir.path(), "components/ui").await.unwrap();
        assert_eq!(patch.outcome, PatchOutcome::Unpatchable);
        assert!(!patch.outcome.changed());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }
}
