//! Template fetching from the embedded templates, a local directory or a remote base URL
//!
//! Templates live at `<root>/<adapter>/<Component>.<ext>`. A missing template
//! is reported as `None`, never as an error.

use super::catalog::template_file_name;
use crate::detect::Adapter;
use anyhow::{Context, Result};
use include_dir::{include_dir, Dir};
use std::path::PathBuf;
use tokio::fs;
use url::Url;

/// Env var pointing at a local templates directory
pub const TEMPLATE_DIR_ENV: &str = "GETLOTUI_TEMPLATE_DIR";

/// Env var pointing at a remote templates base URL
pub const TEMPLATE_URL_ENV: &str = "GETLOTUI_TEMPLATE_URL";

const USER_AGENT: &str = concat!("getlotui/", env!("CARGO_PKG_VERSION"));

/// Templates compiled into the binary
static BUNDLED: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Template source - embedded templates, remote URL or local directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Bundled,
    Remote(Url),
    Local(PathBuf),
}

impl TemplateSource {
    /// Templates shipped inside the binary
    pub fn bundled() -> Self {
        Self::Bundled
    }

    /// Pick a source: explicit directory, then env overrides, then bundled
    pub fn resolve(template_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = template_dir {
            return Ok(Self::Local(path));
        }
        if let Ok(path) = std::env::var(TEMPLATE_DIR_ENV) {
            return Ok(Self::Local(PathBuf::from(path)));
        }
        if let Ok(url_str) = std::env::var(TEMPLATE_URL_ENV) {
            let url = Url::parse(&url_str)
                .with_context(|| format!("Invalid template URL: {}", url_str))?;
            return Ok(Self::Remote(url));
        }
        Ok(Self::bundled())
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Bundled => "bundled templates".to_string(),
            Self::Remote(url) => url.to_string(),
            Self::Local(path) => path.display().to_string(),
        }
    }
}

/// Template fetcher - reads component templates from a `TemplateSource`
pub struct TemplateFetcher {
    source: TemplateSource,
    client: reqwest::Client,
}

impl TemplateFetcher {
    pub fn new(source: TemplateSource) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Build a URL by appending path segments, preserving query parameters
    fn build_url(base: &Url, segments: &[&str]) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch a component template, or `None` if this adapter has no such template
    pub async fn fetch_component(
        &self,
        adapter: Adapter,
        component: &str,
    ) -> Result<Option<Vec<u8>>> {
        let file_name = template_file_name(adapter, component);

        match &self.source {
            TemplateSource::Bundled => {
                let path = format!("{}/{}", adapter.as_str(), file_name);
                tracing::debug!("Reading bundled template {}", path);
                Ok(BUNDLED.get_file(&path).map(|file| file.contents().to_vec()))
            }
            TemplateSource::Remote(base_url) => {
                let url = Self::build_url(base_url, &[adapter.as_str(), &file_name])?;
                tracing::debug!("Fetching template {}", url);
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch template from {}", url))?;

                if response.status() == reqwest::StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch template from {}: HTTP {}",
                        url,
                        response.status()
                    );
                }

                Ok(Some(response.bytes().await?.to_vec()))
            }
            TemplateSource::Local(root) => {
                let path = root.join(adapter.as_str()).join(&file_name);
                tracing::debug!("Reading template {}", path.display());
                if !path.is_file() {
                    return Ok(None);
                }
                let content = fs::read(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                Ok(Some(content))
            }
        }
    }

    /// Whether a template exists for the component
    pub async fn has_component(&self, adapter: Adapter, component: &str) -> bool {
        match &self.source {
            TemplateSource::Bundled => BUNDLED
                .get_file(format!(
                    "{}/{}",
                    adapter.as_str(),
                    template_file_name(adapter, component)
                ))
                .is_some(),
            TemplateSource::Local(root) => root
                .join(adapter.as_str())
                .join(template_file_name(adapter, component))
                .is_file(),
            TemplateSource::Remote(_) => matches!(
                self.fetch_component(adapter, component).await,
                Ok(Some(_))
            ),
        }
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_url_appends_segments() {
        let base = Url::parse("https://example.com/templates/").unwrap();
        let url = TemplateFetcher::build_url(&base, &["web", "Button.tsx"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/templates/web/Button.tsx");
    }

    #[test]
    fn test_build_url_preserves_query() {
        let base = Url::parse("https://example.com/templates?ref=main").unwrap();
        let url = TemplateFetcher::build_url(&base, &["flutter", "Card.dart"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/templates/flutter/Card.dart?ref=main"
        );
    }

    #[test]
    fn test_explicit_dir_wins() {
        let source = TemplateSource::resolve(Some(PathBuf::from("/tmp/tpl"))).unwrap();
        assert_eq!(source, TemplateSource::Local(PathBuf::from("/tmp/tpl")));
    }

    #[tokio::test]
    async fn test_local_fetch() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("web")).unwrap();
        std::fs::write(root.path().join("web/Button.tsx"), "export {}").unwrap();

        let fetcher = TemplateFetcher::new(TemplateSource::Local(root.path().to_path_buf()));
        let content = fetcher.fetch_component(Adapter::Web, "Button").await.unwrap();
        assert_eq!(content.as_deref(), Some(b"export {}".as_slice()));
        assert!(fetcher.has_component(Adapter::Web, "Button").await);

        assert!(fetcher
            .fetch_component(Adapter::Flutter, "Button")
            .await
            .unwrap()
            .is_none());
        assert!(!fetcher.has_component(Adapter::Web, "Missing").await);
    }

    #[tokio::test]
    async fn test_bundled_templates_cover_known_components() {
        let fetcher = TemplateFetcher::new(TemplateSource::bundled());
        for component in crate::templates::KNOWN_COMPONENTS {
            assert!(
                fetcher.has_component(Adapter::Web, component).await,
                "missing web template for {}",
                component
            );
        }
        for component in ["Button", "Card", "Input", "Badge"] {
            assert!(fetcher.has_component(Adapter::Expo, component).await);
            assert!(fetcher.has_component(Adapter::Flutter, component).await);
        }
    }

    #[tokio::test]
    async fn test_bundled_templates_are_embedded() {
        let source = TemplateSource::bundled();
        assert_eq!(source, TemplateSource::Bundled);

        let fetcher = TemplateFetcher::new(source);
        let button = fetcher
            .fetch_component(Adapter::Web, "Button")
            .await
            .unwrap()
            .unwrap();
        assert!(String::from_utf8(button).unwrap().contains("Button"));

        let card = fetcher
            .fetch_component(Adapter::Flutter, "Card")
            .await
            .unwrap()
            .unwrap();
        assert!(!card.is_empty());

        assert!(fetcher
            .fetch_component(Adapter::Unknown, "Button")
            .await
            .unwrap()
            .is_none());
        assert!(!fetcher.has_component(Adapter::Expo, "Dialog").await);
    }
}
