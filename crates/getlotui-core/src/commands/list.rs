//! `list`: which known components have templates

use crate::config::ProjectConfig;
use crate::detect::Adapter;
use crate::templates::{TemplateFetcher, KNOWN_COMPONENTS};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Adapters that ship templates
const TEMPLATE_ADAPTERS: [Adapter; 3] = [Adapter::Web, Adapter::Expo, Adapter::Flutter];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentAvailability {
    pub component: &'static str,
    pub adapters: Vec<Adapter>,
}

/// Known components and the adapters with a template for each
///
/// In an initialized project only the configured adapter is checked.
pub async fn run_list(project_dir: &Path, fetcher: &TemplateFetcher) -> Result<Vec<ComponentAvailability>> {
    let adapters: Vec<Adapter> = match ProjectConfig::load(project_dir).await {
        Ok(config) => vec![config.adapter],
        Err(_) => TEMPLATE_ADAPTERS.to_vec(),
    };

    let mut listing = Vec::new();
    for &component in KNOWN_COMPONENTS {
        let mut available = Vec::new();
        for adapter in &adapters {
            if fetcher.has_component(*adapter, component).await {
                available.push(*adapter);
            }
        }
        listing.push(ComponentAvailability {
            component,
            adapters: available,
        });
    }

    let lines: Vec<String> = listing
        .iter()
        .map(|entry| {
            if entry.adapters.is_empty() {
                format!("{} {}", entry.component.dimmed(), "(no template)".dimmed())
            } else {
                let names: Vec<&str> = entry.adapters.iter().map(|a| a.as_str()).collect();
                format!("{} {}", entry.component.green(), names.join(", ").dimmed())
            }
        })
        .collect();
    cliclack::log::info(format!("Components:\n{}", lines.join("\n")))?;

    Ok(listing)
}
