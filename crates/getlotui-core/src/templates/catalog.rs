//! Known components and component name handling

use crate::detect::Adapter;

/// Components shown when a requested template does not exist
pub const KNOWN_COMPONENTS: &[&str] = &[
    "Button", "Card", "Input", "Badge", "Dialog", "Checkbox", "Switch",
];

/// Capitalize the first character of a component name
///
/// Only the first character changes: `alert-dialog` becomes `Alert-dialog`,
/// not `AlertDialog`.
pub fn normalize_component_name(name: &str) -> String {
    let name = name.trim();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Template file name for a normalized component name
pub fn template_file_name(adapter: Adapter, component: &str) -> String {
    format!("{}.{}", component, adapter.template_extension())
}

/// Path of a component template relative to the templates root
pub fn template_relative_path(adapter: Adapter, component: &str) -> String {
    format!("{}/{}", adapter.as_str(), template_file_name(adapter, component))
}
