//! Third-party packages each web component template imports

/// Component name to packages, in install argument order
const COMPONENT_DEPENDENCIES: &[(&str, &[&str])] = &[
    ("Button", &["@radix-ui/react-slot", "class-variance-authority"]),
    ("Badge", &["class-variance-authority"]),
    ("Card", &[]),
    ("Input", &[]),
    ("Dialog", &["@radix-ui/react-dialog", "lucide-react"]),
    ("Checkbox", &["@radix-ui/react-checkbox", "lucide-react"]),
    ("Switch", &["@radix-ui/react-switch"]),
];

/// Packages required by a web component; empty for unknown names
pub fn get_component_dependencies(component: &str) -> Vec<String> {
    COMPONENT_DEPENDENCIES
        .iter()
        .find(|(name, _)| *name == component)
        .map(|(_, deps)| deps.iter().map(|d| d.to_string()).collect())
        .unwrap_or_default()
}
