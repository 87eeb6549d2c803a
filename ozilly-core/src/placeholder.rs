//! Fallback logo image used when rendering fails.

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/400x200.png?text=Logo+for+";

/// Deterministic placeholder image URL for a startup name.
pub fn placeholder_logo_url(name: &str) -> String {
    format!("{PLACEHOLDER_BASE}{}", name.replace(' ', "+"))
}
