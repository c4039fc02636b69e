//! Registry catalog records.

use serde::{Deserialize, Serialize};

pub const DEFAULT_REGISTRY_URL: &str = "https://www.shadcn-vue.com";
pub const REGISTRY_URL_ENV: &str = "COMPONENTS_REGISTRY_URL";

/// A component style published by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub name: String,
    pub label: String,
}

/// A base color palette selectable for theming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseColor {
    pub name: String,
    pub label: String,
}

/// CSS templates for one base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseColorTemplates {
    /// Global CSS using inline color values.
    pub inline_colors_template: String,
    /// Global CSS defining CSS variables for light and dark themes.
    pub css_vars_template: String,
}

impl BaseColorTemplates {
    /// Template matching the `cssVariables` setting.
    pub fn template_for(&self, css_variables: bool) -> &str {
        if css_variables { &self.css_vars_template } else { &self.inline_colors_template }
    }
}

/// Base colors offered by every registry.
pub fn builtin_base_colors() -> Vec<BaseColor> {
    ["slate", "gray", "zinc", "neutral", "stone"]
        .into_iter()
        .map(|name| BaseColor { name: name.to_string(), label: capitalize(name) })
        .collect()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
