use std::collections::HashMap;

use crate::domain::AppError;
use crate::domain::registry::{BaseColorTemplates, Style};
use crate::ports::Registry;

/// In-memory registry.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    styles: Vec<Style>,
    colors: HashMap<String, BaseColorTemplates>,
}

impl MemoryRegistry {
    pub const CSS_VARS_TEMPLATE: &'static str =
        "@tailwind base;\n\n@layer base {\n  :root {\n    --background: 0 0% 100%;\n  }\n}\n";
    pub const INLINE_COLORS_TEMPLATE: &'static str = "@tailwind base;\n@tailwind components;\n";

    /// The `default` and `new-york` styles with a `slate` palette.
    pub fn with_defaults() -> Self {
        Self::default()
            .with_style("default", "Default")
            .with_style("new-york", "New York")
            .with_color("slate")
    }

    pub fn with_style(mut self, name: &str, label: &str) -> Self {
        self.styles.push(Style { name: name.to_string(), label: label.to_string() });
        self
    }

    pub fn with_color(mut self, name: &str) -> Self {
        self.colors.insert(
            name.to_string(),
            BaseColorTemplates {
                inline_colors_template: Self::INLINE_COLORS_TEMPLATE.to_string(),
                css_vars_template: Self::CSS_VARS_TEMPLATE.to_string(),
            },
        );
        self
    }
}

impl Registry for MemoryRegistry {
    fn styles(&self) -> Result<Vec<Style>, AppError> {
        Ok(self.styles.clone())
    }

    fn base_color(&self, name: &str) -> Result<Option<BaseColorTemplates>, AppError> {
        Ok(self.colors.get(name).cloned())
    }
}
