use crate::domain::AppError;
use crate::domain::registry::{BaseColor, BaseColorTemplates, Style, builtin_base_colors};

/// Port for reading the component registry.
pub trait Registry {
    /// Styles published by the registry.
    fn styles(&self) -> Result<Vec<Style>, AppError>;

    /// Base colors offered for theming.
    fn base_colors(&self) -> Result<Vec<BaseColor>, AppError> {
        Ok(builtin_base_colors())
    }

    /// CSS templates for a base color. `None` when the registry has no such color.
    fn base_color(&self, name: &str) -> Result<Option<BaseColorTemplates>, AppError>;
}
