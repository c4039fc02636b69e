use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Framework};

/// File name of the project configuration, relative to the project root.
pub const CONFIG_FILE: &str = "components.json";

/// JSON schema advertised in written configuration files.
pub const SCHEMA_URL: &str = "https://shadcn-vue.com/schema.json";

/// `components.json` as found on disk, before validation.
///
/// Every field is optional so that a partial or older file can still seed
/// prompt defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub style: Option<String>,
    pub typescript: Option<bool>,
    pub tailwind: Option<RawTailwindConfig>,
    pub framework: Option<String>,
    pub aliases: Option<RawAliases>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTailwindConfig {
    pub config: Option<String>,
    pub css: Option<String>,
    pub base_color: Option<String>,
    pub css_variables: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAliases {
    pub components: Option<String>,
    pub utils: Option<String>,
}

impl RawConfig {
    pub fn tailwind_config(&self) -> Option<&str> {
        self.tailwind.as_ref().and_then(|t| t.config.as_deref())
    }

    pub fn tailwind_css(&self) -> Option<&str> {
        self.tailwind.as_ref().and_then(|t| t.css.as_deref())
    }

    pub fn base_color(&self) -> Option<&str> {
        self.tailwind.as_ref().and_then(|t| t.base_color.as_deref())
    }

    pub fn css_variables(&self) -> Option<bool> {
        self.tailwind.as_ref().and_then(|t| t.css_variables)
    }

    pub fn components_alias(&self) -> Option<&str> {
        self.aliases.as_ref().and_then(|a| a.components.as_deref())
    }

    pub fn utils_alias(&self) -> Option<&str> {
        self.aliases.as_ref().and_then(|a| a.utils.as_deref())
    }

    /// Framework from the file, ignored when it is not a known identifier.
    pub fn known_framework(&self) -> Option<Framework> {
        self.framework.as_deref().and_then(Framework::from_id)
    }
}

/// Validated project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub style: String,
    pub typescript: bool,
    pub tailwind: TailwindConfig,
    pub framework: Framework,
    pub aliases: Aliases,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfig {
    pub config: String,
    pub css: String,
    pub base_color: String,
    pub css_variables: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aliases {
    pub components: String,
    pub utils: String,
}

impl Config {
    /// Validate a raw configuration.
    ///
    /// All fields except `$schema` are required. Values are checked as given;
    /// nothing is trimmed, lowercased or otherwise coerced.
    pub fn validate(raw: RawConfig) -> Result<Config, AppError> {
        let tailwind = raw.tailwind.unwrap_or_default();
        let aliases = raw.aliases.unwrap_or_default();

        let framework_id = required("framework", raw.framework)?;
        let framework = Framework::from_id(&framework_id).ok_or_else(|| {
            AppError::invalid_config(
                "framework",
                format!("'{}' is not one of vite, nuxt, laravel, astro", framework_id),
            )
        })?;

        Ok(Config {
            schema: raw.schema.unwrap_or_else(|| SCHEMA_URL.to_string()),
            style: identifier("style", required("style", raw.style)?)?,
            typescript: required("typescript", raw.typescript)?,
            tailwind: TailwindConfig {
                config: path_value("tailwind.config", required("tailwind.config", tailwind.config)?)?,
                css: path_value("tailwind.css", required("tailwind.css", tailwind.css)?)?,
                base_color: identifier(
                    "tailwind.baseColor",
                    required("tailwind.baseColor", tailwind.base_color)?,
                )?,
                css_variables: required("tailwind.cssVariables", tailwind.css_variables)?,
            },
            framework,
            aliases: Aliases {
                components: path_value(
                    "aliases.components",
                    required("aliases.components", aliases.components)?,
                )?,
                utils: path_value("aliases.utils", required("aliases.utils", aliases.utils)?)?,
            },
        })
    }

    /// Extension of generated script files.
    pub fn script_extension(&self) -> &'static str {
        if self.typescript { "ts" } else { "js" }
    }
}

impl From<&Config> for RawConfig {
    fn from(config: &Config) -> Self {
        RawConfig {
            schema: Some(config.schema.clone()),
            style: Some(config.style.clone()),
            typescript: Some(config.typescript),
            tailwind: Some(RawTailwindConfig {
                config: Some(config.tailwind.config.clone()),
                css: Some(config.tailwind.css.clone()),
                base_color: Some(config.tailwind.base_color.clone()),
                css_variables: Some(config.tailwind.css_variables),
            }),
            framework: Some(config.framework.id().to_string()),
            aliases: Some(RawAliases {
                components: Some(config.aliases.components.clone()),
                utils: Some(config.aliases.utils.clone()),
            }),
        }
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::invalid_config(field, "is required"))
}

fn identifier(field: &str, value: String) -> Result<String, AppError> {
    let valid = !value.is_empty()
        && value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(AppError::invalid_config(
            field,
            format!("'{}' must be lowercase alphanumeric with hyphens", value),
        ));
    }
    Ok(value)
}

fn path_value(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_config(field, "must not be empty"));
    }
    if value.contains('\0') {
        return Err(AppError::invalid_config(field, "must not contain NUL bytes"));
    }
    Ok(value)
}
