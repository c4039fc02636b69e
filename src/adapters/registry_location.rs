//! Chooses the registry backend from a configured location.

use std::path::PathBuf;

use url::Url;

use crate::adapters::registry_http::HttpRegistry;
use crate::adapters::registry_local::LocalRegistry;
use crate::domain::AppError;
use crate::domain::registry::{
    BaseColor, BaseColorTemplates, DEFAULT_REGISTRY_URL, REGISTRY_URL_ENV, Style,
};
use crate::ports::Registry;

/// Registry selected at startup.
#[derive(Debug, Clone)]
pub enum ConfiguredRegistry {
    Http(HttpRegistry),
    Local(LocalRegistry),
}

impl ConfiguredRegistry {
    /// `http(s)://` locations are fetched over the network, `file://` URLs and
    /// plain paths are read from disk.
    pub fn from_location(location: &str) -> Result<Self, AppError> {
        let location = location.trim();
        let invalid = |reason: &str| AppError::Registry {
            url: location.to_string(),
            reason: reason.to_string(),
        };

        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                Ok(ConfiguredRegistry::Http(HttpRegistry::new(url)?))
            }
            Ok(url) if url.scheme() == "file" => {
                let path = url.to_file_path().map_err(|_| invalid("invalid file URL"))?;
                Ok(ConfiguredRegistry::Local(LocalRegistry::new(path)))
            }
            // Single-letter schemes are Windows drive prefixes.
            Ok(url) if url.scheme().len() > 1 => Err(invalid("unsupported URL scheme")),
            _ if location.is_empty() => Err(invalid("empty registry location")),
            _ => Ok(ConfiguredRegistry::Local(LocalRegistry::new(PathBuf::from(location)))),
        }
    }

    /// Location from `COMPONENTS_REGISTRY_URL`, else the public registry.
    pub fn from_env() -> Result<Self, AppError> {
        let location = std::env::var(REGISTRY_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());
        tracing::debug!(registry = %location, "Using registry");
        Self::from_location(&location)
    }
}

impl Registry for ConfiguredRegistry {
    fn styles(&self) -> Result<Vec<Style>, AppError> {
        match self {
            ConfiguredRegistry::Http(registry) => registry.styles(),
            ConfiguredRegistry::Local(registry) => registry.styles(),
        }
    }

    fn base_colors(&self) -> Result<Vec<BaseColor>, AppError> {
        match self {
            ConfiguredRegistry::Http(registry) => registry.base_colors(),
            ConfiguredRegistry::Local(registry) => registry.base_colors(),
        }
    }

    fn base_color(&self, name: &str) -> Result<Option<BaseColorTemplates>, AppError> {
        match self {
            ConfiguredRegistry::Http(registry) => registry.base_color(name),
            ConfiguredRegistry::Local(registry) => registry.base_color(name),
        }
    }
}
