//! Registry read from a directory on disk, laid out like the HTTP registry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::AppError;
use crate::domain::registry::{BaseColorTemplates, Style};
use crate::ports::Registry;

#[derive(Debug, Clone)]
pub struct LocalRegistry {
    root: PathBuf,
}

impl LocalRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_json<T: DeserializeOwned>(&self, relative: &str) -> Result<Option<T>, AppError> {
        let path = self.root.join(relative);
        tracing::debug!(path = %path.display(), "Reading local registry resource");

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(registry_error(&path, err.to_string())),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| registry_error(&path, format!("Failed to parse registry file: {}", e)))
    }
}

fn registry_error(path: &Path, reason: String) -> AppError {
    AppError::Registry { url: path.display().to_string(), reason }
}

impl Registry for LocalRegistry {
    fn styles(&self) -> Result<Vec<Style>, AppError> {
        let relative = "registry/styles/index.json";
        self.read_json(relative)?.ok_or_else(|| {
            registry_error(&self.root.join(relative), "style index not found".to_string())
        })
    }

    fn base_color(&self, name: &str) -> Result<Option<BaseColorTemplates>, AppError> {
        self.read_json(&format!("registry/colors/{}.json", name))
    }
}
