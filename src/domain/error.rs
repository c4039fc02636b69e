use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for shade operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Target directory passed via `--cwd` does not exist.
    #[error("The path {} does not exist. Please try again.", .0.display())]
    DirectoryNotFound(PathBuf),

    /// `components.json` (or a tsconfig) exists but cannot be parsed.
    #[error("Failed to parse {}: {details}", path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// A configuration value is outside its allowed domain.
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Registry request or payload failure.
    #[error("Failed to fetch from registry {url}: {reason}")]
    Registry { url: String, reason: String },

    /// Template rendering failure.
    #[error("Failed to render template '{template}': {reason}")]
    Template { template: String, reason: String },

    /// Source transform failure (detype or CommonJS to ESM).
    #[error("Failed to transform {file}: {reason}")]
    Transform { file: String, reason: String },

    /// Dependency installation subprocess failed.
    #[error("Failed to run '{command}': {details}")]
    Install { command: String, details: String },

    /// Interactive prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn invalid_config<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        AppError::InvalidConfig { field: field.into(), reason: reason.into() }
    }

    pub fn transform<F: Into<String>, R: Into<String>>(file: F, reason: R) -> Self {
        AppError::Transform { file: file.into(), reason: reason.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DirectoryNotFound(_) => io::ErrorKind::NotFound,
            AppError::ConfigParse { .. }
            | AppError::InvalidConfig { .. }
            | AppError::Transform { .. } => io::ErrorKind::InvalidInput,
            AppError::Registry { .. } | AppError::Template { .. } => io::ErrorKind::InvalidData,
            AppError::Install { .. } | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
