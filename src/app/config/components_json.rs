//! `components.json` load and save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CONFIG_FILE, Config, RawConfig};

/// Read `components.json` from `root`. A missing file is `Ok(None)`.
pub fn read_raw_config(root: &Path) -> Result<Option<RawConfig>, AppError> {
    let path = root.join(CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|err| AppError::ConfigParse { path, details: err.to_string() })
}

/// Write `config` to `root/components.json`, replacing any existing file.
pub fn write_config(root: &Path, config: &Config) -> Result<PathBuf, AppError> {
    let path = root.join(CONFIG_FILE);
    let mut content = serde_json::to_string_pretty(config)
        .map_err(|err| AppError::ConfigParse { path: path.clone(), details: err.to_string() })?;
    content.push('\n');

    fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), "Wrote configuration");
    Ok(path)
}
