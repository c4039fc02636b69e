use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, Config, ResolvedConfig, TsconfigPaths};

const JSCONFIG: &str = "jsconfig.json";

/// Path mappings from the project's tsconfig, if it has one.
///
/// JavaScript projects without a tsconfig fall back to `jsconfig.json`.
pub fn load_tsconfig(root: &Path, config: &Config) -> Result<Option<TsconfigPaths>, AppError> {
    let mut candidates = vec![root.join(config.framework.tsconfig_path())];
    if !config.typescript {
        candidates.push(root.join(JSCONFIG));
    }

    for path in candidates {
        match fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "Loaded path mappings");
                return TsconfigPaths::parse(&path, &content).map(Some);
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(None)
}

/// Resolve aliases and file paths of `config` against `root`.
pub fn resolve_config(root: &Path, config: Config) -> Result<ResolvedConfig, AppError> {
    let tsconfig = load_tsconfig(root, &config)?;
    Ok(ResolvedConfig::resolve(root, config, tsconfig.as_ref()))
}
