use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;

/// The fields of `package.json` that affect generated files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    #[serde(rename = "type")]
    pub module_type: Option<String>,
    pub package_manager: Option<String>,
}

impl PackageJson {
    /// Whether `.js` files in the package are ES modules.
    pub fn is_module(&self) -> bool {
        self.module_type.as_deref() == Some("module")
    }
}

/// Read `package.json` from `root`; a missing file yields the defaults.
pub fn read_package_json(root: &Path) -> Result<PackageJson, AppError> {
    let path = root.join("package.json");
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(PackageJson::default()),
        Err(err) => return Err(err.into()),
    };

    serde_json::from_str(&content)
        .map_err(|err| AppError::ConfigParse { path, details: err.to_string() })
}
