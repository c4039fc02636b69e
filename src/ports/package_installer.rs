use std::path::Path;

use crate::domain::{AppError, PackageManager};

/// Port for installing project dependencies.
pub trait PackageInstaller {
    /// Install `dependencies` in `root` with `manager`, blocking until it exits.
    fn install(
        &self,
        root: &Path,
        manager: PackageManager,
        dependencies: &[String],
    ) -> Result<(), AppError>;
}
