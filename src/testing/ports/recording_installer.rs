use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, PackageManager};
use crate::ports::PackageInstaller;

/// Records install requests instead of spawning a package manager.
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    calls: Mutex<Vec<(PathBuf, PackageManager, Vec<String>)>>,
    fail: bool,
}

impl RecordingInstaller {
    /// Installer whose every call fails after being recorded.
    pub fn failing() -> Self {
        Self { calls: Mutex::new(Vec::new()), fail: true }
    }

    pub fn calls(&self) -> Vec<(PathBuf, PackageManager, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(
        &self,
        root: &Path,
        manager: PackageManager,
        dependencies: &[String],
    ) -> Result<(), AppError> {
        self.calls.lock().unwrap().push((root.to_path_buf(), manager, dependencies.to_vec()));
        if self.fail {
            let args = manager.install_args(dependencies);
            return Err(AppError::Install {
                command: format!("{} {}", manager.program(), args.join(" ")),
                details: "exited with status 1".to_string(),
            });
        }
        Ok(())
    }
}
