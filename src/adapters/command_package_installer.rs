//! Dependency installation by spawning the package manager.

use std::path::Path;
use std::process::Command;

use crate::domain::{AppError, PackageManager};
use crate::ports::PackageInstaller;

/// Runs `<manager> <install|add> <deps...>` with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandPackageInstaller;

impl CommandPackageInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl PackageInstaller for CommandPackageInstaller {
    fn install(
        &self,
        root: &Path,
        manager: PackageManager,
        dependencies: &[String],
    ) -> Result<(), AppError> {
        let args = manager.install_args(dependencies);
        let command_line = format!("{} {}", manager.program(), args.join(" "));
        tracing::info!(command = %command_line, cwd = %root.display(), "Installing dependencies");

        let status = Command::new(manager.program())
            .args(&args)
            .current_dir(root)
            .status()
            .map_err(|e| AppError::Install {
                command: command_line.clone(),
                details: e.to_string(),
            })?;

        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(AppError::Install { command: command_line, details });
        }

        Ok(())
    }
}
