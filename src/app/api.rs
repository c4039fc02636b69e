//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::command_package_installer::CommandPackageInstaller;
use crate::adapters::dialoguer_prompter::DialoguerPrompter;
use crate::adapters::registry_location::ConfiguredRegistry;
use crate::app::{AppContext, commands::init};
use crate::ports::{PackageInstaller, Prompter, Registry};

pub use crate::app::commands::init::{InitOptions, InitOutcome, InitReport};
pub use crate::domain::AppError;

/// Context wired to the configured registry, the terminal and the real package manager.
pub fn create_context()
-> Result<AppContext<ConfiguredRegistry, DialoguerPrompter, CommandPackageInstaller>, AppError> {
    let registry = ConfiguredRegistry::from_env()?;
    Ok(AppContext::new(registry, DialoguerPrompter::new(), CommandPackageInstaller::new()))
}

/// Initialize the project in the current directory.
pub fn init(yes: bool) -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?, yes)
}

/// Initialize the project at the specified path.
pub fn init_at(path: impl Into<PathBuf>, yes: bool) -> Result<InitOutcome, AppError> {
    let options = InitOptions { cwd: path.into(), yes };
    if !options.cwd.is_dir() {
        return Err(AppError::DirectoryNotFound(options.cwd));
    }

    let ctx = create_context()?;
    init_with(&ctx, &options)
}

/// Initialize with caller-supplied adapters.
pub fn init_with<R, P, I>(
    ctx: &AppContext<R, P, I>,
    options: &InitOptions,
) -> Result<InitOutcome, AppError>
where
    R: Registry,
    P: Prompter,
    I: PackageInstaller,
{
    init::execute(ctx, options)
}
