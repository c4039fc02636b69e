mod initializer;
mod prompt_flow;

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::config::{read_raw_config, resolve_config, write_config};
use crate::domain::{AppError, PromptOutcome};
use crate::ports::{PackageInstaller, Prompter, Registry};

pub use initializer::InitReport;
pub use prompt_flow::run_prompts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// Project root. Must already exist.
    pub cwd: PathBuf,
    /// Skip the final confirmation.
    pub yes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Completed(InitReport),
    Cancelled,
}

/// Execute the init command.
///
/// Asks the configuration questions, writes `components.json`, then creates
/// directories, writes the generated files and installs dependencies.
pub fn execute<R, P, I>(
    ctx: &AppContext<R, P, I>,
    options: &InitOptions,
) -> Result<InitOutcome, AppError>
where
    R: Registry,
    P: Prompter,
    I: PackageInstaller,
{
    if !options.cwd.is_dir() {
        return Err(AppError::DirectoryNotFound(options.cwd.clone()));
    }
    let root = std::path::absolute(&options.cwd)?;

    let existing = read_raw_config(&root)?;
    let outcome = run_prompts(ctx.registry(), ctx.prompter(), existing.as_ref(), options.yes)?;
    let config = match outcome {
        PromptOutcome::Confirmed(config) => config,
        PromptOutcome::Cancelled => {
            tracing::info!("Initialization cancelled");
            return Ok(InitOutcome::Cancelled);
        }
    };

    let config_path = write_config(&root, &config)?;
    tracing::info!(path = %config_path.display(), "Wrote configuration");

    let resolved = resolve_config(&root, config)?;
    let mut report = initializer::materialize(ctx.registry(), ctx.installer(), &resolved)?;
    report.files_written.insert(0, config_path);

    Ok(InitOutcome::Completed(report))
}
