//! Materializes a confirmed configuration into the project.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::templates::{render_tailwind_config, utils_source};
use crate::app::config::read_package_json;
use crate::app::progress::spinner;
use crate::domain::config::directory_to_create;
use crate::domain::transform::{detype, transform_cjs_to_esm};
use crate::domain::{AppError, PackageManager, ResolvedConfig, compose_dependencies};
use crate::ports::{PackageInstaller, Registry};

/// What `init` did to the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    /// Directories that did not exist before and were created.
    pub directories_created: Vec<PathBuf>,
    /// Files written, in write order.
    pub files_written: Vec<PathBuf>,
    pub package_manager: PackageManager,
    pub dependencies: Vec<String>,
}

/// Create directories, write the generated files and install dependencies.
///
/// Steps run in order and stop at the first failure; earlier writes are kept.
pub fn materialize<R: Registry, I: PackageInstaller>(
    registry: &R,
    installer: &I,
    resolved: &ResolvedConfig,
) -> Result<InitReport, AppError> {
    let root = resolved.root();
    let package = read_package_json(root)?;

    let pb = spinner("Initializing project...");
    let written = write_project(registry, resolved, package.is_module());
    pb.finish_and_clear();
    let (directories_created, files_written) = written?;

    let package_manager =
        PackageManager::detect(package.package_manager.as_deref(), |file| root.join(file).exists());
    let config = resolved.config();
    let dependencies = compose_dependencies(config.framework, &config.style);

    // The package manager draws its own progress on the inherited terminal.
    tracing::info!(%package_manager, count = dependencies.len(), "Installing dependencies");
    installer.install(root, package_manager, &dependencies)?;

    Ok(InitReport { directories_created, files_written, package_manager, dependencies })
}

/// Directories created and files written, in order.
fn write_project<R: Registry>(
    registry: &R,
    resolved: &ResolvedConfig,
    package_type_module: bool,
) -> Result<(Vec<PathBuf>, Vec<PathBuf>), AppError> {
    let config = resolved.config();
    let paths = resolved.paths();

    let mut directories_created = Vec::new();
    for (key, path) in paths.entries() {
        let dir = directory_to_create(key, path);
        if dir.as_os_str().is_empty() || dir.exists() {
            continue;
        }
        fs::create_dir_all(&dir)?;
        tracing::debug!(key = key.name(), dir = %dir.display(), "Created directory");
        directories_created.push(dir);
    }

    let mut files_written = Vec::new();
    let extension = config.script_extension();

    let tailwind_config =
        render_tailwind_config(config.tailwind.css_variables, extension, config.framework)?;
    let tailwind_config =
        transform_cjs_to_esm(&paths.tailwind_config, &tailwind_config, package_type_module)?;
    write_file(&paths.tailwind_config, &tailwind_config, &mut files_written)?;

    match registry.base_color(&config.tailwind.base_color)? {
        Some(templates) => {
            let css = templates.template_for(config.tailwind.css_variables);
            write_file(&paths.tailwind_css, css, &mut files_written)?;
        }
        None => tracing::warn!(
            base_color = %config.tailwind.base_color,
            "Base color not found in registry, leaving Tailwind CSS untouched"
        ),
    }

    let utils_path = with_appended_extension(&paths.utils, extension);
    let utils = if config.typescript {
        utils_source()?.to_string()
    } else {
        detype(Path::new("utils.ts"), utils_source()?)?
    };
    write_file(&utils_path, &utils, &mut files_written)?;

    Ok((directories_created, files_written))
}

fn write_file(path: &Path, content: &str, written: &mut Vec<PathBuf>) -> Result<(), AppError> {
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    written.push(path.to_path_buf());
    Ok(())
}

/// `lib/utils` + `ts` -> `lib/utils.ts`, keeping any dots already in the name.
fn with_appended_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
