//! Embedded file templates and their minijinja renderer.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{AppError, Framework};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const TAILWIND_CONFIG: &str = "tailwind.config.js.j2";
const TAILWIND_CONFIG_VARS: &str = "tailwind.config.vars.js.j2";
const UTILS: &str = "utils.ts";

fn template_error(template: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template { template: template.to_string(), reason: err.to_string() }
}

fn environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);

    for file in TEMPLATES_DIR.files() {
        let Some(name) = file.path().to_str() else { continue };
        if !name.ends_with(".j2") {
            continue;
        }
        let source = file
            .contents_utf8()
            .ok_or_else(|| template_error(name, "template is not valid UTF-8"))?;
        env.add_template(name, source).map_err(|err| template_error(name, err))?;
    }

    Ok(env)
}

/// Render an embedded template by name.
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, AppError> {
    let env = environment()?;
    let template = env.get_template(name).map_err(|err| template_error(name, err))?;
    template.render(ctx).map_err(|err| template_error(name, err))
}

/// Tailwind config for the chosen color mode, language and framework.
pub fn render_tailwind_config(
    css_variables: bool,
    extension: &str,
    framework: Framework,
) -> Result<String, AppError> {
    let name = if css_variables { TAILWIND_CONFIG_VARS } else { TAILWIND_CONFIG };
    render(name, context! { extension => extension, framework => framework.id() })
}

/// TypeScript source of the `cn` utility module.
pub fn utils_source() -> Result<&'static str, AppError> {
    TEMPLATES_DIR
        .get_file(UTILS)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| template_error(UTILS, "missing embedded template"))
}
