use std::path::{Component, Path, PathBuf};

use crate::domain::Framework;

use super::{Config, TsconfigPaths};

/// Logical keys for the files and directories `init` materializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKey {
    Utils,
    Components,
    TailwindConfig,
    TailwindCss,
}

impl PathKey {
    pub const ALL: [PathKey; 4] =
        [PathKey::Utils, PathKey::Components, PathKey::TailwindConfig, PathKey::TailwindCss];

    pub fn name(&self) -> &'static str {
        match self {
            PathKey::Utils => "utils",
            PathKey::Components => "components",
            PathKey::TailwindConfig => "tailwindConfig",
            PathKey::TailwindCss => "tailwindCss",
        }
    }
}

/// Absolute filesystem locations derived from a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub utils: PathBuf,
    pub components: PathBuf,
    pub tailwind_config: PathBuf,
    pub tailwind_css: PathBuf,
}

impl ResolvedPaths {
    pub fn get(&self, key: PathKey) -> &Path {
        match key {
            PathKey::Utils => &self.utils,
            PathKey::Components => &self.components,
            PathKey::TailwindConfig => &self.tailwind_config,
            PathKey::TailwindCss => &self.tailwind_css,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (PathKey, &Path)> {
        PathKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Validated configuration plus resolved paths. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    config: Config,
    root: PathBuf,
    paths: ResolvedPaths,
}

impl ResolvedConfig {
    /// Resolve aliases and file paths against the project `root`.
    ///
    /// Aliases go through `tsconfig` mappings first; otherwise `@/` and `~/`
    /// point at the framework's source root and anything else is relative
    /// to `root`.
    pub fn resolve(root: &Path, config: Config, tsconfig: Option<&TsconfigPaths>) -> Self {
        let root = normalize_path(root);
        let alias = |value: &str| resolve_alias(&root, config.framework, tsconfig, value);

        let paths = ResolvedPaths {
            utils: alias(&config.aliases.utils),
            components: alias(&config.aliases.components),
            tailwind_config: normalize_path(&root.join(&config.tailwind.config)),
            tailwind_css: normalize_path(&root.join(&config.tailwind.css)),
        };

        Self { config, root, paths }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn paths(&self) -> &ResolvedPaths {
        &self.paths
    }
}

fn resolve_alias(
    root: &Path,
    framework: Framework,
    tsconfig: Option<&TsconfigPaths>,
    alias: &str,
) -> PathBuf {
    if let Some(path) = tsconfig.and_then(|paths| paths.resolve(alias)) {
        return path;
    }

    let conventional = alias.strip_prefix("@/").or_else(|| alias.strip_prefix("~/"));
    match conventional {
        Some(rest) => normalize_path(&root.join(framework.source_root()).join(rest)),
        None => normalize_path(&root.join(alias)),
    }
}

/// Directory that must exist before writing to `path`.
///
/// A path with an extension is a file and yields its parent; a path without
/// one is itself a directory. A `utils` path ending in `/utils` names the
/// module file, so only its parent is created.
pub fn directory_to_create(key: PathKey, path: &Path) -> PathBuf {
    let mut dir = if path.extension().is_some() {
        path.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        path.to_path_buf()
    };

    if key == PathKey::Utils && path.to_string_lossy().ends_with("/utils") {
        dir.pop();
    }

    dir
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
