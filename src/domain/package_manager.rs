//! Package manager selection and the dependency set installed by `init`.

use std::fmt;

use crate::domain::Framework;

/// Packages every project needs.
pub const BASE_DEPENDENCIES: [&str; 5] =
    ["tailwindcss-animate", "class-variance-authority", "clsx", "tailwind-merge", "radix-vue"];

/// Extra integration package for Nuxt projects.
pub const NUXT_DEPENDENCY: &str = "@nuxtjs/tailwindcss";

/// Style whose components use the Radix icon set.
pub const NEW_YORK_STYLE: &str = "new-york";
pub const RADIX_ICONS: &str = "@radix-icons/vue";
pub const LUCIDE_ICONS: &str = "lucide-vue-next";

/// Supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// Lockfiles in detection priority order.
const LOCKFILES: [(&str, PackageManager); 6] = [
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
    ("npm-shrinkwrap.json", PackageManager::Npm),
];

impl PackageManager {
    pub const ALL: [PackageManager; 4] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm, PackageManager::Bun];

    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Subcommand that adds dependencies to the project.
    pub fn install_subcommand(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            _ => "add",
        }
    }

    /// Parse the `packageManager` field of `package.json` (`pnpm@8.6.0`).
    pub fn from_package_manager_field(value: &str) -> Option<PackageManager> {
        let name = value.split('@').next().unwrap_or_default().trim();
        PackageManager::ALL.into_iter().find(|pm| pm.program() == name)
    }

    /// Pick a package manager from the `packageManager` field and the lockfiles present.
    ///
    /// `has_file` answers whether a file exists in the project root.
    pub fn detect(
        package_manager_field: Option<&str>,
        has_file: impl Fn(&str) -> bool,
    ) -> PackageManager {
        if let Some(pm) = package_manager_field.and_then(PackageManager::from_package_manager_field)
        {
            return pm;
        }

        LOCKFILES
            .iter()
            .find(|(lockfile, _)| has_file(lockfile))
            .map(|(_, pm)| *pm)
            .unwrap_or(PackageManager::Npm)
    }

    /// Full argument list for installing `dependencies`.
    pub fn install_args(&self, dependencies: &[String]) -> Vec<String> {
        std::iter::once(self.install_subcommand().to_string())
            .chain(dependencies.iter().cloned())
            .collect()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// Dependencies to install for a framework and style.
///
/// The base set first, then the Nuxt integration when applicable, then
/// exactly one icon package.
pub fn compose_dependencies(framework: Framework, style: &str) -> Vec<String> {
    let mut dependencies: Vec<String> = BASE_DEPENDENCIES.iter().map(|d| d.to_string()).collect();

    if framework == Framework::Nuxt {
        dependencies.push(NUXT_DEPENDENCY.to_string());
    }

    let icons = if style == NEW_YORK_STYLE { RADIX_ICONS } else { LUCIDE_ICONS };
    dependencies.push(icons.to_string());

    dependencies
}
