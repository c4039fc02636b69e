mod package_installer;
mod prompter;
mod registry;

pub use package_installer::PackageInstaller;
pub use prompter::Prompter;
pub use registry::Registry;
