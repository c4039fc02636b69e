use crate::ports::{PackageInstaller, Prompter, Registry};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: Registry, P: Prompter, I: PackageInstaller> {
    registry: R,
    prompter: P,
    installer: I,
}

impl<R: Registry, P: Prompter, I: PackageInstaller> AppContext<R, P, I> {
    /// Create a new application context.
    pub fn new(registry: R, prompter: P, installer: I) -> Self {
        Self { registry, prompter, installer }
    }

    /// Get a reference to the component registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Get a reference to the interactive prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the dependency installer.
    pub fn installer(&self) -> &I {
        &self.installer
    }
}
