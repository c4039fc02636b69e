//! Shared testing harness for `shade` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::registry_fixture;

/// Testing harness providing an isolated project and registry for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    registry_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty project and a local registry.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let registry_dir = root.path().join("registry-root");
        registry_fixture::write(&registry_dir);

        Self { root, work_dir, registry_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Root of the on-disk registry.
    pub(crate) fn registry_dir(&self) -> &Path {
        &self.registry_dir
    }

    /// Build a command for invoking the compiled `shade` binary within the project.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `shade` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("shade").expect("Failed to locate shade binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env("COMPONENTS_REGISTRY_URL", self.registry_dir())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the project directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Names of the entries directly under the project directory.
    pub(crate) fn project_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to list work directory")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
