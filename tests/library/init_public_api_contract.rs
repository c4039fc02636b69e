use std::fs;

use crate::harness::fakes::{DefaultsPrompter, RecordingInstaller};
use crate::harness::registry_fixture::{self, CSS_VARS};
use shade::adapters::registry_local::LocalRegistry;
use shade::{AppContext, InitOptions, InitOutcome, PackageManager, init_with};
use tempfile::TempDir;

struct Project {
    _temp: TempDir,
    root: std::path::PathBuf,
    registry: LocalRegistry,
}

fn project() -> Project {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("app");
    fs::create_dir_all(&root).unwrap();
    let registry_root = temp.path().join("registry-root");
    registry_fixture::write(&registry_root);
    Project { registry: LocalRegistry::new(registry_root), root, _temp: temp }
}

#[test]
fn public_api_init_happy_path_contract() {
    let project = project();
    fs::write(project.root.join("package.json"), r#"{ "type": "module" }"#).unwrap();
    fs::write(project.root.join("yarn.lock"), "").unwrap();

    let ctx = AppContext::new(
        project.registry,
        DefaultsPrompter::proceeding(),
        RecordingInstaller::default(),
    );
    let options = InitOptions { cwd: project.root.clone(), yes: false };

    let outcome = init_with(&ctx, &options).expect("init failed");
    let InitOutcome::Completed(report) = outcome else { panic!("expected completion") };

    let root = std::path::absolute(&project.root).unwrap();
    assert_eq!(report.files_written[0], root.join("components.json"));
    assert_eq!(report.package_manager, PackageManager::Yarn);

    let config = fs::read_to_string(root.join("components.json")).unwrap();
    assert!(config.starts_with("{\n  \"$schema\": \"https://shadcn-vue.com/schema.json\",\n  \"style\": \"default\","));
    assert!(config.ends_with("}\n"));

    let tailwind = fs::read_to_string(root.join("tailwind.config.js")).unwrap();
    assert!(tailwind.contains("export default {"));
    assert!(!tailwind.contains("module.exports"));

    assert_eq!(fs::read_to_string(root.join("src/assets/index.css")).unwrap(), CSS_VARS);
    assert!(root.join("src/lib/utils.ts").is_file());
    assert!(root.join("src/components").is_dir());

    let calls = ctx.installer().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, PackageManager::Yarn);
    assert_eq!(
        calls[0].2,
        vec![
            "tailwindcss-animate",
            "class-variance-authority",
            "clsx",
            "tailwind-merge",
            "radix-vue",
            "lucide-vue-next",
        ]
    );
}

#[test]
fn public_api_decline_writes_nothing_contract() {
    let project = project();
    let ctx = AppContext::new(
        project.registry,
        DefaultsPrompter::declining(),
        RecordingInstaller::default(),
    );
    let options = InitOptions { cwd: project.root.clone(), yes: false };

    assert_eq!(init_with(&ctx, &options).unwrap(), InitOutcome::Cancelled);
    assert_eq!(fs::read_dir(&project.root).unwrap().count(), 0);
    assert!(ctx.installer().calls.borrow().is_empty());
    assert_eq!(ctx.prompter().asked.borrow().len(), 10);
}

#[test]
fn public_api_yes_skips_confirmation_contract() {
    let project = project();
    let ctx = AppContext::new(
        project.registry,
        DefaultsPrompter::declining(),
        RecordingInstaller::default(),
    );
    let options = InitOptions { cwd: project.root.clone(), yes: true };

    assert!(matches!(init_with(&ctx, &options).unwrap(), InitOutcome::Completed(_)));
    assert_eq!(ctx.prompter().asked.borrow().len(), 9);
}

#[test]
fn public_api_missing_directory_contract() {
    let project = project();
    let ctx = AppContext::new(
        project.registry,
        DefaultsPrompter::proceeding(),
        RecordingInstaller::default(),
    );
    let options = InitOptions { cwd: project.root.join("missing"), yes: true };

    let err = init_with(&ctx, &options).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}
