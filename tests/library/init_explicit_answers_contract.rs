use std::fs;

use crate::harness::fakes::{Answer, RecordingInstaller, ScriptedAnswers};
use crate::harness::registry_fixture::{self, CSS_VARS};
use shade::adapters::registry_local::LocalRegistry;
use shade::{AppContext, InitOptions, InitOutcome, PackageManager, init_with};
use tempfile::TempDir;

fn answers() -> ScriptedAnswers {
    ScriptedAnswers::new(vec![
        ("TypeScript", Answer::Yes),
        ("framework", Answer::Choose("Vite")),
        ("style", Answer::Choose("Default")),
        ("base color", Answer::Choose("Slate")),
        ("global CSS", Answer::Type("src/index.css")),
        ("CSS variables", Answer::Yes),
        ("tailwind.config", Answer::Type("tailwind.config.ts")),
        ("components:", Answer::Type("@/components")),
        ("utils:", Answer::Type("@/lib/utils")),
        ("components.json", Answer::Yes),
    ])
}

#[test]
fn typescript_config_path_gets_esm_and_single_install_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("app");
    fs::create_dir_all(&root).unwrap();
    let registry_root = temp.path().join("registry-root");
    registry_fixture::write(&registry_root);

    let ctx =
        AppContext::new(LocalRegistry::new(registry_root), answers(), RecordingInstaller::default());
    let options = InitOptions { cwd: root.clone(), yes: false };

    let outcome = init_with(&ctx, &options).expect("init failed");
    let InitOutcome::Completed(report) = outcome else { panic!("expected completion") };

    let root = std::path::absolute(&root).unwrap();
    assert_eq!(
        report.files_written,
        vec![
            root.join("components.json"),
            root.join("tailwind.config.ts"),
            root.join("src/index.css"),
            root.join("src/lib/utils.ts"),
        ]
    );
    assert_eq!(ctx.prompter().asked.borrow().len(), 10);

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("components.json")).unwrap()).unwrap();
    assert_eq!(config["tailwind"]["config"], "tailwind.config.ts");
    assert_eq!(config["tailwind"]["css"], "src/index.css");
    assert_eq!(config["typescript"], true);

    let tailwind = fs::read_to_string(root.join("tailwind.config.ts")).unwrap();
    assert!(tailwind.starts_with("import animate from \"tailwindcss-animate\"\n"));
    assert!(tailwind.contains("export default {"));
    assert!(!tailwind.contains("require("));
    assert!(!tailwind.contains("module.exports"));
    assert!(!root.join("tailwind.config.js").exists());

    assert_eq!(fs::read_to_string(root.join("src/index.css")).unwrap(), CSS_VARS);
    assert!(!root.join("src/assets").exists());

    let calls = ctx.installer().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, root);
    assert_eq!(calls[0].1, PackageManager::Npm);
}
