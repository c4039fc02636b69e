use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_without_terminal_fails_before_writing() {
    let ctx = TestContext::new();
    ctx.write_file("package.json", r#"{ "name": "app" }"#);

    ctx.cli()
        .args(["init", "--yes"])
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Prompt failed"));

    assert_eq!(ctx.project_entries(), vec!["package.json".to_string()]);
}
