use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_rejects_missing_cwd() {
    let ctx = TestContext::new();
    let missing = ctx.work_dir().join("nope");

    ctx.cli()
        .args(["init", "--yes", "--cwd"])
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: The path"))
        .stderr(predicate::str::contains("does not exist. Please try again."));

    assert!(!missing.exists());
}
