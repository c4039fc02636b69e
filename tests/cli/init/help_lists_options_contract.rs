use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_help_lists_options() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"))
        .stdout(predicate::str::contains("--cwd"));
}

#[test]
fn init_alias_is_accepted() {
    let ctx = TestContext::new();

    ctx.cli().args(["i", "--help"]).assert().success().stdout(predicate::str::contains("--yes"));
}
