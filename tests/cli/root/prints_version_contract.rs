use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prints_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    let ctx = TestContext::new();

    ctx.cli().arg("add").assert().failure().stderr(predicate::str::contains("unrecognized"));
}
