#![allow(dead_code, unused_imports)]

pub(crate) mod fakes;
pub(crate) mod registry_fixture;
pub(crate) mod test_context;

pub(crate) use test_context::TestContext;
