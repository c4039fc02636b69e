//! Project files read and written by `init`.
//!
//! Parsing and validation rules live in `domain::config`; this module binds
//! them to the filesystem of the target project.

mod components_json;
mod package_json;
mod resolve;

pub use components_json::{read_raw_config, write_config};
pub use package_json::{PackageJson, read_package_json};
pub use resolve::{load_tsconfig, resolve_config};
