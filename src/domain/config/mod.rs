//! `components.json` schema, validation and path resolution.

mod paths;
mod schema;
mod tsconfig;

pub use paths::{PathKey, ResolvedConfig, ResolvedPaths, directory_to_create, normalize_path};
pub use schema::{
    Aliases, CONFIG_FILE, Config, RawAliases, RawConfig, RawTailwindConfig, SCHEMA_URL,
    TailwindConfig,
};
pub use tsconfig::TsconfigPaths;
