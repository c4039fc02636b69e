//! Source transforms applied to generated files before they are written.
//!
//! Both transforms parse with tree-sitter's TypeScript grammar and rewrite
//! the source through byte-range edits, so untouched code keeps its layout.

mod cjs_to_esm;
mod detype;
pub(crate) mod syntax;
mod vue_macros;

pub use cjs_to_esm::{ModuleSystem, transform_cjs_to_esm};
pub use detype::detype;
