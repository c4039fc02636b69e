//! shade: initialize Tailwind config, theme CSS and the `cn` utility for Vue component projects.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{InitOptions, InitOutcome, InitReport, init, init_at, init_with};
pub use domain::{AppError, Config, Framework, PackageManager};
