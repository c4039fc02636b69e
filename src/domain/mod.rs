pub mod config;
pub mod error;
pub mod framework;
pub mod package_manager;
pub mod questions;
pub mod registry;
pub mod transform;

pub use config::{
    Aliases, CONFIG_FILE, Config, PathKey, RawConfig, ResolvedConfig, ResolvedPaths, SCHEMA_URL,
    TailwindConfig, TsconfigPaths,
};
pub use error::AppError;
pub use framework::Framework;
pub use package_manager::{PackageManager, compose_dependencies};
pub use questions::{AnswerValue, Answers, PromptOutcome, Question, QuestionKey, QuestionKind};
pub use registry::{BaseColor, BaseColorTemplates, Style};
