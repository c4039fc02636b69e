//! Terminal prompts backed by dialoguer.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(message: &str, err: DialoguerError) -> AppError {
    AppError::Prompt(format!("Failed to read answer to '{}': {}", message, err))
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<Option<bool>, AppError> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact_opt()
            .map_err(|err| prompt_error(message, err))
    }

    fn select(
        &self,
        message: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        Select::new()
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(|err| prompt_error(message, err))
    }

    fn input(&self, message: &str, default: &str) -> Result<Option<String>, AppError> {
        let answer = Input::<String>::new()
            .with_prompt(message)
            .default(default.to_string())
            .interact_text();

        match answer {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(prompt_error(message, err)),
        }
    }
}
