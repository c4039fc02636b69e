use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Prompter;

/// One scripted reply, consumed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Accept whatever default the prompt offers.
    Default,
    /// Behave as if the user pressed Esc.
    Cancel,
    Confirm(bool),
    Select(usize),
    Input(String),
}

/// Prompter replaying a fixed script. Once the script runs out every prompt takes its default.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: Mutex<VecDeque<ScriptedAnswer>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(script: Vec<ScriptedAnswer>) -> Self {
        Self { script: Mutex::new(script.into()), asked: Mutex::new(Vec::new()) }
    }

    pub fn accept_defaults() -> Self {
        Self::default()
    }

    /// Messages of every prompt shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    fn next(&self, message: &str) -> ScriptedAnswer {
        self.asked.lock().unwrap().push(message.to_string());
        self.script.lock().unwrap().pop_front().unwrap_or(ScriptedAnswer::Default)
    }
}

fn unexpected(message: &str, answer: &ScriptedAnswer) -> AppError {
    AppError::Prompt(format!("scripted answer {answer:?} does not fit prompt '{message}'"))
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<Option<bool>, AppError> {
        match self.next(message) {
            ScriptedAnswer::Default => Ok(Some(default)),
            ScriptedAnswer::Cancel => Ok(None),
            ScriptedAnswer::Confirm(value) => Ok(Some(value)),
            other => Err(unexpected(message, &other)),
        }
    }

    fn select(
        &self,
        message: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        match self.next(message) {
            ScriptedAnswer::Default => Ok(Some(default)),
            ScriptedAnswer::Cancel => Ok(None),
            ScriptedAnswer::Select(index) if index < items.len() => Ok(Some(index)),
            other => Err(unexpected(message, &other)),
        }
    }

    fn input(&self, message: &str, default: &str) -> Result<Option<String>, AppError> {
        match self.next(message) {
            ScriptedAnswer::Default => Ok(Some(default.to_string())),
            ScriptedAnswer::Cancel => Ok(None),
            ScriptedAnswer::Input(value) => Ok(Some(value)),
            other => Err(unexpected(message, &other)),
        }
    }
}
