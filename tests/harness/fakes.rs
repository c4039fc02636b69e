//! Port implementations for driving the library without a terminal or package manager.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use shade::domain::{AppError, PackageManager};
use shade::ports::{PackageInstaller, Prompter};

/// Accepts every default, then answers the final confirmation with `proceed`.
pub(crate) struct DefaultsPrompter {
    proceed: bool,
    pub(crate) asked: RefCell<Vec<String>>,
}

impl DefaultsPrompter {
    pub(crate) fn proceeding() -> Self {
        Self { proceed: true, asked: RefCell::new(Vec::new()) }
    }

    pub(crate) fn declining() -> Self {
        Self { proceed: false, asked: RefCell::new(Vec::new()) }
    }

    fn record(&self, message: &str) {
        self.asked.borrow_mut().push(message.to_string());
    }
}

impl Prompter for DefaultsPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<Option<bool>, AppError> {
        self.record(message);
        if message.contains("components.json") {
            return Ok(Some(self.proceed));
        }
        Ok(Some(default))
    }

    fn select(
        &self,
        message: &str,
        _items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        self.record(message);
        Ok(Some(default))
    }

    fn input(&self, message: &str, default: &str) -> Result<Option<String>, AppError> {
        self.record(message);
        Ok(Some(default.to_string()))
    }
}

/// A user's reply to one prompt.
pub(crate) enum Answer {
    Yes,
    No,
    Choose(&'static str),
    Type(&'static str),
}

/// Answers each prompt from a script keyed by a fragment of its message.
pub(crate) struct ScriptedAnswers {
    answers: Vec<(&'static str, Answer)>,
    pub(crate) asked: RefCell<Vec<String>>,
}

impl ScriptedAnswers {
    pub(crate) fn new(answers: Vec<(&'static str, Answer)>) -> Self {
        Self { answers, asked: RefCell::new(Vec::new()) }
    }

    fn answer(&self, message: &str) -> &Answer {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .iter()
            .find(|(fragment, _)| message.contains(fragment))
            .map(|(_, answer)| answer)
            .unwrap_or_else(|| panic!("no scripted answer for {message:?}"))
    }
}

impl Prompter for ScriptedAnswers {
    fn confirm(&self, message: &str, _default: bool) -> Result<Option<bool>, AppError> {
        match self.answer(message) {
            Answer::Yes => Ok(Some(true)),
            Answer::No => Ok(Some(false)),
            _ => panic!("{message:?} expects a yes/no answer"),
        }
    }

    fn select(
        &self,
        message: &str,
        items: &[String],
        _default: usize,
    ) -> Result<Option<usize>, AppError> {
        let Answer::Choose(label) = self.answer(message) else {
            panic!("{message:?} expects a choice");
        };
        let index = items
            .iter()
            .position(|item| item == label)
            .unwrap_or_else(|| panic!("{label:?} is not among {items:?}"));
        Ok(Some(index))
    }

    fn input(&self, message: &str, _default: &str) -> Result<Option<String>, AppError> {
        let Answer::Type(text) = self.answer(message) else {
            panic!("{message:?} expects typed input");
        };
        Ok(Some(text.to_string()))
    }
}

/// Records install requests.
#[derive(Default)]
pub(crate) struct RecordingInstaller {
    pub(crate) calls: RefCell<Vec<(PathBuf, PackageManager, Vec<String>)>>,
}

impl PackageInstaller for RecordingInstaller {
    fn install(
        &self,
        root: &Path,
        manager: PackageManager,
        dependencies: &[String],
    ) -> Result<(), AppError> {
        self.calls.borrow_mut().push((root.to_path_buf(), manager, dependencies.to_vec()));
        Ok(())
    }
}
