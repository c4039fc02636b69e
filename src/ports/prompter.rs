use crate::domain::AppError;

/// Port for interactive questions.
///
/// Every method returns `Ok(None)` when the user cancels the prompt.
pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<Option<bool>, AppError>;

    /// Pick one of `items`; returns the selected index.
    fn select(&self, message: &str, items: &[String], default: usize)
    -> Result<Option<usize>, AppError>;

    /// Ask for free text. Empty input keeps `default`.
    fn input(&self, message: &str, default: &str) -> Result<Option<String>, AppError>;
}
