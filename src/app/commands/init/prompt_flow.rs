//! Walks the init questions through a `Prompter`.

use crate::domain::questions::{CONFIRM_MESSAGE, questions};
use crate::domain::{
    AnswerValue, Answers, AppError, Config, Framework, PromptOutcome, Question, QuestionKey,
    QuestionKind, RawConfig,
};
use crate::ports::{Prompter, Registry};

/// Identifier and label of a select choice.
struct Choice {
    id: String,
    label: String,
}

/// Ask every question in order, then confirm unless `yes` is set.
///
/// Cancelling any prompt or declining the confirmation ends the flow with
/// [`PromptOutcome::Cancelled`]; nothing is validated or written in that case.
pub fn run_prompts<R: Registry, P: Prompter>(
    registry: &R,
    prompter: &P,
    existing: Option<&RawConfig>,
    yes: bool,
) -> Result<PromptOutcome, AppError> {
    let styles = registry.styles()?;
    let base_colors = registry.base_colors()?;

    let mut answers = Answers::default();
    for question in questions() {
        let default = question.default_value(&answers, existing);

        let answer = match question.kind {
            QuestionKind::Confirm => prompter
                .confirm(question.message, default.as_flag().unwrap_or(true))?
                .map(AnswerValue::Flag),
            QuestionKind::Select => {
                let choices: Vec<Choice> = match question.key {
                    QuestionKey::Framework => Framework::ALL
                        .iter()
                        .map(|f| Choice { id: f.id().to_string(), label: f.label().to_string() })
                        .collect(),
                    QuestionKey::Style => styles
                        .iter()
                        .map(|s| Choice { id: s.name.clone(), label: s.label.clone() })
                        .collect(),
                    _ => base_colors
                        .iter()
                        .map(|c| Choice { id: c.name.clone(), label: c.label.clone() })
                        .collect(),
                };
                select(prompter, question, &choices, &default)?
            }
            QuestionKind::Input => {
                let fallback = default.as_text().unwrap_or_default();
                prompter.input(question.message, fallback)?.map(|value| {
                    if value.trim().is_empty() {
                        AnswerValue::Text(fallback.to_string())
                    } else {
                        AnswerValue::Text(value)
                    }
                })
            }
        };

        let Some(answer) = answer else {
            tracing::debug!(question = ?question.key, "Prompt cancelled");
            return Ok(PromptOutcome::Cancelled);
        };
        answers.record(question.key, answer);
    }

    if !yes && prompter.confirm(CONFIRM_MESSAGE, true)? != Some(true) {
        return Ok(PromptOutcome::Cancelled);
    }

    let config = Config::validate(answers.into_raw_config(existing))?;
    Ok(PromptOutcome::Confirmed(config))
}

fn select<P: Prompter>(
    prompter: &P,
    question: &Question,
    choices: &[Choice],
    default: &AnswerValue,
) -> Result<Option<AnswerValue>, AppError> {
    let default_id = default.as_text().unwrap_or_default();

    if choices.is_empty() {
        tracing::warn!(
            question = ?question.key,
            default = default_id,
            "No choices available, using default"
        );
        return Ok(Some(default.clone()));
    }

    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let default_index = choices.iter().position(|c| c.id == default_id).unwrap_or(0);

    let selection = prompter.select(question.message, &labels, default_index)?;
    Ok(selection
        .and_then(|index| choices.get(index))
        .map(|choice| AnswerValue::Text(choice.id.clone())))
}
