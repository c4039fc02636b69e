//! The ordered `init` questions and the rules for their default answers.

use crate::domain::config::{
    Config, RawAliases, RawConfig, RawTailwindConfig, SCHEMA_URL,
};
use crate::domain::Framework;

pub const DEFAULT_STYLE: &str = "default";
pub const DEFAULT_BASE_COLOR: &str = "slate";
pub const DEFAULT_COMPONENTS_ALIAS: &str = "@/components";
pub const DEFAULT_UTILS_ALIAS: &str = "@/lib/utils";

/// Identifies a question and the answer slot it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKey {
    Typescript,
    Framework,
    Style,
    BaseColor,
    TailwindCss,
    CssVariables,
    TailwindConfig,
    Components,
    Utils,
}

/// How a question is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Yes/no toggle.
    Confirm,
    /// One of a list of labelled choices.
    Select,
    /// Free text.
    Input,
}

/// A single answer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
}

impl AnswerValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AnswerValue::Flag(flag) => Some(*flag),
            AnswerValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            AnswerValue::Flag(_) => None,
        }
    }
}

type DefaultFn = fn(&Answers, Option<&RawConfig>) -> AnswerValue;

/// Question descriptor.
pub struct Question {
    pub key: QuestionKey,
    pub message: &'static str,
    pub kind: QuestionKind,
    default: DefaultFn,
}

impl Question {
    /// Default for this question given earlier answers and any existing config.
    pub fn default_value(&self, answers: &Answers, existing: Option<&RawConfig>) -> AnswerValue {
        (self.default)(answers, existing)
    }
}

impl std::fmt::Debug for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("key", &self.key)
            .field("message", &self.message)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Message shown before `components.json` is written.
pub const CONFIRM_MESSAGE: &str = "Write configuration to components.json. Proceed?";

static QUESTIONS: [Question; 9] = [
    Question {
        key: QuestionKey::Typescript,
        message: "Would you like to use TypeScript (recommended)?",
        kind: QuestionKind::Confirm,
        default: |_, existing| {
            AnswerValue::Flag(existing.and_then(|c| c.typescript).unwrap_or(true))
        },
    },
    Question {
        key: QuestionKey::Framework,
        message: "Which framework are you using?",
        kind: QuestionKind::Select,
        default: |_, existing| {
            let framework = existing.and_then(RawConfig::known_framework).unwrap_or_default();
            AnswerValue::Text(framework.id().to_string())
        },
    },
    Question {
        key: QuestionKey::Style,
        message: "Which style would you like to use?",
        kind: QuestionKind::Select,
        default: |_, existing| {
            text(existing.and_then(|c| c.style.as_deref()), DEFAULT_STYLE)
        },
    },
    Question {
        key: QuestionKey::BaseColor,
        message: "Which color would you like to use as base color?",
        kind: QuestionKind::Select,
        default: |_, existing| text(existing.and_then(RawConfig::base_color), DEFAULT_BASE_COLOR),
    },
    Question {
        key: QuestionKey::TailwindCss,
        message: "Where is your global CSS file? (this file will be overwritten)",
        kind: QuestionKind::Input,
        default: |answers, existing| {
            text(
                existing.and_then(RawConfig::tailwind_css),
                answers.framework_or_default().default_tailwind_css(),
            )
        },
    },
    Question {
        key: QuestionKey::CssVariables,
        message: "Would you like to use CSS variables for colors?",
        kind: QuestionKind::Confirm,
        default: |_, existing| {
            AnswerValue::Flag(existing.and_then(RawConfig::css_variables).unwrap_or(true))
        },
    },
    Question {
        key: QuestionKey::TailwindConfig,
        message: "Where is your tailwind.config located? (this file will be overwritten)",
        kind: QuestionKind::Input,
        default: |answers, existing| {
            text(
                existing.and_then(RawConfig::tailwind_config),
                answers.framework_or_default().default_tailwind_config(),
            )
        },
    },
    Question {
        key: QuestionKey::Components,
        message: "Configure the import alias for components:",
        kind: QuestionKind::Input,
        default: |_, existing| {
            text(existing.and_then(RawConfig::components_alias), DEFAULT_COMPONENTS_ALIAS)
        },
    },
    Question {
        key: QuestionKey::Utils,
        message: "Configure the import alias for utils:",
        kind: QuestionKind::Input,
        default: |_, existing| text(existing.and_then(RawConfig::utils_alias), DEFAULT_UTILS_ALIAS),
    },
];

fn text(existing: Option<&str>, fallback: &str) -> AnswerValue {
    AnswerValue::Text(existing.unwrap_or(fallback).to_string())
}

/// All questions in the order they are asked.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Answers collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub typescript: Option<bool>,
    pub framework: Option<String>,
    pub style: Option<String>,
    pub base_color: Option<String>,
    pub tailwind_css: Option<String>,
    pub css_variables: Option<bool>,
    pub tailwind_config: Option<String>,
    pub components: Option<String>,
    pub utils: Option<String>,
}

impl Answers {
    /// Framework answered so far, or the default when unanswered or unknown.
    pub fn framework_or_default(&self) -> Framework {
        self.framework.as_deref().and_then(Framework::from_id).unwrap_or_default()
    }

    /// Store `value` under `key`. A value of the wrong shape leaves the slot empty.
    pub fn record(&mut self, key: QuestionKey, value: AnswerValue) {
        let flag = value.as_flag();
        let text = value.as_text().map(str::to_string);
        match key {
            QuestionKey::Typescript => self.typescript = flag,
            QuestionKey::Framework => self.framework = text,
            QuestionKey::Style => self.style = text,
            QuestionKey::BaseColor => self.base_color = text,
            QuestionKey::TailwindCss => self.tailwind_css = text,
            QuestionKey::CssVariables => self.css_variables = flag,
            QuestionKey::TailwindConfig => self.tailwind_config = text,
            QuestionKey::Components => self.components = text,
            QuestionKey::Utils => self.utils = text,
        }
    }

    /// Raw configuration for validation, keeping an existing `$schema`.
    pub fn into_raw_config(self, existing: Option<&RawConfig>) -> RawConfig {
        let schema = existing
            .and_then(|c| c.schema.clone())
            .unwrap_or_else(|| SCHEMA_URL.to_string());

        RawConfig {
            schema: Some(schema),
            style: self.style,
            typescript: self.typescript,
            tailwind: Some(RawTailwindConfig {
                config: self.tailwind_config,
                css: self.tailwind_css,
                base_color: self.base_color,
                css_variables: self.css_variables,
            }),
            framework: self.framework,
            aliases: Some(RawAliases { components: self.components, utils: self.utils }),
        }
    }
}

/// Result of the interactive flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Answers were confirmed and validated.
    Confirmed(Config),
    /// The user cancelled a prompt or declined to write the configuration.
    Cancelled,
}
