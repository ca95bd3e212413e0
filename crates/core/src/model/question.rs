use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::{OptionId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question title cannot be empty")]
    EmptyTitle,

    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("source label cannot be empty")]
    EmptySourceLabel,

    #[error("destination label cannot be empty")]
    EmptyDestLabel,

    #[error("question must have at least one option")]
    NoOptions,

    #[error("option id cannot be empty")]
    EmptyOptionId,

    #[error("option label cannot be empty: {id}")]
    EmptyOptionLabel { id: OptionId },

    #[error("option explanation cannot be empty: {id}")]
    EmptyOptionExplanation { id: OptionId },

    #[error("duplicate option id: {id}")]
    DuplicateOptionId { id: OptionId },

    #[error("question has no correct option")]
    NoCorrectOption,

    #[error("question has {count} correct options, expected exactly one")]
    MultipleCorrectOptions { count: usize },
}

//
// ─── CONTENT TAGS ──────────────────────────────────────────────────────────────
//

/// Icon category shown on an option card. Presentational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Gateway,
    Nat,
    Balancer,
    Vpn,
    Peering,
    Endpoint,
    Transit,
    Egress,
    Accelerator,
    DirectConnect,
    Cdn,
}

/// Selects the diagram variant drawn for a question. Not consumed by the
/// progression logic; carried through for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    InternetOutbound,
    InternetInbound,
    S3Private,
    VpcPeering,
    Vpn,
    LoadBalancing,
    Transit,
    Ipv6,
    Global,
    Hybrid,
    Edge,
}

/// Difficulty rating supplied by the content bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// Raw answer option as it appears in the content bank, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDraft {
    pub id: String,
    pub label: String,
    pub icon_type: IconKind,
    pub correct: bool,
    pub explanation: String,
}

/// Raw question as it appears in the content bank, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub id: String,
    pub title: String,
    pub prompt: String,
    pub scenario_type: ScenarioKind,
    pub source_label: String,
    pub dest_label: String,
    pub options: Vec<OptionDraft>,
    pub difficulty: Difficulty,
}

impl OptionDraft {
    fn validate(self) -> Result<AnswerOption, QuestionError> {
        if self.id.trim().is_empty() {
            return Err(QuestionError::EmptyOptionId);
        }
        let id = OptionId::new(self.id);
        if self.label.trim().is_empty() {
            return Err(QuestionError::EmptyOptionLabel { id });
        }
        if self.explanation.trim().is_empty() {
            return Err(QuestionError::EmptyOptionExplanation { id });
        }

        Ok(AnswerOption {
            id,
            label: self.label,
            icon: self.icon_type,
            correct: self.correct,
            explanation: self.explanation,
        })
    }
}

impl QuestionDraft {
    /// Validate the draft into an immutable [`Question`].
    ///
    /// Enforces the content contract the game logic relies on: non-empty
    /// text fields, unique option ids, and exactly one correct option.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` encountered.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.id.trim().is_empty() {
            return Err(QuestionError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(QuestionError::EmptyTitle);
        }
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.source_label.trim().is_empty() {
            return Err(QuestionError::EmptySourceLabel);
        }
        if self.dest_label.trim().is_empty() {
            return Err(QuestionError::EmptyDestLabel);
        }
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let mut options = Vec::with_capacity(self.options.len());
        for draft in self.options {
            let option = draft.validate()?;
            if options.iter().any(|o: &AnswerOption| o.id == option.id) {
                return Err(QuestionError::DuplicateOptionId { id: option.id });
            }
            options.push(option);
        }

        let correct_count = options.iter().filter(|o| o.correct).count();
        match correct_count {
            0 => return Err(QuestionError::NoCorrectOption),
            1 => {}
            count => return Err(QuestionError::MultipleCorrectOptions { count }),
        }

        Ok(Question {
            id: QuestionId::new(self.id),
            title: self.title,
            prompt: self.prompt,
            scenario: self.scenario_type,
            source_label: self.source_label,
            dest_label: self.dest_label,
            options,
            difficulty: self.difficulty,
        })
    }
}

//
// ─── VALIDATED MODEL ───────────────────────────────────────────────────────────
//

/// A draggable answer option of a validated question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    id: OptionId,
    label: String,
    icon: IconKind,
    correct: bool,
    explanation: String,
}

impl AnswerOption {
    #[must_use]
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn icon(&self) -> IconKind {
        self.icon
    }

    /// Whether this option satisfies its parent question.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// Explanation shown after the option is chosen, right or wrong.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// A validated quiz question: immutable once constructed, with exactly one
/// correct option among a non-empty ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    title: String,
    prompt: String,
    scenario: ScenarioKind,
    source_label: String,
    dest_label: String,
    options: Vec<AnswerOption>,
    difficulty: Difficulty,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn scenario(&self) -> ScenarioKind {
        self.scenario
    }

    #[must_use]
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    #[must_use]
    pub fn dest_label(&self) -> &str {
        &self.dest_label
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Looks up an option by id within this question.
    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == *id)
    }

    /// The single correct option, guaranteed by validation.
    ///
    /// # Panics
    ///
    /// Panics only if the validation invariant was bypassed; a `Question`
    /// cannot be constructed without exactly one correct option.
    #[must_use]
    pub fn correct_option(&self) -> &AnswerOption {
        self.options
            .iter()
            .find(|o| o.correct)
            .expect("validated question has exactly one correct option")
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
