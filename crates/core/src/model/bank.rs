use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank cannot be empty")]
    Empty,

    #[error("duplicate question id: {id}")]
    DuplicateQuestionId { id: QuestionId },

    #[error("invalid question {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// The ordered course content: a non-empty list of validated questions with
/// unique ids. Supplied once at startup and immutable for the session's
/// lifetime.
///
/// Malformed content is rejected here, before any session starts; the game
/// logic itself never re-checks the content contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already-validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and
    /// `BankError::DuplicateQuestionId` when two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        for (index, question) in questions.iter().enumerate() {
            if questions[..index].iter().any(|q| q.id() == question.id()) {
                return Err(BankError::DuplicateQuestionId {
                    id: question.id().clone(),
                });
            }
        }

        Ok(Self { questions })
    }

    /// Validate raw drafts and build a bank from them.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Question` naming the offending draft index, or
    /// the bank-level errors of [`QuestionBank::new`].
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, BankError> {
        let mut questions = Vec::with_capacity(drafts.len());
        for (index, draft) in drafts.into_iter().enumerate() {
            let question = draft
                .validate()
                .map_err(|source| BankError::Question { index, source })?;
            questions.push(question);
        }
        Self::new(questions)
    }

    /// Number of questions in the course.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// A validated bank is never empty; kept for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the final question.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
