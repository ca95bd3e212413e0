//! Question-bank acquisition.
//!
//! The content bank is supplied once at startup and validated before any
//! session starts; a malformed bank is a fatal configuration error, never a
//! partially playable course.

use std::fs;
use std::path::Path;

use quest_core::model::{QuestionBank, QuestionDraft};

use crate::error::ContentError;

const BUILTIN_QUESTIONS: &str = include_str!("data/questions.json");

/// Parse and validate a question bank from its JSON wire format.
///
/// # Errors
///
/// Returns `ContentError::Parse` for malformed JSON and
/// `ContentError::Bank` when the content contract is violated.
pub fn bank_from_json(json: &str) -> Result<QuestionBank, ContentError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
    Ok(QuestionBank::from_drafts(drafts)?)
}

/// Load and validate a question bank from a JSON file.
///
/// # Errors
///
/// Returns `ContentError::Io` if the file cannot be read, plus the errors
/// of [`bank_from_json`].
pub fn bank_from_path(path: &Path) -> Result<QuestionBank, ContentError> {
    let json = fs::read_to_string(path)?;
    bank_from_json(&json)
}

/// The cloud-networking course bundled with the game.
///
/// # Errors
///
/// Returns `ContentError` if the bundled bank fails to parse or validate.
/// This indicates a broken build rather than a runtime condition.
pub fn builtin_bank() -> Result<QuestionBank, ContentError> {
    bank_from_json(BUILTIN_QUESTIONS)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
