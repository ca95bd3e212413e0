//! Shared error types for the services crate.

use thiserror::Error;

use quest_core::model::BankError;
use quest_core::session::SessionError;

/// Errors emitted while loading and validating a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Bank(#[from] BankError),
}

/// Errors emitted by `GameLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
}
