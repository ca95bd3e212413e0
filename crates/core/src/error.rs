use thiserror::Error;

use crate::model::{BankError, GameSettingsError, QuestionError};
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Settings(#[from] GameSettingsError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
