mod bank;
mod ids;
mod question;
mod settings;
mod summary;

pub use bank::{BankError, QuestionBank};
pub use ids::{OptionId, QuestionId};

pub use question::{
    AnswerOption, Difficulty, IconKind, OptionDraft, Question, QuestionDraft, QuestionError,
    ScenarioKind,
};
pub use settings::{GameSettings, GameSettingsError};
pub use summary::{CourseSummary, CourseSummaryError};
