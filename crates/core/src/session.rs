//! The answer-validation and game-progression state machine.
//!
//! [`GameSession`] is the single source of truth for scoring, streaks, and
//! question progression. It is explicitly constructed and owned by whoever
//! runs the game; there is no global state. Operations mutate the session in
//! place and hand back typed [`GameEvent`]s for the caller to dispatch, so
//! the machine can be tested without any audio or graphics in sight.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{
    AnswerOption, CourseSummary, CourseSummaryError, GameSettings, OptionId, Question,
    QuestionBank,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// The submitted option id does not belong to the current question.
    /// This is an integration bug, not a wrong answer.
    #[error("option {id} does not belong to the current question")]
    UnknownOption { id: OptionId },

    #[error(transparent)]
    Summary(#[from] CourseSummaryError),
}

//
// ─── EVENTS ────────────────────────────────────────────────────────────────────
//

/// Notifications emitted by session transitions.
///
/// Collaborators (sound, confetti, summary screens) subscribe to these
/// through the services layer; the session itself never performs side
/// effects.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A correct option was dropped on the target.
    AnswerCorrect {
        option_id: OptionId,
        /// Points added to the score, streak bonus included.
        points_awarded: u32,
        /// Streak after this answer.
        streak: u32,
    },
    /// An incorrect option was dropped on the target.
    AnswerIncorrect { option_id: OptionId },
    /// The last question was cleared and acknowledged; the session has
    /// already been reset when this is observed.
    CourseCompleted { summary: CourseSummary },
}

/// Derived progress view for headers and progress bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseProgress {
    /// 1-based number of the question currently shown.
    pub current: usize,
    pub total: usize,
    pub score: u32,
    pub streak: u32,
    pub is_level_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Per-question lifecycle: unanswered → (correct drop) solved → (advance)
/// next question, or back to question 0 with a full reset after the final
/// question. An incorrect drop keeps the question unanswered, with the
/// error notice open until dismissed.
pub struct GameSession {
    bank: QuestionBank,
    settings: GameSettings,
    current_index: usize,
    score: u32,
    streak: u32,
    level_complete: bool,
    error_modal_open: bool,
    last_incorrect: Option<AnswerOption>,
    selected_option: Option<OptionId>,
    dragging: bool,
    incorrect_attempts: u32,
    started_at: DateTime<Utc>,
}

impl GameSession {
    /// Create a session positioned at question 0 with all counters zeroed.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(bank: QuestionBank, settings: GameSettings, started_at: DateTime<Utc>) -> Self {
        Self {
            bank,
            settings,
            current_index: 0,
            score: 0,
            streak: 0,
            level_complete: false,
            error_modal_open: false,
            last_incorrect: None,
            selected_option: None,
            dragging: false,
            incorrect_attempts: 0,
            started_at,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question currently shown.
    ///
    /// # Panics
    ///
    /// Never panics in practice: `current_index` is only ever moved within
    /// the bank's bounds and the bank is non-empty by construction.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.bank
            .question(self.current_index)
            .expect("current_index stays within the bank")
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// True exactly when the current question has been answered correctly
    /// and "next" has not been taken yet.
    #[must_use]
    pub fn is_level_complete(&self) -> bool {
        self.level_complete
    }

    /// True exactly when the most recent answer was wrong and the notice has
    /// not been dismissed.
    #[must_use]
    pub fn is_error_modal_open(&self) -> bool {
        self.error_modal_open
    }

    /// The incorrect option behind the open error notice, if any.
    #[must_use]
    pub fn last_incorrect(&self) -> Option<&AnswerOption> {
        self.last_incorrect.as_ref()
    }

    /// Id of the option that solved the current question, if solved.
    #[must_use]
    pub fn selected_option(&self) -> Option<&OptionId> {
        self.selected_option.as_ref()
    }

    /// Advisory drag flag; drives hover affordances only.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Wrong drops since the session started or last reset.
    #[must_use]
    pub fn incorrect_attempts(&self) -> u32 {
        self.incorrect_attempts
    }

    /// Returns a summary of the current course progress.
    #[must_use]
    pub fn progress(&self) -> CourseProgress {
        CourseProgress {
            current: self.current_index + 1,
            total: self.bank.len(),
            score: self.score,
            streak: self.streak,
            is_level_complete: self.level_complete,
        }
    }

    /// Note that a drag gesture began. Advisory only.
    pub fn start_drag(&mut self) {
        self.dragging = true;
    }

    /// Note that the drag gesture ended, however it ended.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Score an option dropped on the target.
    ///
    /// A solved question is locked: further calls are a no-op and return
    /// `Ok(None)`. Otherwise the correct branch awards
    /// `base_points + streak * streak_bonus_step` (streak taken before the
    /// increment) and marks the level complete; the incorrect branch resets
    /// the streak and opens the error notice. Either branch returns the
    /// event to dispatch.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownOption` if the id does not belong to
    /// the current question's option list.
    pub fn validate_answer(
        &mut self,
        option_id: &OptionId,
    ) -> Result<Option<GameEvent>, SessionError> {
        if self.level_complete {
            return Ok(None);
        }

        let Some(option) = self.current_question().option(option_id) else {
            return Err(SessionError::UnknownOption {
                id: option_id.clone(),
            });
        };
        let option = option.clone();

        if option.is_correct() {
            let points_awarded =
                self.settings.base_points() + self.streak * self.settings.streak_bonus_step();
            self.score += points_awarded;
            self.streak += 1;
            self.level_complete = true;
            self.selected_option = Some(option.id().clone());
            self.error_modal_open = false;

            Ok(Some(GameEvent::AnswerCorrect {
                option_id: option.id().clone(),
                points_awarded,
                streak: self.streak,
            }))
        } else {
            self.streak = 0;
            self.incorrect_attempts += 1;
            self.error_modal_open = true;
            self.selected_option = None;

            let event = GameEvent::AnswerIncorrect {
                option_id: option.id().clone(),
            };
            self.last_incorrect = Some(option);

            Ok(Some(event))
        }
    }

    /// Dismiss the wrong-answer notice. Idempotent; touches nothing else.
    pub fn close_error_modal(&mut self) {
        self.error_modal_open = false;
    }

    /// Move to the next question, or finish the course from the last one.
    ///
    /// Called with the current question unsolved this is a no-op, so an
    /// early "next" can never skip content. On the last question it emits
    /// `GameEvent::CourseCompleted` carrying the pre-reset score and resets
    /// every field to its initial value, with `now` as the new start time.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Summary` if `now` precedes the session start.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Option<GameEvent>, SessionError> {
        if !self.level_complete {
            return Ok(None);
        }

        if self.current_index < self.bank.last_index() {
            self.current_index += 1;
            self.level_complete = false;
            self.selected_option = None;
            return Ok(None);
        }

        let summary = CourseSummary::new(
            self.started_at,
            now,
            self.score,
            u32::try_from(self.bank.len()).unwrap_or(u32::MAX),
            self.incorrect_attempts,
        )?;

        self.current_index = 0;
        self.score = 0;
        self.streak = 0;
        self.level_complete = false;
        self.error_modal_open = false;
        self.last_incorrect = None;
        self.selected_option = None;
        self.dragging = false;
        self.incorrect_attempts = 0;
        self.started_at = now;

        Ok(Some(GameEvent::CourseCompleted { summary }))
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("questions", &self.bank.len())
            .field("current_index", &self.current_index)
            .field("score", &self.score)
            .field("streak", &self.streak)
            .field("level_complete", &self.level_complete)
            .field("error_modal_open", &self.error_modal_open)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
