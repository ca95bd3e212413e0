use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,
}

/// Aggregate summary for a completed course run, emitted with the
/// course-complete event before the session resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    final_score: u32,
    questions: u32,
    incorrect_attempts: u32,
}

impl CourseSummary {
    /// Build a summary for a finished run.
    ///
    /// # Errors
    ///
    /// Returns `CourseSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`.
    pub fn new(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        final_score: u32,
        questions: u32,
        incorrect_attempts: u32,
    ) -> Result<Self, CourseSummaryError> {
        if completed_at < started_at {
            return Err(CourseSummaryError::InvalidTimeRange);
        }

        Ok(Self {
            started_at,
            completed_at,
            final_score,
            questions,
            incorrect_attempts,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Score at the moment the last question was cleared, before the reset.
    #[must_use]
    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    #[must_use]
    pub fn questions(&self) -> u32 {
        self.questions
    }

    /// Total wrong drops across the whole run.
    #[must_use]
    pub fn incorrect_attempts(&self) -> u32 {
        self.incorrect_attempts
    }
}
