use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("correct answers ({correct}) exceed questions played ({total})")]
    CountMismatch { total: u32, correct: u32 },
}

/// Aggregate summary of a finished play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total_questions: u32,
    correct: u32,
    score: u32,
}

impl SessionSummary {
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` precedes
    /// `started_at`, and `CountMismatch` if more answers are correct than played.
    pub fn new(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total_questions: u32,
        correct: u32,
        score: u32,
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if correct > total_questions {
            return Err(SessionSummaryError::CountMismatch {
                total: total_questions,
                correct,
            });
        }

        Ok(Self {
            started_at,
            completed_at,
            total_questions,
            correct,
            score,
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

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }
}
