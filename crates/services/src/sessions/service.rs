use chrono::{DateTime, Utc};
use std::fmt;

use surf_core::answer::{self, AnswerField, Verdict};
use surf_core::model::{GameSettings, Question, SessionSummary, Solution};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// Result of submitting an answer; carries the known solution either way so
/// the UI can show it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feedback {
    Correct { solution: Solution, points: u32 },
    Incorrect { solution: Solution },
}

impl Feedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct { .. })
    }

    #[must_use]
    pub fn solution(&self) -> Solution {
        match self {
            Feedback::Correct { solution, .. } | Feedback::Incorrect { solution } => *solution,
        }
    }
}

/// What happened after moving past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    NextQuestion,
    SessionComplete { final_score: u32 },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through over a fixed, ordered list of questions.
///
/// Steps through the questions sequentially: exactly one submission per
/// question, then `advance`. Score only grows, by `points_per_correct` for
/// each correct answer.
pub struct SessionService {
    questions: Vec<Question>,
    settings: GameSettings,
    index: usize,
    score: u32,
    correct: u32,
    feedback: Option<Feedback>,
    started_at: DateTime<Utc>,
    summary: Option<SessionSummary>,
}

impl SessionService {
    /// Create a session over at most `questions_per_session` of the given questions.
    ///
    /// `started_at` should come from the services layer clock to keep time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(
        mut questions: Vec<Question>,
        settings: GameSettings,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let limit = usize::try_from(settings.questions_per_session()).unwrap_or(usize::MAX);
        questions.truncate(limit);

        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            settings,
            index: 0,
            score: 0,
            correct: 0,
            feedback: None,
            started_at,
            summary: None,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    /// 0-based index of the current question; never past the last question.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.index]
    }

    /// Feedback for the current question, once it has been answered.
    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let answered = self.index + usize::from(self.feedback.is_some());
        SessionProgress {
            position: self.index + 1,
            total: self.total_questions(),
            answered,
            is_complete: self.is_complete(),
        }
    }

    /// Check a typed answer against the current question's solution.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidInput` if either field is not a finite
    /// number; nothing changes and the same question stays open.
    /// Returns `SessionError::AlreadyAnswered` on a second submission and
    /// `SessionError::Completed` once the session is over.
    pub fn submit_answer(&mut self, raw_x: &str, raw_y: &str) -> Result<Feedback, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.feedback.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }

        let x = answer::parse_answer(raw_x, AnswerField::X)?;
        let y = answer::parse_answer(raw_y, AnswerField::Y)?;

        let question = &self.questions[self.index];
        let solution = question.solution();
        let feedback = match answer::evaluate(&solution, x, y, self.settings.answer_tolerance()) {
            Verdict::Correct => {
                let points = self.settings.points_per_correct();
                self.score = self.score.saturating_add(points);
                self.correct += 1;
                Feedback::Correct { solution, points }
            }
            Verdict::Incorrect => Feedback::Incorrect { solution },
        };
        log::debug!(
            "question {} answered ({x}, {y}): correct={}, score={}",
            question.id(),
            feedback.is_correct(),
            self.score
        );

        self.feedback = Some(feedback);
        Ok(feedback)
    }

    /// Move past the answered current question.
    ///
    /// `now` stamps completion when this was the last question; a `now`
    /// earlier than the start (clock stepped back) is treated as the start.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unanswered` if the current question has no
    /// feedback yet and `SessionError::Completed` if the session is over.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<SessionOutcome, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.feedback.is_none() {
            return Err(SessionError::Unanswered);
        }

        if self.is_last_question() {
            let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
            let completed_at = now.max(self.started_at);
            let summary = SessionSummary::new(
                self.started_at,
                completed_at,
                total,
                self.correct,
                self.score,
            )?;
            self.summary = Some(summary);
            log::info!(
                "session complete: {}/{total} correct, score {}",
                self.correct,
                self.score
            );
            return Ok(SessionOutcome::SessionComplete {
                final_score: self.score,
            });
        }

        self.index += 1;
        self.feedback = None;
        Ok(SessionOutcome::NextQuestion)
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("questions_len", &self.questions.len())
            .field("index", &self.index)
            .field("score", &self.score)
            .field("feedback", &self.feedback)
            .field("started_at", &self.started_at)
            .field("complete", &self.is_complete())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
