//! Shared error types for the services crate.

use thiserror::Error;

use surf_core::answer::AnswerError;
use surf_core::model::{EquationError, QuestionError, QuestionId, SessionSummaryError};

use crate::game::{GameAction, ModeKind};

/// Errors emitted while loading or drawing from a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question {id} is invalid: {source}")]
    InvalidQuestion {
        id: QuestionId,
        #[source]
        source: QuestionError,
    },
    #[error("question {id} has an invalid equation: {source}")]
    InvalidEquation {
        id: QuestionId,
        #[source]
        source: EquationError,
    },
    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),
}

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("invalid answer: {0}")]
    InvalidInput(#[from] AnswerError),
    #[error("current question was already answered")]
    AlreadyAnswered,
    #[error("current question has not been answered yet")]
    Unanswered,
    #[error("session already completed")]
    Completed,
    #[error(transparent)]
    Bank(#[from] QuestionBankError),
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}

/// Errors emitted by the game state machine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error("cannot {action:?} while in {from:?}")]
    InvalidTransition { from: ModeKind, action: GameAction },
    #[error(transparent)]
    Session(#[from] SessionError),
}
