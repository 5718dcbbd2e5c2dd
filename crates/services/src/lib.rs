#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod question_bank;
pub mod sessions;

pub use surf_core::Clock;
pub use sessions as session;

pub use error::{GameError, QuestionBankError, SessionError};
pub use game::{GameAction, GameMachine, GameMode, GameResult, ModeKind};
pub use question_bank::{QuestionBank, QuestionPool, StaticQuestionBank};
pub use sessions::{Feedback, SessionOutcome, SessionProgress, SessionService};
