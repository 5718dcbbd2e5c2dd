use services::{GameError, SessionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidInput,
    EmptyBank,
    LoadFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::InvalidInput => "Please enter numeric values for X and Y.",
            ViewError::EmptyBank => "No questions are available. Check the question bank.",
            ViewError::LoadFailed => "The questions could not be loaded. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }

    /// Map service failures at the UI boundary.
    #[must_use]
    pub fn from_game(err: &GameError) -> Self {
        match err {
            GameError::Session(SessionError::InvalidInput(_)) => ViewError::InvalidInput,
            GameError::Session(SessionError::Empty) => ViewError::EmptyBank,
            GameError::Session(SessionError::Bank(_)) => ViewError::LoadFailed,
            _ => ViewError::Unknown,
        }
    }
}
