use thiserror::Error;

/// Number of questions drawn for one session.
pub const DEFAULT_QUESTIONS_PER_SESSION: u32 = 15;
/// Points awarded per correct answer.
pub const DEFAULT_POINTS_PER_CORRECT: u32 = 100;
/// Slack when comparing typed answers to the known solution.
pub const DEFAULT_ANSWER_TOLERANCE: f64 = 0.01;

/// Tunables for a play session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameSettings {
    questions_per_session: u32,
    points_per_correct: u32,
    answer_tolerance: f64,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GameSettingsDraft {
    pub questions_per_session: Option<u32>,
    pub points_per_correct: Option<u32>,
    pub answer_tolerance: Option<f64>,
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("a session needs at least one question")]
    NoQuestions,
    #[error("points per correct answer must be positive")]
    NoPoints,
    #[error("answer tolerance must be a positive finite number, got {0}")]
    InvalidTolerance(f64),
}

impl GameSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft, filling unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` for a zero question count, zero points or a
    /// tolerance that is not positive and finite.
    pub fn validate(self) -> Result<GameSettings, SettingsError> {
        let questions_per_session = self
            .questions_per_session
            .unwrap_or(DEFAULT_QUESTIONS_PER_SESSION);
        let points_per_correct = self.points_per_correct.unwrap_or(DEFAULT_POINTS_PER_CORRECT);
        let answer_tolerance = self.answer_tolerance.unwrap_or(DEFAULT_ANSWER_TOLERANCE);

        if questions_per_session == 0 {
            return Err(SettingsError::NoQuestions);
        }
        if points_per_correct == 0 {
            return Err(SettingsError::NoPoints);
        }
        if !answer_tolerance.is_finite() || answer_tolerance <= 0.0 {
            return Err(SettingsError::InvalidTolerance(answer_tolerance));
        }

        Ok(GameSettings {
            questions_per_session,
            points_per_correct,
            answer_tolerance,
        })
    }
}

impl GameSettings {
    #[must_use]
    pub fn questions_per_session(&self) -> u32 {
        self.questions_per_session
    }

    #[must_use]
    pub fn points_per_correct(&self) -> u32 {
        self.points_per_correct
    }

    #[must_use]
    pub fn answer_tolerance(&self) -> f64 {
        self.answer_tolerance
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            questions_per_session: DEFAULT_QUESTIONS_PER_SESSION,
            points_per_correct: DEFAULT_POINTS_PER_CORRECT,
            answer_tolerance: DEFAULT_ANSWER_TOLERANCE,
        }
    }
}
