mod equation;
mod ids;
mod question;
mod settings;
mod summary;

pub use ids::{ParseIdError, QuestionId};

pub use equation::{Equation, EquationError, Line, Solution};
pub use question::{
    DETERMINANT_RELATIVE_TOLERANCE, Question, QuestionDraft, QuestionError, SOLUTION_CHECK_TOLERANCE,
};
pub use settings::{
    DEFAULT_ANSWER_TOLERANCE, DEFAULT_POINTS_PER_CORRECT, DEFAULT_QUESTIONS_PER_SESSION,
    GameSettings, GameSettingsDraft, SettingsError,
};
pub use summary::{SessionSummary, SessionSummaryError};
