//! Top-level game flow: Start -> Playing -> GameOver -> Start.

use std::fmt;
use std::sync::Arc;

use surf_core::model::{GameSettings, SessionSummary};
use surf_core::ranking::{Tier, classify};

use crate::Clock;
use crate::error::{GameError, SessionError};
use crate::question_bank::QuestionBank;
use crate::sessions::{Feedback, SessionOutcome, SessionService};

/// Which screen the game is on, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Start,
    Playing,
    GameOver,
}

/// Inputs the state machine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    SubmitAnswer,
    Advance,
    End,
    Restart,
    Quit,
}

/// Final score and ranking carried into `GameOver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub final_score: u32,
    pub tier: Tier,
    pub summary: SessionSummary,
}

pub enum GameMode {
    Start,
    /// The active session is owned here and dropped on leaving `Playing`.
    Playing(SessionService),
    GameOver(GameResult),
}

impl GameMode {
    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            GameMode::Start => ModeKind::Start,
            GameMode::Playing(_) => ModeKind::Playing,
            GameMode::GameOver(_) => ModeKind::GameOver,
        }
    }
}

impl fmt::Debug for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Start => f.write_str("Start"),
            GameMode::Playing(session) => f.debug_tuple("Playing").field(session).finish(),
            GameMode::GameOver(result) => f.debug_tuple("GameOver").field(result).finish(),
        }
    }
}

/// Owns the current mode and drives transitions between them.
pub struct GameMachine {
    bank: Arc<dyn QuestionBank>,
    settings: GameSettings,
    clock: Clock,
    mode: GameMode,
}

impl GameMachine {
    #[must_use]
    pub fn new(bank: Arc<dyn QuestionBank>, settings: GameSettings) -> Self {
        Self {
            bank,
            settings,
            clock: Clock::default(),
            mode: GameMode::Start,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn mode(&self) -> &GameMode {
        &self.mode
    }

    #[must_use]
    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The active session while `Playing`.
    #[must_use]
    pub fn session(&self) -> Option<&SessionService> {
        match &self.mode {
            GameMode::Playing(session) => Some(session),
            _ => None,
        }
    }

    /// The final result while in `GameOver`.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match &self.mode {
            GameMode::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// Running score while playing, final score at game over, 0 at start.
    #[must_use]
    pub fn score(&self) -> u32 {
        match &self.mode {
            GameMode::Start => 0,
            GameMode::Playing(session) => session.score(),
            GameMode::GameOver(result) => result.final_score,
        }
    }

    /// `Start -> Playing` with a fresh question sequence and a zero score.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTransition` outside `Start`. Returns
    /// `GameError::Session` when the bank fails or yields no questions; the
    /// machine stays in `Start`.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.require(ModeKind::Start, GameAction::Start)?;

        let questions = self.bank.game_questions().map_err(SessionError::from)?;
        let session = SessionService::new(questions, self.settings, self.clock.now())
            .inspect_err(|err| log::warn!("cannot start session: {err}"))?;

        log::info!("session started with {} questions", session.total_questions());
        self.mode = GameMode::Playing(session);
        Ok(())
    }

    /// Submit the typed answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTransition` outside `Playing` and
    /// `GameError::Session` for rejected input.
    pub fn submit_answer(&mut self, raw_x: &str, raw_y: &str) -> Result<Feedback, GameError> {
        let session = self.playing_mut(GameAction::SubmitAnswer)?;
        Ok(session.submit_answer(raw_x, raw_y)?)
    }

    /// Move on from the answered question; after the last one this also
    /// performs `Playing -> GameOver`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTransition` outside `Playing` and
    /// `GameError::Session` if the current question is unanswered.
    pub fn advance(&mut self) -> Result<SessionOutcome, GameError> {
        let now = self.clock.now();
        let session = self.playing_mut(GameAction::Advance)?;
        let outcome = session.advance(now)?;
        if let SessionOutcome::SessionComplete { .. } = outcome {
            self.end()?;
        }
        Ok(outcome)
    }

    /// `Playing -> GameOver` once the session has completed; returns the final score.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTransition` outside `Playing` or while the
    /// session still has questions left.
    pub fn end(&mut self) -> Result<u32, GameError> {
        let summary = match &self.mode {
            GameMode::Playing(session) => session.summary().cloned(),
            _ => None,
        };
        let Some(summary) = summary else {
            return Err(rejection(self.mode_kind(), GameAction::End));
        };

        let final_score = summary.score();
        let tier = classify(final_score);
        log::info!("game over: score {final_score} ({})", tier.label());
        self.mode = GameMode::GameOver(GameResult {
            final_score,
            tier,
            summary,
        });
        Ok(final_score)
    }

    /// `GameOver -> Start`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTransition` outside `GameOver`.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.require(ModeKind::GameOver, GameAction::Restart)?;
        self.mode = GameMode::Start;
        Ok(())
    }

    /// `Playing -> Start`, abandoning the session and its score.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTransition` outside `Playing`.
    pub fn quit(&mut self) -> Result<(), GameError> {
        self.require(ModeKind::Playing, GameAction::Quit)?;
        log::info!("session abandoned");
        self.mode = GameMode::Start;
        Ok(())
    }

    fn require(&self, kind: ModeKind, action: GameAction) -> Result<(), GameError> {
        let from = self.mode_kind();
        if from == kind {
            Ok(())
        } else {
            Err(rejection(from, action))
        }
    }

    fn playing_mut(&mut self, action: GameAction) -> Result<&mut SessionService, GameError> {
        let from = self.mode_kind();
        match &mut self.mode {
            GameMode::Playing(session) => Ok(session),
            _ => Err(rejection(from, action)),
        }
    }
}

fn rejection(from: ModeKind, action: GameAction) -> GameError {
    log::warn!("rejected {action:?} while in {from:?}");
    GameError::InvalidTransition { from, action }
}

impl fmt::Debug for GameMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameMachine")
            .field("settings", &self.settings)
            .field("clock", &self.clock)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
