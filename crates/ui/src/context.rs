use std::sync::Arc;

use services::{Clock, GameMachine, QuestionBank};
use surf_core::model::GameSettings;

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<dyn QuestionBank>;
    fn settings(&self) -> GameSettings;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    question_bank: Arc<dyn QuestionBank>,
    settings: GameSettings,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_bank: app.question_bank(),
            settings: app.settings(),
            clock: app.clock(),
        }
    }

    /// A fresh machine in `Start`, sharing the app's question bank.
    #[must_use]
    pub fn new_game(&self) -> GameMachine {
        GameMachine::new(Arc::clone(&self.question_bank), self.settings).with_clock(self.clock)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
