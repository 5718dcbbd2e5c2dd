use services::{GameMachine, ModeKind};
use surf_core::format::format_number;

use crate::views::ViewError;

use super::feedback_vm::{FeedbackVm, map_feedback};
use super::game_over_vm::GameOverVm;
use super::question_vm::{QuestionVm, map_question};

/// UI-side owner of the game: the state machine plus the text typed into
/// the answer boxes, which is cleared for every new question.
pub struct GameVm {
    machine: GameMachine,
    input_x: String,
    input_y: String,
    error: Option<ViewError>,
}

impl GameVm {
    #[must_use]
    pub fn new(machine: GameMachine) -> Self {
        Self {
            machine,
            input_x: String::new(),
            input_y: String::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn mode_kind(&self) -> ModeKind {
        self.machine.mode_kind()
    }

    /// House rules shown before a session starts.
    #[must_use]
    pub fn rules(&self) -> Vec<String> {
        let settings = self.machine.settings();
        vec![
            format!(
                "Each session has up to {} waves, each a short story with two equations in x and y.",
                settings.questions_per_session()
            ),
            format!(
                "Enter both values. Answers within {} count as correct.",
                format_number(settings.answer_tolerance())
            ),
            format!(
                "Every correct answer is worth {} points.",
                settings.points_per_correct()
            ),
        ]
    }

    #[must_use]
    pub fn input_x(&self) -> &str {
        &self.input_x
    }

    #[must_use]
    pub fn input_y(&self) -> &str {
        &self.input_y
    }

    pub fn set_input_x(&mut self, value: String) {
        self.input_x = value;
    }

    pub fn set_input_y(&mut self, value: String) {
        self.input_y = value;
    }

    /// Last rejected action, for re-prompting.
    #[must_use]
    pub fn error(&self) -> Option<ViewError> {
        self.error
    }

    /// # Errors
    ///
    /// Returns `ViewError::EmptyBank`/`LoadFailed` when no session can start.
    pub fn start(&mut self) -> Result<(), ViewError> {
        self.clear_inputs();
        let result = self.machine.start();
        self.record(result)
    }

    /// # Errors
    ///
    /// Returns `ViewError::InvalidInput` when either box is not a number.
    pub fn submit(&mut self) -> Result<(), ViewError> {
        let result = self
            .machine
            .submit_answer(&self.input_x, &self.input_y)
            .map(|_| ());
        self.record(result)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the current question is unanswered.
    pub fn advance(&mut self) -> Result<(), ViewError> {
        let result = self.machine.advance().map(|_| ());
        if result.is_ok() {
            self.clear_inputs();
        }
        self.record(result)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` outside the game over screen.
    pub fn restart(&mut self) -> Result<(), ViewError> {
        let result = self.machine.restart();
        self.record(result)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when no session is running.
    pub fn quit(&mut self) -> Result<(), ViewError> {
        self.clear_inputs();
        let result = self.machine.quit();
        self.record(result)
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        self.machine.session().map(map_question)
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        let session = self.machine.session()?;
        session
            .feedback()
            .map(|feedback| map_feedback(session, feedback))
    }

    #[must_use]
    pub fn game_over(&self) -> Option<GameOverVm> {
        self.machine.result().map(GameOverVm::from)
    }

    fn clear_inputs(&mut self) {
        self.input_x.clear();
        self.input_y.clear();
    }

    fn record<T>(&mut self, result: Result<T, services::GameError>) -> Result<T, ViewError> {
        match result {
            Ok(value) => {
                self.error = None;
                Ok(value)
            }
            Err(err) => {
                log::debug!("ui action rejected: {err}");
                let view_err = ViewError::from_game(&err);
                self.error = Some(view_err);
                Err(view_err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use services::StaticQuestionBank;
    use surf_core::model::{Equation, GameSettings, QuestionDraft, QuestionId, Solution};
    use surf_core::time::fixed_clock;

    use super::*;

    fn game(len: u64) -> GameVm {
        let questions = (1..=len)
            .map(|id| {
                QuestionDraft::new(
                    QuestionId::new(id),
                    format!("Wave {id}"),
                    [
                        Equation::new(1.0, 1.0, 10.0).unwrap(),
                        Equation::new(1.0, -1.0, 2.0).unwrap(),
                    ],
                    Solution::new(6.0, 4.0),
                )
                .validate()
                .unwrap()
            })
            .collect();
        let machine = GameMachine::new(
            Arc::new(StaticQuestionBank::new(questions)),
            GameSettings::default(),
        )
        .with_clock(fixed_clock());
        GameVm::new(machine)
    }

    #[test]
    fn question_vm_reports_progress() {
        let mut vm = game(4);
        vm.start().unwrap();

        let question = vm.question().unwrap();
        assert_eq!(question.wave_label, "Wave 1 of 4");
        assert_eq!(question.progress_percent, 25);
        assert_eq!(question.equations, ["x + y = 10".to_string(), "x - y = 2".to_string()]);
        assert_eq!(question.score_label, "Points: 0");
        assert!(vm.feedback().is_none());
    }

    #[test]
    fn invalid_input_sets_reprompt_error() {
        let mut vm = game(2);
        vm.start().unwrap();
        vm.set_input_x("abc".to_string());
        vm.set_input_y("3".to_string());

        assert_eq!(vm.submit(), Err(ViewError::InvalidInput));
        assert_eq!(vm.error(), Some(ViewError::InvalidInput));
        assert!(vm.feedback().is_none());
        assert_eq!(vm.input_x(), "abc");
    }

    #[test]
    fn wrong_answer_shows_worked_solution() {
        let mut vm = game(2);
        vm.start().unwrap();
        vm.set_input_x("4".to_string());
        vm.set_input_y("6".to_string());
        vm.submit().unwrap();

        let feedback = vm.feedback().unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.headline, "ALMOST THERE!");
        assert_eq!(feedback.solution_text, "The correct answer was X = 6 and Y = 4.");
        assert_eq!(feedback.steps.len(), 5);
        assert_eq!(feedback.steps[0].heading, "1. Initial system");
        assert_eq!(feedback.graph.solution_label, "Solution (6, 4)");
        assert_eq!(feedback.graph.rows.len(), 11);
        assert_eq!(feedback.next_label, "Next Wave");
    }

    #[test]
    fn advancing_clears_inputs_and_reaches_game_over() {
        let mut vm = game(1);
        vm.start().unwrap();
        vm.set_input_x("6".to_string());
        vm.set_input_y("4".to_string());
        vm.submit().unwrap();

        let feedback = vm.feedback().unwrap();
        assert!(feedback.correct);
        assert!(feedback.steps.is_empty());
        assert_eq!(feedback.next_label, "See Ranking");

        vm.advance().unwrap();
        assert_eq!(vm.mode_kind(), ModeKind::GameOver);
        assert_eq!(vm.input_x(), "");

        let over = vm.game_over().unwrap();
        assert_eq!(over.score, 100);
        assert_eq!(over.tier_title, "Beginner on the Board");
        assert_eq!(over.correct_label, "1 of 1 waves ridden");
        assert_eq!(over.duration_label, "0s");

        vm.restart().unwrap();
        assert_eq!(vm.mode_kind(), ModeKind::Start);
    }

    #[test]
    fn rules_follow_settings() {
        let vm = game(1);
        let rules = vm.rules();
        assert_eq!(rules.len(), 3);
        assert!(rules[0].contains("up to 15 waves"));
        assert_eq!(rules[1], "Enter both values. Answers within 0.01 count as correct.");
        assert_eq!(rules[2], "Every correct answer is worth 100 points.");
    }

    #[test]
    fn empty_bank_reports_load_error() {
        let mut vm = game(0);
        assert_eq!(vm.start(), Err(ViewError::EmptyBank));
        assert_eq!(vm.mode_kind(), ModeKind::Start);
    }
}
