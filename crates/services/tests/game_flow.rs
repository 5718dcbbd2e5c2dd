use std::sync::Arc;

use services::{
    Feedback, GameError, GameMachine, ModeKind, QuestionPool, SessionError, SessionOutcome,
    StaticQuestionBank,
};
use surf_core::format::format_number;
use surf_core::model::{Equation, GameSettings, Question, QuestionDraft, QuestionId, Solution};
use surf_core::ranking::Tier;
use surf_core::time::fixed_clock;

fn question(id: u64, first: (f64, f64, f64), second: (f64, f64, f64), x: f64, y: f64) -> Question {
    QuestionDraft::new(
        QuestionId::new(id),
        format!("Wave {id}"),
        [
            Equation::new(first.0, first.1, first.2).unwrap(),
            Equation::new(second.0, second.1, second.2).unwrap(),
        ],
        Solution::new(x, y),
    )
    .validate()
    .unwrap()
}

fn answer_current(game: &mut GameMachine, correctly: bool) -> Feedback {
    let solution = game.session().unwrap().current_question().solution();
    let (x, y) = if correctly {
        (solution.x, solution.y)
    } else {
        (solution.x + 1.0, solution.y)
    };
    game.submit_answer(&format_number(x), &format_number(y))
        .unwrap()
}

#[test]
fn two_question_session_scores_two_hundred() {
    let bank = StaticQuestionBank::new(vec![
        question(1, (1.0, 1.0, 10.0), (1.0, -1.0, 2.0), 6.0, 4.0),
        question(2, (2.0, 1.0, 7.0), (1.0, -1.0, 2.0), 3.0, 1.0),
    ]);
    let mut game =
        GameMachine::new(Arc::new(bank), GameSettings::default()).with_clock(fixed_clock());

    game.start().unwrap();
    assert!(answer_current(&mut game, true).is_correct());
    assert_eq!(game.advance().unwrap(), SessionOutcome::NextQuestion);
    assert!(answer_current(&mut game, true).is_correct());
    assert_eq!(
        game.advance().unwrap(),
        SessionOutcome::SessionComplete { final_score: 200 }
    );

    let result = game.result().unwrap();
    assert_eq!(result.final_score, 200);
    assert_eq!(result.tier, Tier::Beginner);
}

#[test]
fn builtin_session_plays_through_to_ranking() {
    let pool = QuestionPool::builtin().unwrap().with_seed(42);
    let mut game =
        GameMachine::new(Arc::new(pool), GameSettings::default()).with_clock(fixed_clock());
    game.start().unwrap();
    assert_eq!(game.session().unwrap().total_questions(), 15);

    let mut previous_score = 0;
    let mut turn = 0;
    loop {
        // Miss every third wave: 10 of 15 correct.
        answer_current(&mut game, turn % 3 != 2);
        let score = game.score();
        assert!(score >= previous_score);
        previous_score = score;
        turn += 1;

        match game.advance().unwrap() {
            SessionOutcome::NextQuestion => {
                let session = game.session().unwrap();
                assert!(session.index() < session.total_questions());
            }
            SessionOutcome::SessionComplete { final_score } => {
                assert_eq!(final_score, 1000);
                break;
            }
        }
    }

    assert_eq!(turn, 15);
    assert_eq!(game.mode_kind(), ModeKind::GameOver);
    assert_eq!(game.result().unwrap().tier, Tier::Professional);
}

#[test]
fn invalid_input_leaves_the_session_untouched() {
    let bank = StaticQuestionBank::new(vec![question(
        1,
        (1.0, 1.0, 10.0),
        (1.0, -1.0, 2.0),
        6.0,
        4.0,
    )]);
    let mut game = GameMachine::new(Arc::new(bank), GameSettings::default());
    game.start().unwrap();

    let err = game.submit_answer("abc", "3").unwrap_err();
    assert!(matches!(
        err,
        GameError::Session(SessionError::InvalidInput(_))
    ));
    let session = game.session().unwrap();
    assert_eq!(session.score(), 0);
    assert_eq!(session.index(), 0);
    assert!(session.feedback().is_none());
}

#[test]
fn boundary_difference_counts_as_incorrect() {
    let bank = StaticQuestionBank::new(vec![question(
        1,
        (1.0, 1.0, 0.0),
        (1.0, -1.0, 0.0),
        0.0,
        0.0,
    )]);
    let mut game = GameMachine::new(Arc::new(bank), GameSettings::default());
    game.start().unwrap();

    let feedback = game.submit_answer("0.01", "0").unwrap();
    assert!(!feedback.is_correct());
    assert_eq!(game.score(), 0);
}
