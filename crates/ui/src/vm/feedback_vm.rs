use services::{Feedback, SessionService};
use surf_core::format::format_number;
use surf_core::narrative::solution_steps;

use super::graph_vm::{GraphVm, map_graph};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Shown after an answer has been checked.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub headline: &'static str,
    pub solution_text: String,
    /// Worked solution; only filled in after a wrong answer.
    pub steps: Vec<StepVm>,
    pub graph: GraphVm,
    pub next_label: &'static str,
}

#[must_use]
pub fn map_feedback(session: &SessionService, feedback: &Feedback) -> FeedbackVm {
    let question = session.current_question();
    let solution = feedback.solution();
    let (x, y) = (format_number(solution.x), format_number(solution.y));

    let (headline, solution_text, steps) = if feedback.is_correct() {
        (
            "NICE! PERFECT WAVE!",
            format!("You got it! The solution is X = {x} and Y = {y}."),
            Vec::new(),
        )
    } else {
        let steps = solution_steps(question)
            .into_iter()
            .map(|step| StepVm {
                heading: format!("{}. {}", step.number, step.title),
                lines: step.lines,
            })
            .collect();
        (
            "ALMOST THERE!",
            format!("The correct answer was X = {x} and Y = {y}."),
            steps,
        )
    };

    FeedbackVm {
        correct: feedback.is_correct(),
        headline,
        solution_text,
        steps,
        graph: map_graph(question),
        next_label: if session.is_last_question() {
            "See Ranking"
        } else {
            "Next Wave"
        },
    }
}
