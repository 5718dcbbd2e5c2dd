use services::SessionService;
use surf_core::format::format_equation;
use surf_core::model::QuestionId;

/// The open question as shown above the answer inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub context: String,
    pub equations: [String; 2],
    pub wave_label: String,
    pub progress_percent: u32,
    pub score_label: String,
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn map_question(session: &SessionService) -> QuestionVm {
    let question = session.current_question();
    let progress = session.progress();
    let [first, second] = question.equations();

    QuestionVm {
        id: question.id(),
        context: question.context().to_string(),
        equations: [format_equation(first), format_equation(second)],
        wave_label: format!("Wave {} of {}", progress.position, progress.total),
        progress_percent: (progress.fraction() * 100.0).round() as u32,
        score_label: format!("Points: {}", session.score()),
    }
}
