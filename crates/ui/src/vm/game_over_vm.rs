use services::GameResult;
use surf_core::ranking::Tier;
use surf_core::time::format_elapsed;

use super::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverVm {
    pub score: u32,
    pub tier_title: &'static str,
    pub tier_message: &'static str,
    pub tier_class: &'static str,
    pub correct_label: String,
    pub duration_label: String,
    pub finished_at: String,
}

fn tier_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Legend => "tier tier-legend",
        Tier::Professional => "tier tier-professional",
        Tier::TalentedAmateur => "tier tier-amateur",
        Tier::Beginner => "tier tier-beginner",
    }
}

impl From<&GameResult> for GameOverVm {
    fn from(result: &GameResult) -> Self {
        let summary = &result.summary;
        Self {
            score: result.final_score,
            tier_title: result.tier.title(),
            tier_message: result.tier.message(),
            tier_class: tier_class(result.tier),
            correct_label: format!(
                "{} of {} waves ridden",
                summary.correct(),
                summary.total_questions()
            ),
            duration_label: format_elapsed(summary.duration()),
            finished_at: format_datetime(summary.completed_at()),
        }
    }
}
