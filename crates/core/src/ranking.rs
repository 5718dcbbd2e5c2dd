/// Score-based ranking shown at game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Legend,
    Professional,
    TalentedAmateur,
    Beginner,
}

/// Minimum score per tier, highest first. Anything below the last entry is `Beginner`.
pub const TIER_THRESHOLDS: [(u32, Tier); 3] = [
    (1200, Tier::Legend),
    (800, Tier::Professional),
    (400, Tier::TalentedAmateur),
];

/// Classify a final score into its tier.
#[must_use]
pub fn classify(score: u32) -> Tier {
    TIER_THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map_or(Tier::Beginner, |(_, tier)| *tier)
}

impl Tier {
    /// Short tier name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tier::Legend => "Legend",
            Tier::Professional => "Professional",
            Tier::TalentedAmateur => "Talented Amateur",
            Tier::Beginner => "Beginner",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tier::Legend => "Surf Legend!",
            Tier::Professional => "Professional Surfer",
            Tier::TalentedAmateur => "Talented Amateur",
            Tier::Beginner => "Beginner on the Board",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Tier::Legend => "You rode every wave perfectly! A true master of mathematics!",
            Tier::Professional => "You caught great waves and showed real skill. Keep it up!",
            Tier::TalentedAmateur => "You have potential! With more practice you'll reach the top.",
            Tier::Beginner => "Don't give up! Every legend started on the small waves.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(classify(0), Tier::Beginner);
        assert_eq!(classify(399), Tier::Beginner);
        assert_eq!(classify(400), Tier::TalentedAmateur);
        assert_eq!(classify(799), Tier::TalentedAmateur);
        assert_eq!(classify(800), Tier::Professional);
        assert_eq!(classify(1199), Tier::Professional);
        assert_eq!(classify(1200), Tier::Legend);
        assert_eq!(classify(1500), Tier::Legend);
    }

    #[test]
    fn labels_match_tier_names() {
        assert_eq!(classify(200).label(), "Beginner");
        assert_eq!(classify(450).label(), "Talented Amateur");
        assert_eq!(Tier::Legend.title(), "Surf Legend!");
    }
}
