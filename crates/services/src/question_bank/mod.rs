//! Sources of questions for a play session.

mod builtin;
mod json;

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use surf_core::model::{DEFAULT_QUESTIONS_PER_SESSION, Question, QuestionDraft};

use crate::error::QuestionBankError;

/// Supplies the ordered questions for one session.
///
/// Every returned `Question` has already passed authoring-time validation;
/// consumers trust the stored solution without re-deriving it.
pub trait QuestionBank: Send + Sync {
    /// # Errors
    ///
    /// Returns `QuestionBankError` when the bank cannot produce questions.
    fn game_questions(&self) -> Result<Vec<Question>, QuestionBankError>;
}

//
// ─── POOL ──────────────────────────────────────────────────────────────────────
//

/// A validated pool that draws a shuffled subset per session.
pub struct QuestionPool {
    questions: Vec<Question>,
    draw_count: usize,
    rng: Mutex<StdRng>,
}

impl QuestionPool {
    /// Validate drafts once and build a pool drawing the default session size.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::InvalidQuestion` naming the first invalid
    /// draft, or `DuplicateId` when two drafts share an id.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, QuestionBankError> {
        let mut seen = HashSet::with_capacity(drafts.len());
        let mut questions = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = draft.id;
            if !seen.insert(id) {
                return Err(QuestionBankError::DuplicateId(id));
            }
            let question = draft
                .validate()
                .map_err(|source| QuestionBankError::InvalidQuestion { id, source })?;
            questions.push(question);
        }

        log::info!("question pool loaded with {} questions", questions.len());
        Ok(Self {
            questions,
            draw_count: usize::try_from(DEFAULT_QUESTIONS_PER_SESSION).unwrap_or(usize::MAX),
            rng: Mutex::new(StdRng::from_os_rng()),
        })
    }

    /// The curated surf-themed pool shipped with the game.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError` if a built-in question fails validation.
    pub fn builtin() -> Result<Self, QuestionBankError> {
        Self::from_drafts(builtin::builtin_drafts()?)
    }

    /// Number of questions handed out per session (capped by pool size).
    #[must_use]
    pub fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count;
        self
    }

    /// Make the draw order reproducible.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl QuestionBank for QuestionPool {
    fn game_questions(&self) -> Result<Vec<Question>, QuestionBankError> {
        let mut drawn = self.questions.clone();
        {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            drawn.shuffle(&mut *rng);
        }
        drawn.truncate(self.draw_count);
        Ok(drawn)
    }
}

impl fmt::Debug for QuestionPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionPool")
            .field("questions_len", &self.questions.len())
            .field("draw_count", &self.draw_count)
            .finish_non_exhaustive()
    }
}

//
// ─── STATIC ────────────────────────────────────────────────────────────────────
//

/// Hands out the same questions, in order, every session.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionBank {
    questions: Vec<Question>,
}

impl StaticQuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

impl QuestionBank for StaticQuestionBank {
    fn game_questions(&self) -> Result<Vec<Question>, QuestionBankError> {
        Ok(self.questions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surf_core::model::{Equation, QuestionId, Solution};

    fn draft(id: u64) -> QuestionDraft {
        QuestionDraft::new(
            QuestionId::new(id),
            format!("Wave {id}"),
            [
                Equation::new(1.0, 1.0, 10.0).unwrap(),
                Equation::new(1.0, -1.0, 2.0).unwrap(),
            ],
            Solution::new(6.0, 4.0),
        )
    }

    #[test]
    fn builtin_pool_draws_a_full_session() {
        let pool = QuestionPool::builtin().unwrap();
        assert!(pool.len() > 15);

        let drawn = pool.game_questions().unwrap();
        assert_eq!(drawn.len(), 15);
        let ids: HashSet<_> = drawn.iter().map(Question::id).collect();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn draw_count_is_capped_by_pool_size() {
        let pool = QuestionPool::from_drafts(vec![draft(1), draft(2)])
            .unwrap()
            .with_draw_count(5);
        assert_eq!(pool.game_questions().unwrap().len(), 2);
    }

    #[test]
    fn seeded_pools_draw_the_same_order() {
        let ids = |pool: &QuestionPool| {
            pool.game_questions()
                .unwrap()
                .iter()
                .map(Question::id)
                .collect::<Vec<_>>()
        };
        let first = QuestionPool::builtin().unwrap().with_seed(7);
        let second = QuestionPool::builtin().unwrap().with_seed(7);
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = QuestionPool::from_drafts(vec![draft(1), draft(1)]).unwrap_err();
        assert!(matches!(err, QuestionBankError::DuplicateId(id) if id == QuestionId::new(1)));
    }

    #[test]
    fn invalid_draft_names_its_id() {
        let mut bad = draft(4);
        bad.solution = Solution::new(1.0, 1.0);
        let err = QuestionPool::from_drafts(vec![draft(1), bad]).unwrap_err();
        assert!(matches!(
            err,
            QuestionBankError::InvalidQuestion { id, .. } if id == QuestionId::new(4)
        ));
    }

    #[test]
    fn static_bank_preserves_order() {
        let questions: Vec<Question> = [3, 1, 2]
            .into_iter()
            .map(|id| draft(id).validate().unwrap())
            .collect();
        let bank = StaticQuestionBank::new(questions.clone());
        assert_eq!(bank.game_questions().unwrap(), questions);
    }
}
