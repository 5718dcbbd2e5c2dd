use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::equation::{Equation, Solution};
use crate::model::ids::QuestionId;

/// Slack allowed when checking that an authored solution lies on both lines.
pub const SOLUTION_CHECK_TOLERANCE: f64 = 1e-6;

/// A determinant this small relative to its products counts as zero.
pub const DETERMINANT_RELATIVE_TOLERANCE: f64 = 1e-9;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question context is empty")]
    EmptyContext,

    #[error("solution coordinates must be finite numbers")]
    NonFiniteSolution,

    #[error("equations are parallel or coincident; the system has no unique solution")]
    NoUniqueSolution,

    #[error("stored solution does not satisfy equation {equation}")]
    SolutionMismatch { equation: usize },
}

//
// ─── DRAFT ────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as authored in a bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub context: String,
    pub equations: [Equation; 2],
    pub solution: Solution,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        id: QuestionId,
        context: impl Into<String>,
        equations: [Equation; 2],
        solution: Solution,
    ) -> Self {
        Self {
            id,
            context: context.into(),
            equations,
            solution,
        }
    }

    /// Check the authoring-time integrity of the question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the context is blank, the system is
    /// parallel/coincident, or the stored solution is not on both lines.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let context = self.context.trim().to_string();
        if context.is_empty() {
            return Err(QuestionError::EmptyContext);
        }
        if !self.solution.is_finite() {
            return Err(QuestionError::NonFiniteSolution);
        }

        let [first, second] = self.equations;
        if is_singular(&first, &second) {
            return Err(QuestionError::NoUniqueSolution);
        }
        for (index, equation) in self.equations.iter().enumerate() {
            if !equation.is_satisfied_by(&self.solution, SOLUTION_CHECK_TOLERANCE) {
                return Err(QuestionError::SolutionMismatch {
                    equation: index + 1,
                });
            }
        }

        Ok(Question {
            id: self.id,
            context,
            equations: self.equations,
            solution: self.solution,
        })
    }
}

/// Parallel or coincident lines; the determinant is compared relative to the
/// size of its two products.
fn is_singular(first: &Equation, second: &Equation) -> bool {
    let (ad, bc) = (first.a() * second.b(), second.a() * first.b());
    (ad - bc).abs() <= DETERMINANT_RELATIVE_TOLERANCE * (ad.abs() + bc.abs())
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A validated system of two equations with its known solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuestionDraft")]
pub struct Question {
    id: QuestionId,
    context: String,
    equations: [Equation; 2],
    solution: Solution,
}

impl TryFrom<QuestionDraft> for Question {
    type Error = QuestionError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    #[must_use]
    pub fn equations(&self) -> &[Equation; 2] {
        &self.equations
    }

    #[must_use]
    pub fn solution(&self) -> Solution {
        self.solution
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
