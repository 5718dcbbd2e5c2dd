use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquationError {
    #[error("equation coefficients must be finite numbers")]
    NonFinite,

    #[error("equation has no variable terms (a and b are both zero)")]
    Degenerate,
}

//
// ─── EQUATION ─────────────────────────────────────────────────────────────────
//

/// A linear equation `a·x + b·y = c`.
///
/// At least one of `a`, `b` is non-zero; construction rejects the degenerate
/// case so every `Equation` describes an actual line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EquationRepr")]
pub struct Equation {
    a: f64,
    b: f64,
    c: f64,
}

#[derive(Deserialize)]
struct EquationRepr {
    a: f64,
    b: f64,
    c: f64,
}

impl TryFrom<EquationRepr> for Equation {
    type Error = EquationError;

    fn try_from(repr: EquationRepr) -> Result<Self, Self::Error> {
        Equation::new(repr.a, repr.b, repr.c)
    }
}

impl Equation {
    /// Build an equation from its coefficients.
    ///
    /// # Errors
    ///
    /// Returns `EquationError::NonFinite` for NaN/infinite coefficients and
    /// `EquationError::Degenerate` when both `a` and `b` are zero.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, EquationError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(EquationError::NonFinite);
        }
        if a == 0.0 && b == 0.0 {
            return Err(EquationError::Degenerate);
        }
        Ok(Self { a, b, c })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Left-hand side `a·x + b·y` at the given point.
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y
    }

    /// True when the point lies on the line within `tolerance`.
    #[must_use]
    pub fn is_satisfied_by(&self, solution: &Solution, tolerance: f64) -> bool {
        (self.evaluate(solution.x, solution.y) - self.c).abs() <= tolerance
    }

    /// Geometric form of this equation.
    #[must_use]
    pub fn line(&self) -> Line {
        if self.b == 0.0 {
            Line::Vertical {
                x: self.c / self.a,
            }
        } else {
            Line::Slope {
                slope: -self.a / self.b,
                intercept: self.c / self.b,
            }
        }
    }
}

//
// ─── SOLUTION ─────────────────────────────────────────────────────────────────
//

/// The intersection point of a 2x2 system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub x: f64,
    pub y: f64,
}

impl Solution {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

//
// ─── LINE ─────────────────────────────────────────────────────────────────────
//

/// A line either expressible as `y = slope·x + intercept` or vertical at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line {
    Slope { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl Line {
    /// `y` at the given `x`, or `None` for vertical lines.
    #[must_use]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Line::Slope { slope, intercept } => Some(slope * x + intercept),
            Line::Vertical { .. } => None,
        }
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
