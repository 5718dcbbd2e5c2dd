//! Sample tables for plotting a system of two lines.
//!
//! Samples are taken at integer x over `[floor(center) - 5, ceil(center) + 5]`.
//! A vertical line (`b == 0`) has no `y` for a given `x`; its samples are gaps
//! and renderers that need it must draw from [`Line::Vertical`] instead.

use crate::format::format_equation;
use crate::model::{Equation, Line, Question, Solution};

/// Distance from the center to either end of the sample range.
pub const SAMPLE_HALF_WIDTH: i64 = 5;

/// Centers are clamped to `±2^53`, where every integer is still an exact `f64`.
pub const MAX_SAMPLE_CENTER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPoint {
    pub x: f64,
    /// `None` where the line has no value at `x` (vertical line gap).
    pub y: Option<f64>,
}

/// Lazy, finite, restartable iterator over one equation's samples.
#[derive(Debug, Clone)]
pub struct EquationSamples {
    equation: Equation,
    start: i64,
    end: i64,
    next: i64,
}

impl EquationSamples {
    /// Rewind to the first sample.
    pub fn restart(&mut self) {
        self.next = self.start;
    }

    /// Inclusive integer range covered by the samples.
    #[must_use]
    pub fn range(&self) -> (i64, i64) {
        (self.start, self.end)
    }
}

impl Iterator for EquationSamples {
    type Item = GraphPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.end {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let x = self.next as f64;
        self.next += 1;

        let (a, b, c) = (self.equation.a(), self.equation.b(), self.equation.c());
        let y = (b != 0.0).then(|| (c - a * x) / b);
        Some(GraphPoint { x, y })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next + 1).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EquationSamples {}

/// Sample an equation around `center_x` (usually the solution's x).
///
/// Centers beyond [`MAX_SAMPLE_CENTER`] (or NaN) are clamped, so the range
/// always holds 11 or 12 samples.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn sample_equation(equation: &Equation, center_x: f64) -> EquationSamples {
    let center = if center_x.is_nan() {
        0.0
    } else {
        center_x.clamp(-MAX_SAMPLE_CENTER, MAX_SAMPLE_CENTER)
    };
    let start = center.floor() as i64 - SAMPLE_HALF_WIDTH;
    let end = center.ceil() as i64 + SAMPLE_HALF_WIDTH;
    EquationSamples {
        equation: *equation,
        start,
        end,
        next: start,
    }
}

/// One plotted line: its label, geometric form and samples.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphLine {
    pub label: String,
    pub line: Line,
    pub points: Vec<GraphPoint>,
}

/// Everything a renderer needs to draw a question's system.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphData {
    pub lines: [GraphLine; 2],
    pub solution: Solution,
}

/// Sample both equations of a question around its solution.
#[must_use]
pub fn sample_system(question: &Question) -> GraphData {
    let solution = question.solution();
    let [first, second] = question.equations();
    let plot = |equation: &Equation| GraphLine {
        label: format_equation(equation),
        line: equation.line(),
        points: sample_equation(equation, solution.x).collect(),
    };

    GraphData {
        lines: [plot(first), plot(second)],
        solution,
    }
}
