use thiserror::Error;

use crate::model::Solution;

/// Which input box a typed value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerField {
    X,
    Y,
}

impl AnswerField {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AnswerField::X => "x",
            AnswerField::Y => "y",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("{} is empty", .field.name())]
    Empty { field: AnswerField },

    #[error("{} is not a finite number: {raw:?}", .field.name())]
    NotANumber { field: AnswerField, raw: String },
}

impl AnswerError {
    #[must_use]
    pub fn field(&self) -> AnswerField {
        match self {
            AnswerError::Empty { field } | AnswerError::NotANumber { field, .. } => *field,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Parse a typed answer into a finite real number.
///
/// # Errors
///
/// Returns `AnswerError::Empty` for blank input and `AnswerError::NotANumber`
/// for text that does not parse or parses to NaN/infinity.
pub fn parse_answer(raw: &str, field: AnswerField) -> Result<f64, AnswerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnswerError::Empty { field });
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AnswerError::NotANumber {
            field,
            raw: raw.to_string(),
        })
}

/// Strict comparison: a difference of exactly `tolerance` is outside.
#[must_use]
pub fn is_within_tolerance(value: f64, expected: f64, tolerance: f64) -> bool {
    (value - expected).abs() < tolerance
}

#[must_use]
pub fn evaluate(solution: &Solution, x: f64, y: f64, tolerance: f64) -> Verdict {
    if is_within_tolerance(x, solution.x, tolerance) && is_within_tolerance(y, solution.y, tolerance)
    {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_decimals() {
        assert_eq!(parse_answer(" 2.5 ", AnswerField::X), Ok(2.5));
        assert_eq!(parse_answer("-3", AnswerField::Y), Ok(-3.0));
    }

    #[test]
    fn rejects_blank_and_non_finite_input() {
        assert_eq!(
            parse_answer("  ", AnswerField::X),
            Err(AnswerError::Empty {
                field: AnswerField::X
            })
        );
        for raw in ["abc", "NaN", "inf", "1,5"] {
            let err = parse_answer(raw, AnswerField::Y).unwrap_err();
            assert_eq!(err.field(), AnswerField::Y);
        }
    }

    #[test]
    fn tolerance_boundary_is_exclusive() {
        let solution = Solution::new(0.0, 0.0);
        assert_eq!(evaluate(&solution, 0.01, 0.0, 0.01), Verdict::Incorrect);
        assert_eq!(evaluate(&solution, 0.0, -0.01, 0.01), Verdict::Incorrect);
        assert_eq!(evaluate(&solution, 0.005, -0.009, 0.01), Verdict::Correct);
    }

    #[test]
    fn both_coordinates_must_match() {
        let solution = Solution::new(3.0, 2.0);
        assert_eq!(evaluate(&solution, 3.0, 2.0, 0.01), Verdict::Correct);
        assert_eq!(evaluate(&solution, 3.0, 2.5, 0.01), Verdict::Incorrect);
        assert_eq!(evaluate(&solution, 2.0, 3.0, 0.01), Verdict::Incorrect);
    }
}
