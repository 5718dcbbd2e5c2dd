use std::path::Path;

use serde::Deserialize;
use surf_core::model::QuestionDraft;

use super::QuestionPool;
use crate::error::QuestionBankError;

/// Accepted file layouts: a bare array or `{"questions": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum BankFile {
    List(Vec<QuestionDraft>),
    Wrapped { questions: Vec<QuestionDraft> },
}

impl BankFile {
    fn into_drafts(self) -> Vec<QuestionDraft> {
        match self {
            BankFile::List(drafts) | BankFile::Wrapped { questions: drafts } => drafts,
        }
    }
}

impl QuestionPool {
    /// Load a pool from JSON question drafts.
    ///
    /// ```json
    /// [{"id": 1, "context": "...", "equations": [{"a": 1, "b": 1, "c": 10},
    ///   {"a": 1, "b": -1, "c": 2}], "solution": {"x": 6, "y": 4}}]
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Parse` for malformed JSON or degenerate
    /// equations, and the `from_drafts` errors for invalid questions.
    pub fn from_json_str(json: &str) -> Result<Self, QuestionBankError> {
        let file: BankFile = serde_json::from_str(json)?;
        Self::from_drafts(file.into_drafts())
    }

    /// # Errors
    ///
    /// Returns `QuestionBankError::Io` if the file cannot be read, otherwise
    /// the errors of [`QuestionPool::from_json_str`].
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, QuestionBankError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::info!("loading question bank from {}", path.display());
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_bank::QuestionBank;

    const BANK: &str = r#"[
        {
            "id": 1,
            "context": "Ten boards, two more longboards than shortboards.",
            "equations": [{"a": 1, "b": 1, "c": 10}, {"a": 1, "b": -1, "c": 2}],
            "solution": {"x": 6, "y": 4}
        },
        {
            "id": 2,
            "context": "Lessons and rentals.",
            "equations": [{"a": 2, "b": 3, "c": 120}, {"a": 1, "b": 1, "c": 50}],
            "solution": {"x": 30, "y": 20}
        }
    ]"#;

    #[test]
    fn loads_and_draws_json_bank() {
        let pool = QuestionPool::from_json_str(BANK).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.game_questions().unwrap().len(), 2);
    }

    #[test]
    fn accepts_wrapped_layout() {
        let wrapped = format!(r#"{{"questions": {BANK}}}"#);
        let pool = QuestionPool::from_json_str(&wrapped).unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn empty_json_bank_loads_but_draws_nothing() {
        let pool = QuestionPool::from_json_str("[]").unwrap();
        assert!(pool.is_empty());
        assert!(pool.game_questions().unwrap().is_empty());
    }

    #[test]
    fn degenerate_equation_is_a_parse_error() {
        let json = BANK.replace(r#"{"a": 1, "b": -1, "c": 2}"#, r#"{"a": 0, "b": 0, "c": 2}"#);
        let err = QuestionPool::from_json_str(&json).unwrap_err();
        assert!(matches!(err, QuestionBankError::Parse(_)));
    }

    #[test]
    fn parallel_system_is_rejected_with_its_id() {
        let json = BANK.replace(r#"{"a": 1, "b": 1, "c": 50}"#, r#"{"a": 4, "b": 6, "c": 50}"#);
        let err = QuestionPool::from_json_str(&json).unwrap_err();
        assert!(matches!(err, QuestionBankError::InvalidQuestion { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = QuestionPool::from_json_path("/nonexistent/surf-bank.json").unwrap_err();
        assert!(matches!(err, QuestionBankError::Io(_)));
    }
}
