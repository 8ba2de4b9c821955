//! Questionnaire classification, scoring, and ranking.

pub mod criteria;
pub mod legacy;
pub mod mbti;
pub mod ranking;

pub use criteria::{
    Comparison, CriteriaError, CriteriaScorer, CriteriaTable, Criterion, CriterionScore,
    ScoreBreakdown, ScoringError,
};
pub use legacy::{LegacyAnswers, LegacyMatch, LEGACY_ATTRIBUTE_COUNT};
pub use mbti::{MbtiType, Preference, PreferenceCounts, REQUIRED_ANSWERS};
pub use ranking::top_k;

use serde_json::{Map, Value};

/// Rejections for questionnaire bodies that cannot be scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("answers must be a JSON object")]
    NotAnObject,
    #[error("answers must not be empty")]
    Empty,
    #[error("{required} answers are required, found {found}")]
    TooFewAnswers { required: usize, found: usize },
    #[error("'{0}' is not a valid MBTI type")]
    UnknownType(String),
}

pub(crate) fn answer_object(value: &Value) -> Result<&Map<String, Value>, AnswerError> {
    value.as_object().ok_or(AnswerError::NotAnObject)
}
