//! Attribute-equality matcher behind the nine-question form.

use super::{answer_object, AnswerError};
use crate::catalog::{CareerId, CareerRecord};
use serde::Serialize;
use serde_json::{Map, Value};

/// Attributes compared one-to-one; each exact match earns a point.
pub const EXACT_ATTRIBUTES: [&str; 8] = [
    "people_person",
    "tech_comfort",
    "public_speaking",
    "artistic",
    "outdoor",
    "teamwork",
    "data_skill",
    "preferred_work_env",
];

/// Ordinal attribute that earns partial credit for near misses.
pub const CREATIVITY_ATTRIBUTE: &str = "creativity_level";

/// Maximum achievable score.
pub const LEGACY_ATTRIBUTE_COUNT: usize = EXACT_ATTRIBUTES.len() + 1;

/// Answers to the nine-question form. Fields that are absent or not numbers
/// are kept as `None` and never match anything, even a record that also
/// lacks the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyAnswers {
    exact: [Option<f64>; 8],
    creativity_level: Option<f64>,
}

impl LegacyAnswers {
    /// Accepts any non-empty JSON object; the individual fields are not checked.
    pub fn from_value(body: &Value) -> Result<Self, AnswerError> {
        let answers = answer_object(body)?;
        if answers.is_empty() {
            return Err(AnswerError::Empty);
        }
        Ok(Self::from_map(answers))
    }

    pub fn from_map(answers: &Map<String, Value>) -> Self {
        let read = |key: &str| answers.get(key).and_then(Value::as_f64);
        Self {
            exact: EXACT_ATTRIBUTES.map(read),
            creativity_level: read(CREATIVITY_ATTRIBUTE),
        }
    }

    /// Raw score out of [`LEGACY_ATTRIBUTE_COUNT`].
    pub fn score(&self, record: &CareerRecord) -> f64 {
        let matches = EXACT_ATTRIBUTES
            .iter()
            .zip(self.exact.iter())
            .filter(|(attribute, answer)| match (answer, record.attribute(attribute)) {
                (Some(expected), Some(actual)) => *expected == actual,
                _ => false,
            })
            .count();

        let creativity = match (self.creativity_level, record.attribute(CREATIVITY_ATTRIBUTE)) {
            (Some(answer), Some(actual)) => (1.0 - (actual - answer).abs() / 2.0).max(0.0),
            _ => 0.0,
        };

        matches as f64 + creativity
    }

    pub fn evaluate(&self, record: &CareerRecord) -> LegacyMatch {
        LegacyMatch::new(record, self.score(record))
    }
}

/// Response row for the nine-question endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMatch {
    pub id: CareerId,
    pub name: String,
    pub detail: String,
    /// Raw score rounded to two decimals.
    pub match_score: f64,
    /// Rounded percentage of the maximum, rendered like `"78%"`.
    pub compatibility: String,
}

impl LegacyMatch {
    fn new(record: &CareerRecord, raw: f64) -> Self {
        let percentage = (raw / LEGACY_ATTRIBUTE_COUNT as f64 * 100.0).round();
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            detail: record.detail.clone(),
            match_score: (raw * 100.0).round() / 100.0,
            compatibility: format!("{percentage}%"),
        }
    }
}
