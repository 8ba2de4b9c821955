use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::catalog::{CareerRecord, Catalog};
use crate::config::SuggestionLimits;
use crate::matching::{
    top_k, AnswerError, CriteriaTable, LegacyAnswers, LegacyMatch, MbtiType, ScoringError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdvisorError {
    #[error("invalid answers: {0}")]
    InvalidInput(#[from] AnswerError),
    #[error("scoring configuration error: {0}")]
    Configuration(#[from] ScoringError),
}

/// Catalog entry paired with its 0-100 match score for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCareer {
    #[serde(flatten)]
    pub career: Arc<CareerRecord>,
    pub match_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiSuggestions {
    pub mbti_type: MbtiType,
    pub suggestions: Vec<ScoredCareer>,
}

/// Read-only service answering both questionnaires against one catalog.
pub struct CareerAdvisor {
    catalog: Arc<Catalog>,
    criteria: CriteriaTable,
    limits: SuggestionLimits,
}

impl CareerAdvisor {
    pub fn new(catalog: Arc<Catalog>, criteria: CriteriaTable, limits: SuggestionLimits) -> Self {
        Self {
            catalog,
            criteria,
            limits,
        }
    }

    /// Advisor using the built-in criteria table and default limits.
    pub fn standard(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, CriteriaTable::standard(), SuggestionLimits::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &CriteriaTable {
        &self.criteria
    }

    pub fn limits(&self) -> SuggestionLimits {
        self.limits
    }

    /// Classifies sixteen answers and ranks the name-deduplicated catalog against the type.
    pub fn suggest_by_mbti(&self, answers: &Value) -> Result<MbtiSuggestions, AdvisorError> {
        let mbti_type = MbtiType::classify(answers)?;
        let suggestions = self.suggest_for_type(mbti_type)?;
        Ok(MbtiSuggestions {
            mbti_type,
            suggestions,
        })
    }

    pub fn suggest_for_type(&self, mbti_type: MbtiType) -> Result<Vec<ScoredCareer>, AdvisorError> {
        let scorer = self.criteria.scorer(mbti_type)?;

        let scored = self
            .catalog
            .unique()
            .iter()
            .map(|career| {
                Ok(ScoredCareer {
                    career: Arc::clone(career),
                    match_score: scorer.score(career)?,
                })
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        let ranked = top_k(scored, self.limits.mbti.get(), |entry| {
            f64::from(entry.match_score)
        });
        debug!(
            %mbti_type,
            candidates = self.catalog.unique().len(),
            returned = ranked.len(),
            "ranked careers for mbti type"
        );
        Ok(ranked)
    }

    /// Scores the full catalog, duplicates included, against the nine-question form.
    pub fn suggest_by_attributes(&self, answers: &Value) -> Result<Vec<LegacyMatch>, AdvisorError> {
        let answers = LegacyAnswers::from_value(answers)?;

        let scored: Vec<LegacyMatch> = self
            .catalog
            .records()
            .iter()
            .map(|career| answers.evaluate(career))
            .collect();

        let ranked = top_k(scored, self.limits.legacy.get(), |entry| entry.match_score);
        debug!(
            candidates = self.catalog.len(),
            returned = ranked.len(),
            "ranked careers for attribute answers"
        );
        Ok(ranked)
    }
}
