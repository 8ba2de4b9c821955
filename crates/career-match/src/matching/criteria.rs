use super::mbti::MbtiType;
use crate::catalog::CareerRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Fraction of the achievable score removed for each record attribute the type's criteria ignore.
pub const UNMODELED_ATTRIBUTE_PENALTY: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("no criteria are configured for MBTI type {0}")]
    UnknownType(MbtiType),
    #[error("criteria for MBTI type {0} are empty")]
    EmptyCriteria(MbtiType),
    #[error("criterion on '{attribute}' is invalid: {reason}")]
    InvalidCriterion {
        attribute: String,
        reason: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CriteriaError {
    #[error("failed to read criteria table at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("criteria table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ScoringError),
}

/// How a record attribute is compared against the expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = "exact")]
    Exact,
    #[serde(rename = "minThreshold")]
    AtLeast,
    #[serde(rename = "maxThreshold")]
    AtMost,
}

/// A single weighted rule in a type profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub attribute: String,
    pub mode: Comparison,
    pub expected: f64,
    pub weight: f64,
}

impl Criterion {
    pub fn new(attribute: impl Into<String>, mode: Comparison, expected: f64, weight: f64) -> Self {
        Self {
            attribute: attribute.into(),
            mode,
            expected,
            weight,
        }
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        let invalid = |reason| ScoringError::InvalidCriterion {
            attribute: self.attribute.clone(),
            reason,
        };

        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(invalid("weight must be positive"));
        }
        if !self.expected.is_finite() {
            return Err(invalid("expected value must be finite"));
        }
        if self.mode != Comparison::Exact && self.expected <= 0.0 {
            return Err(invalid("threshold must be greater than zero"));
        }
        Ok(())
    }

    /// Weighted credit earned by `value`. Never above the weight; an exact miss
    /// of more than one unit, or a negative value under a minimum, goes below zero.
    pub fn contribution(&self, value: f64) -> Result<f64, ScoringError> {
        self.validate()?;

        let credit = match self.mode {
            Comparison::Exact => 1.0 - (value - self.expected).abs(),
            Comparison::AtLeast if value >= self.expected => 1.0,
            Comparison::AtLeast => value / self.expected,
            Comparison::AtMost if value <= self.expected => 1.0,
            Comparison::AtMost => self.expected / value,
        };

        Ok(self.weight * credit)
    }
}

/// Mapping from each MBTI type to the ordered criteria describing a good fit.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaTable {
    profiles: BTreeMap<MbtiType, Vec<Criterion>>,
}

impl CriteriaTable {
    pub fn new(profiles: BTreeMap<MbtiType, Vec<Criterion>>) -> Result<Self, ScoringError> {
        for (mbti, criteria) in &profiles {
            if criteria.is_empty() {
                return Err(ScoringError::EmptyCriteria(*mbti));
            }
            for criterion in criteria {
                criterion.validate()?;
            }
        }

        Ok(Self { profiles })
    }

    /// The built-in profiles, one per type, derived from the questionnaire's career archetypes.
    pub fn standard() -> Self {
        use Comparison::{AtLeast, AtMost, Exact};

        let rows: [(&str, &[(&str, Comparison, f64, f64)]); 16] = [
            // Analysts
            (
                "INTJ",
                &[
                    ("people_person", Exact, 0.0, 2.0),
                    ("data_skill", Exact, 1.0, 1.5),
                    ("creativity_level", AtLeast, 1.0, 1.0),
                ],
            ),
            (
                "INTP",
                &[
                    ("people_person", Exact, 0.0, 2.0),
                    ("tech_comfort", Exact, 1.0, 1.5),
                    ("creativity_level", AtLeast, 2.0, 1.0),
                ],
            ),
            (
                "ENTJ",
                &[
                    ("people_person", Exact, 1.0, 2.0),
                    ("public_speaking", Exact, 1.0, 1.5),
                    ("data_skill", Exact, 1.0, 1.0),
                ],
            ),
            (
                "ENTP",
                &[
                    ("people_person", Exact, 1.0, 2.0),
                    ("public_speaking", Exact, 1.0, 1.0),
                    ("creativity_level", AtLeast, 2.0, 1.5),
                ],
            ),
            // Diplomats
            (
                "INFJ",
                &[
                    ("people_person", Exact, 1.0, 2.0),
                    ("teamwork", Exact, 1.0, 1.0),
                    ("creativity_level", AtLeast, 1.0, 1.0),
                    ("public_speaking", Exact, 0.0, 1.0),
                ],
            ),
            (
                "INFP",
                &[
                    ("people_person", Exact, 0.0, 1.5),
                    ("artistic", Exact, 1.0, 2.0),
                    ("creativity_level", AtLeast, 2.0, 1.5),
                ],
            ),
            (
                "ENFJ",
                &[
                    ("people_person", Exact, 1.0, 2.0),
                    ("public_speaking", Exact, 1.0, 1.5),
                    ("teamwork", Exact, 1.0, 1.5),
                ],
            ),
            (
                "ENFP",
                &[
                    ("people_person", Exact, 1.0, 1.5),
                    ("artistic", Exact, 1.0, 1.5),
                    ("creativity_level", AtLeast, 2.0, 2.0),
                ],
            ),
            // Sentinels
            (
                "ISTJ",
                &[
                    ("people_person", Exact, 0.0, 1.5),
                    ("data_skill", Exact, 1.0, 2.0),
                    ("preferred_work_env", Exact, 0.0, 1.0),
                ],
            ),
            (
                "ISFJ",
                &[
                    ("people_person", Exact, 1.0, 1.5),
                    ("teamwork", Exact, 0.0, 1.0),
                    ("data_skill", Exact, 1.0, 1.5),
                ],
            ),
            (
                "ESTJ",
                &[
                    ("people_person", Exact, 1.0, 1.5),
                    ("public_speaking", Exact, 1.0, 1.0),
                    ("preferred_work_env", Exact, 1.0, 1.0),
                    ("teamwork", Exact, 1.0, 1.5),
                ],
            ),
            (
                "ESFJ",
                &[
                    ("people_person", Exact, 1.0, 2.0),
                    ("teamwork", Exact, 1.0, 1.5),
                    ("creativity_level", AtMost, 1.0, 1.0),
                ],
            ),
            // Explorers
            (
                "ISTP",
                &[
                    ("people_person", Exact, 0.0, 1.0),
                    ("tech_comfort", Exact, 0.0, 1.0),
                    ("outdoor", Exact, 1.0, 2.0),
                ],
            ),
            (
                "ISFP",
                &[
                    ("people_person", Exact, 0.0, 1.0),
                    ("artistic", Exact, 1.0, 2.0),
                    ("outdoor", Exact, 1.0, 1.5),
                ],
            ),
            (
                "ESTP",
                &[
                    ("people_person", Exact, 1.0, 1.5),
                    ("outdoor", Exact, 1.0, 2.0),
                    ("public_speaking", Exact, 1.0, 1.5),
                ],
            ),
            (
                "ESFP",
                &[
                    ("people_person", Exact, 1.0, 1.5),
                    ("artistic", Exact, 1.0, 2.0),
                    ("preferred_work_env", Exact, 1.0, 1.0),
                ],
            ),
        ];

        let mut profiles = BTreeMap::new();
        for (code, criteria) in rows {
            let Ok(mbti) = code.parse::<MbtiType>() else {
                continue;
            };
            let criteria: Vec<Criterion> = criteria
                .iter()
                .map(|&(attribute, mode, expected, weight)| {
                    Criterion::new(attribute, mode, expected, weight)
                })
                .collect();
            profiles.insert(mbti, criteria);
        }

        Self { profiles }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CriteriaError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CriteriaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads a JSON object keyed by type code whose values are criteria lists.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CriteriaError> {
        let profiles: BTreeMap<MbtiType, Vec<Criterion>> = serde_json::from_reader(reader)?;
        Ok(Self::new(profiles)?)
    }

    pub fn criteria_for(&self, mbti: MbtiType) -> Result<&[Criterion], ScoringError> {
        self.profiles
            .get(&mbti)
            .map(Vec::as_slice)
            .ok_or(ScoringError::UnknownType(mbti))
    }

    pub fn types(&self) -> impl Iterator<Item = MbtiType> + '_ {
        self.profiles.keys().copied()
    }

    /// Prepares a scorer for one type; fails when the type has no usable profile.
    pub fn scorer(&self, mbti: MbtiType) -> Result<CriteriaScorer<'_>, ScoringError> {
        let criteria = self.criteria_for(mbti)?;
        if criteria.is_empty() {
            return Err(ScoringError::EmptyCriteria(mbti));
        }
        for criterion in criteria {
            criterion.validate()?;
        }

        Ok(CriteriaScorer {
            criteria,
            max_possible: criteria.iter().map(|criterion| criterion.weight).sum(),
        })
    }
}

impl Default for CriteriaTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Scores records against one resolved type profile.
#[derive(Debug, Clone, Copy)]
pub struct CriteriaScorer<'a> {
    criteria: &'a [Criterion],
    max_possible: f64,
}

/// Credit one criterion earned for a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionScore {
    pub attribute: String,
    pub mode: Comparison,
    pub value: f64,
    pub earned: f64,
    pub weight: f64,
}

/// Full scoring trail for a record, ending in the normalized 0-100 score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub components: Vec<CriterionScore>,
    pub raw_score: f64,
    pub unmodeled_attributes: Vec<String>,
    pub penalty: f64,
    pub max_possible: f64,
    pub match_score: u8,
}

impl<'a> CriteriaScorer<'a> {
    pub fn max_possible(&self) -> f64 {
        self.max_possible
    }

    /// Whether one of this type's criteria refers to `attribute`.
    pub fn is_modeled(&self, attribute: &str) -> bool {
        self.criteria
            .iter()
            .any(|criterion| criterion.attribute == attribute)
    }

    pub fn score(&self, record: &CareerRecord) -> Result<u8, ScoringError> {
        self.breakdown(record).map(|breakdown| breakdown.match_score)
    }

    pub fn breakdown(&self, record: &CareerRecord) -> Result<ScoreBreakdown, ScoringError> {
        let mut components = Vec::with_capacity(self.criteria.len());
        for criterion in self.criteria {
            let value = record.attribute(&criterion.attribute).unwrap_or(0.0);
            components.push(CriterionScore {
                attribute: criterion.attribute.clone(),
                mode: criterion.mode,
                value,
                earned: criterion.contribution(value)?,
                weight: criterion.weight,
            });
        }
        let raw_score: f64 = components.iter().map(|component| component.earned).sum();

        let unmodeled_attributes: Vec<String> = record
            .attribute_keys()
            .filter(|key| !self.is_modeled(key))
            .map(str::to_string)
            .collect();
        let penalty =
            unmodeled_attributes.len() as f64 * UNMODELED_ATTRIBUTE_PENALTY * self.max_possible;

        let clamped = (raw_score - penalty).max(0.0);
        let match_score = (100.0 * clamped / self.max_possible).round().clamp(0.0, 100.0) as u8;

        Ok(ScoreBreakdown {
            components,
            raw_score,
            unmodeled_attributes,
            penalty,
            max_possible: self.max_possible,
            match_score,
        })
    }
}
