use super::common::*;
use serde_json::json;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::advisor::{AdvisorError, CareerAdvisor};
use crate::catalog::CareerId;
use crate::config::SuggestionLimits;
use crate::matching::{
    AnswerError, Comparison, CriteriaTable, Criterion, MbtiType, ScoringError,
};

fn ids(suggestions: &[crate::advisor::ScoredCareer]) -> Vec<CareerId> {
    suggestions
        .iter()
        .map(|entry| entry.career.id.clone())
        .collect()
}

#[test]
fn mbti_suggestions_rank_unique_catalog() {
    let advisor = advisor();
    let result = advisor
        .suggest_by_mbti(&mbti_answers(&["I", "N", "T", "J"], 16))
        .expect("suggestions computed");

    // Judging majority is labeled P on the lifestyle axis.
    assert_eq!(result.mbti_type.to_string(), "INTP");
    assert_eq!(
        ids(&result.suggestions),
        vec![
            CareerId::Number(1),
            CareerId::Number(6),
            CareerId::Number(5),
            CareerId::Number(3),
            CareerId::Number(2),
        ]
    );
    let scores: Vec<u8> = result
        .suggestions
        .iter()
        .map(|entry| entry.match_score)
        .collect();
    // Six of nine attributes fall outside INTP's profile, costing 30 points.
    assert_eq!(scores, vec![70, 70, 48, 26, 0]);
}

#[test]
fn duplicate_names_only_reach_the_legacy_path() {
    let advisor = advisor();

    let mbti = advisor
        .suggest_for_type("INTP".parse().expect("valid type"))
        .expect("suggestions computed");
    assert!(!ids(&mbti).contains(&CareerId::Number(4)));

    let legacy = advisor
        .suggest_by_attributes(&data_scientist_answers())
        .expect("suggestions computed");
    let legacy_ids: Vec<_> = legacy.iter().map(|entry| entry.id.clone()).collect();
    assert_eq!(
        legacy_ids,
        vec![
            CareerId::Number(1),
            CareerId::Number(4),
            CareerId::Number(5)
        ]
    );
    assert_eq!(legacy[0].compatibility, "100%");
    assert_eq!(legacy[2].match_score, 8.0);
    assert_eq!(legacy[2].compatibility, "89%");
}

#[test]
fn mbti_path_rejects_short_questionnaires() {
    let advisor = advisor();
    let err = advisor
        .suggest_by_mbti(&mbti_answers(&["E", "S", "T", "J"], 10))
        .expect_err("ten answers rejected");

    assert_eq!(
        err,
        AdvisorError::InvalidInput(AnswerError::TooFewAnswers {
            required: 16,
            found: 10
        })
    );
}

#[test]
fn legacy_path_rejects_empty_body() {
    let advisor = advisor();
    let err = advisor
        .suggest_by_attributes(&json!({}))
        .expect_err("empty body rejected");
    assert_eq!(err, AdvisorError::InvalidInput(AnswerError::Empty));
}

#[test]
fn legacy_path_tolerates_unknown_fields() {
    let advisor = advisor();
    let suggestions = advisor
        .suggest_by_attributes(&json!({ "favorite_color": "green" }))
        .expect("unknown fields accepted");

    assert_eq!(suggestions.len(), 3);
    assert!(suggestions.iter().all(|entry| entry.match_score == 0.0));
    assert_eq!(suggestions[0].id, CareerId::Number(1));
}

#[test]
fn unmapped_type_is_a_configuration_error() {
    let mut profiles = BTreeMap::new();
    profiles.insert(
        "ISTJ".parse::<MbtiType>().expect("valid type"),
        vec![Criterion::new("data_skill", Comparison::Exact, 1.0, 1.0)],
    );
    let table = CriteriaTable::new(profiles).expect("table builds");
    let advisor = CareerAdvisor::new(
        Arc::new(sample_catalog()),
        table,
        SuggestionLimits::default(),
    );

    let err = advisor
        .suggest_by_mbti(&mbti_answers(&["E", "N", "F", "P"], 16))
        .expect_err("unmapped type");
    assert_eq!(
        err,
        AdvisorError::Configuration(ScoringError::UnknownType(
            "ENFJ".parse().expect("valid type")
        ))
    );
}

#[test]
fn limits_are_respected() {
    let limits = SuggestionLimits {
        mbti: NonZeroUsize::new(2).expect("non-zero"),
        legacy: NonZeroUsize::new(10).expect("non-zero"),
    };
    let advisor = CareerAdvisor::new(
        Arc::new(sample_catalog()),
        CriteriaTable::standard(),
        limits,
    );

    let mbti = advisor
        .suggest_by_mbti(&mbti_answers(&["E", "S", "F", "J"], 16))
        .expect("suggestions computed");
    assert_eq!(mbti.suggestions.len(), 2);

    let legacy = advisor
        .suggest_by_attributes(&data_scientist_answers())
        .expect("suggestions computed");
    assert_eq!(legacy.len(), 7);
    assert!(legacy
        .windows(2)
        .all(|pair| pair[0].match_score >= pair[1].match_score));
}

#[test]
fn every_type_produces_bounded_rankings() {
    let advisor = advisor();
    for mbti in MbtiType::all() {
        let suggestions = advisor.suggest_for_type(mbti).expect("type mapped");
        assert!(suggestions.len() <= 5);
        assert!(suggestions.len() <= advisor.catalog().unique().len());
        assert!(suggestions
            .windows(2)
            .all(|pair| pair[0].match_score >= pair[1].match_score));
        assert!(suggestions.iter().all(|entry| entry.match_score <= 100));
    }
}
