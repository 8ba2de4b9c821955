use crate::infra::load_advisor;
use career_match::advisor::{CareerAdvisor, ScoredCareer};
use career_match::config::AppConfig;
use career_match::error::AppError;
use career_match::matching::{LegacyMatch, MbtiType};
use clap::Args;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct MbtiArgs {
    /// Questionnaire answers as letters, comma separated or as one string (e.g. INTJINTJ...)
    #[arg(
        long,
        value_delimiter = ',',
        required_unless_present = "mbti_type",
        conflicts_with = "mbti_type"
    )]
    pub(crate) answers: Vec<String>,
    /// Skip classification and rank careers for this type
    #[arg(long = "type")]
    pub(crate) mbti_type: Option<MbtiType>,
    /// Override the configured career catalog path
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AttributeArgs {
    /// Answers as a JSON object, e.g. '{"people_person":1,"creativity_level":2}'
    #[arg(long, value_parser = parse_json)]
    pub(crate) answers: Value,
    /// Override the configured career catalog path
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|err| format!("answers must be valid JSON ({err})"))
}

pub(crate) fn run_mbti_suggestions(args: MbtiArgs) -> Result<(), AppError> {
    let MbtiArgs {
        answers,
        mbti_type,
        catalog,
    } = args;

    let advisor = advisor_with_catalog(catalog)?;
    let (mbti_type, suggestions) = match mbti_type {
        Some(mbti_type) => (mbti_type, advisor.suggest_for_type(mbti_type)?),
        None => {
            let result = advisor.suggest_by_mbti(&answer_map(&answers))?;
            (result.mbti_type, result.suggestions)
        }
    };

    render_mbti_suggestions(mbti_type, &suggestions);
    Ok(())
}

pub(crate) fn run_attribute_suggestions(args: AttributeArgs) -> Result<(), AppError> {
    let advisor = advisor_with_catalog(args.catalog)?;
    let suggestions = advisor.suggest_by_attributes(&args.answers)?;

    render_attribute_suggestions(&suggestions);
    Ok(())
}

fn advisor_with_catalog(catalog: Option<PathBuf>) -> Result<CareerAdvisor, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = catalog {
        config.catalog.path = path;
    }
    load_advisor(&config)
}

/// Numbers answers `q1..qN`; a single multi-letter argument is split per letter.
fn answer_map(answers: &[String]) -> Value {
    let letters: Vec<String> = match answers {
        [single] if single.chars().count() > 1 => {
            single.chars().map(|letter| letter.to_string()).collect()
        }
        _ => answers
            .iter()
            .map(|answer| answer.trim().to_string())
            .collect(),
    };

    let map: Map<String, Value> = letters
        .into_iter()
        .enumerate()
        .map(|(idx, letter)| (format!("q{}", idx + 1), Value::String(letter)))
        .collect();
    Value::Object(map)
}

fn render_mbti_suggestions(mbti_type: MbtiType, suggestions: &[ScoredCareer]) {
    println!("MBTI type: {mbti_type}");

    if suggestions.is_empty() {
        println!("\nSuggestions: none");
        return;
    }

    println!("\nSuggestions");
    for (rank, entry) in suggestions.iter().enumerate() {
        println!(
            "{}. {} ({}%) - {}",
            rank + 1,
            entry.career.name,
            entry.match_score,
            entry.career.detail
        );
    }
}

fn render_attribute_suggestions(suggestions: &[LegacyMatch]) {
    if suggestions.is_empty() {
        println!("Suggestions: none");
        return;
    }

    println!("Suggestions");
    for (rank, entry) in suggestions.iter().enumerate() {
        println!(
            "{}. {} | score {:.2} | {} compatible - {}",
            rank + 1,
            entry.name,
            entry.match_score,
            entry.compatibility,
            entry.detail
        );
    }
}
