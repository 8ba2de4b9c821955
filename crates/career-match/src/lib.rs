//! Career suggestion engine: MBTI classification, weighted criteria scoring,
//! and the legacy attribute matcher over a static career catalog.

pub mod advisor;
pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
