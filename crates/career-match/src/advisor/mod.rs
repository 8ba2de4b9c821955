//! Career suggestion service and its HTTP surface.
//!
//! [`CareerAdvisor`] owns the loaded catalog and criteria table and answers
//! both questionnaire flavors; [`advisor_router`] exposes it over axum.

pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use router::advisor_router;
pub use service::{AdvisorError, CareerAdvisor, MbtiSuggestions, ScoredCareer};
