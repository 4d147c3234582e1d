//! Matching: scores parsed resumes against a job description.
//!
//! The language model is asked first; any failure on that path drops to the
//! deterministic skill-overlap scorer, so a match call always yields a result.

pub mod fallback;
pub mod handlers;
pub mod matcher;
pub mod prompts;
pub mod response;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;
/// Score used when a reply carries no readable number.
pub const DEFAULT_SCORE: f64 = 5.0;
/// Upper bound on matched/missing skill lists.
pub const MAX_LISTED_SKILLS: usize = 10;

/// Hiring recommendation labels. The fallback scorer never emits `Maybe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Hire")]
    StrongHire,
    #[default]
    Consider,
    Maybe,
    Pass,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongHire => "Strong Hire",
            Recommendation::Consider => "Consider",
            Recommendation::Maybe => "Maybe",
            Recommendation::Pass => "Pass",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoredBy {
    Llm,
    Fallback,
}

impl ScoredBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoredBy::Llm => "llm",
            ScoredBy::Fallback => "fallback",
        }
    }
}

/// Scoring outcome for one (resume, job) pair, before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub match_score: f64,
    pub justification: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub overall_assessment: String,
    pub recommendation: Recommendation,
    pub scored_by: ScoredBy,
}

/// A batch entry: the outcome annotated with who it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub resume_id: Uuid,
    pub candidate_name: String,
    pub email: Option<String>,
    #[serde(flatten)]
    pub outcome: MatchOutcome,
}

pub fn clamp_score(score: f64) -> f64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}
