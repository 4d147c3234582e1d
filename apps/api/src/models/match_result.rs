use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored scoring outcome. Rows are only ever inserted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchResultRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub job_id: Uuid,
    pub match_score: f64,
    pub justification: String,
    pub matched_skills: Json<Vec<String>>,
    pub missing_skills: Json<Vec<String>>,
    pub overall_assessment: String,
    pub recommendation: String,
    pub scored_by: String,
    pub created_at: DateTime<Utc>,
}

/// A stored result joined with the candidate's contact details.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateMatchRow {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub result: MatchResultRow,
    pub candidate_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A stored result joined with candidate name and job title, for history views.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchHistoryRow {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub result: MatchResultRow,
    pub candidate_name: String,
    pub job_title: String,
}
