use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::parsing::{ResumeStats, SectionEntry};

/// A parsed resume as stored. List-valued fields are JSONB columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub candidate_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub file_path: String,
    pub raw_text: String,
    pub skills: Json<Vec<String>>,
    pub experience: Json<Vec<SectionEntry>>,
    pub education: Json<Vec<SectionEntry>>,
    pub experience_years: String,
    pub parsed_data: Json<ResumeStats>,
    pub uploaded_by: Option<Uuid>,
    pub uploaded_at: DateTime<Utc>,
}
