use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub job_title: String,
    pub company_name: Option<String>,
    pub required_skills: Json<Vec<String>>,
    pub experience_required: Option<String>,
    pub education_required: Option<String>,
    pub job_description: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Required skills as clients send them: a JSON array or one comma-delimited string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RequiredSkills {
    List(Vec<String>),
    Delimited(String),
}

impl Default for RequiredSkills {
    fn default() -> Self {
        RequiredSkills::List(Vec::new())
    }
}

impl RequiredSkills {
    /// Trimmed entries with blanks dropped, in the order given.
    pub fn into_vec(self) -> Vec<String> {
        let raw = match self {
            RequiredSkills::List(items) => items,
            RequiredSkills::Delimited(s) => s.split(',').map(String::from).collect(),
        };
        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
