// Row builders shared by the matching tests.

use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;
use crate::parsing::ResumeStats;

pub fn resume_with_skills(name: &str, skills: &[&str]) -> ResumeRow {
    ResumeRow {
        id: Uuid::new_v4(),
        candidate_name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        phone: None,
        linkedin: None,
        github: None,
        file_path: "uploads/resume.pdf".to_string(),
        raw_text: String::new(),
        skills: Json(skills.iter().map(|s| s.to_string()).collect()),
        experience: Json(vec![]),
        education: Json(vec![]),
        experience_years: "5 years".to_string(),
        parsed_data: Json(ResumeStats::default()),
        uploaded_by: None,
        uploaded_at: Utc::now(),
    }
}

pub fn job_with_skills(skills: &[&str]) -> JobRow {
    JobRow {
        id: Uuid::new_v4(),
        job_title: "Backend Engineer".to_string(),
        company_name: Some("Acme Corp".to_string()),
        required_skills: Json(skills.iter().map(|s| s.to_string()).collect()),
        experience_required: None,
        education_required: None,
        job_description: "Build and run backend services.".to_string(),
        created_by: None,
        created_at: Utc::now(),
    }
}
