//! Field Extractor: heuristic passes that turn resume text into a structured record.
//!
//! Every pass is independent and infallible: a missing email, an absent
//! experience section or an unrecognized name just leaves that field at its
//! default. Only text extraction itself can fail.

pub mod contact;
pub mod sections;
pub mod skills;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::extraction::{extract_text, ExtractionError};
use crate::parsing::contact::extract_contact_info;
use crate::parsing::sections::{estimate_experience_years, extract_education, extract_experience};
use crate::parsing::skills::extract_skills;

/// How many skills the one-line summary lists.
const SUMMARY_SKILLS: usize = 10;

/// One experience or education entry: a short preview plus the full block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub description: String,
    pub full_text: String,
}

/// Counts recorded alongside the parsed resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeStats {
    pub total_skills: usize,
    pub total_experiences: usize,
    pub total_education: usize,
}

/// Structured data recovered from one uploaded document, before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub file_path: String,
    pub raw_text: String,
    pub candidate_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<SectionEntry>,
    pub education: Vec<SectionEntry>,
    pub experience_years: String,
    pub parsed_data: ResumeStats,
}

/// Extracts text from `path` and runs every field pass over it.
/// Blocking: call from `spawn_blocking` inside async code.
pub fn parse_resume(path: &Path) -> Result<ParsedResume, ExtractionError> {
    let raw_text = extract_text(path)?;
    Ok(parse_resume_text(&raw_text, &path.display().to_string()))
}

pub fn parse_resume_text(raw_text: &str, file_path: &str) -> ParsedResume {
    let contact = extract_contact_info(raw_text);
    let skills = extract_skills(raw_text);
    let experience = extract_experience(raw_text);
    let education = extract_education(raw_text);
    let experience_years = estimate_experience_years(raw_text, experience.len());

    let parsed_data = ResumeStats {
        total_skills: skills.len(),
        total_experiences: experience.len(),
        total_education: education.len(),
    };

    ParsedResume {
        file_path: file_path.to_string(),
        raw_text: raw_text.to_string(),
        candidate_name: contact.name,
        email: contact.email,
        phone: contact.phone,
        linkedin: contact.linkedin,
        github: contact.github,
        skills,
        experience,
        education,
        experience_years,
        parsed_data,
    }
}

impl ParsedResume {
    /// One-line summary: "Candidate: … | Email: … | Skills: … | Experience: …".
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Candidate: {}", self.candidate_name)];

        if let Some(email) = &self.email {
            parts.push(format!("Email: {email}"));
        }
        if !self.skills.is_empty() {
            let skills: Vec<&str> = self
                .skills
                .iter()
                .take(SUMMARY_SKILLS)
                .map(String::as_str)
                .collect();
            parts.push(format!("Skills: {}", skills.join(", ")));
        }
        if !self.experience_years.is_empty() {
            parts.push(format!("Experience: {}", self.experience_years));
        }

        parts.join(" | ")
    }
}
