// Match prompt for the recruiter model. The reply format below is what
// matching::response parses; keep the five headings in sync with it.

use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;

const JOB_DESCRIPTION_CHARS: usize = 500;
const PROMPT_SKILLS: usize = 20;

pub fn build_match_prompt(resume: &ResumeRow, job: &JobRow) -> String {
    let required_skills = job.required_skills.join(", ");
    let experience_required = job
        .experience_required
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Not specified");
    let job_description: String = job
        .job_description
        .chars()
        .take(JOB_DESCRIPTION_CHARS)
        .collect();
    let candidate_skills = if resume.skills.is_empty() {
        "None specified".to_string()
    } else {
        resume
            .skills
            .iter()
            .take(PROMPT_SKILLS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        r#"Compare the following resume with the job description and provide a detailed match analysis.

JOB DETAILS:
Job Title: {job_title}
Required Skills: {required_skills}
Experience Required: {experience_required}
Job Description: {job_description}

CANDIDATE DETAILS:
Name: {candidate_name}
Skills: {candidate_skills}
Experience: {candidate_experience}

TASK:
Rate the fit between this candidate and the job on a scale of 1-10, where:
- 1-3: Poor fit (major gaps in requirements)
- 4-6: Moderate fit (some relevant skills but significant gaps)
- 7-8: Good fit (most requirements met)
- 9-10: Excellent fit (all or nearly all requirements met with strong alignment)

Provide your response in the following format:

MATCH SCORE: [score from 1-10]

MATCHED SKILLS:
- [list skills that match between candidate and job requirements]

MISSING SKILLS:
- [list required skills that candidate doesn't have]

JUSTIFICATION:
[Provide 2-3 sentences explaining the score, highlighting strengths and gaps]

RECOMMENDATION:
[Provide a hiring recommendation: "Strong Hire", "Consider", "Maybe", or "Pass"]
"#,
        job_title = job.job_title,
        candidate_name = resume.candidate_name,
        candidate_experience = resume.experience_years,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::test_support::{job_with_skills, resume_with_skills};

    #[test]
    fn test_prompt_contains_job_and_candidate_details() {
        let resume = resume_with_skills("Jane Smith", &["Python", "Flask"]);
        let job = job_with_skills(&["Python", "AWS"]);
        let prompt = build_match_prompt(&resume, &job);

        assert!(prompt.contains("Job Title: Backend Engineer"));
        assert!(prompt.contains("Required Skills: Python, AWS"));
        assert!(prompt.contains("Experience Required: Not specified"));
        assert!(prompt.contains("Name: Jane Smith"));
        assert!(prompt.contains("Skills: Python, Flask"));
        for heading in ["MATCH SCORE:", "MATCHED SKILLS:", "MISSING SKILLS:", "JUSTIFICATION:", "RECOMMENDATION:"] {
            assert!(prompt.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_prompt_truncates_description_and_skills() {
        let skills: Vec<String> = (0..30).map(|i| format!("Skill{i}")).collect();
        let skill_refs: Vec<&str> = skills.iter().map(String::as_str).collect();
        let resume = resume_with_skills("Jane Smith", &skill_refs);
        let mut job = job_with_skills(&[]);
        job.job_description = "d".repeat(800);

        let prompt = build_match_prompt(&resume, &job);
        assert!(prompt.contains(&format!("Job Description: {}\n", "d".repeat(500))));
        assert!(prompt.contains("Skill19"));
        assert!(!prompt.contains("Skill20"));
    }

    #[test]
    fn test_prompt_marks_missing_candidate_skills() {
        let resume = resume_with_skills("Jane Smith", &[]);
        let prompt = build_match_prompt(&resume, &job_with_skills(&["Go"]));
        assert!(prompt.contains("Skills: None specified"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let resume = resume_with_skills("Jane Smith", &["Rust"]);
        let job = job_with_skills(&["Rust"]);
        assert_eq!(build_match_prompt(&resume, &job), build_match_prompt(&resume, &job));
    }
}
