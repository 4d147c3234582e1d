//! Batch Matcher: model-first scoring with a local fallback.

use tracing::{info, warn};

use crate::llm_client::LlmBackend;
use crate::matching::fallback::fallback_match;
use crate::matching::prompts::build_match_prompt;
use crate::matching::response::parse_llm_response;
use crate::matching::{MatchOutcome, RankedMatch};
use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;

/// Prompt, generate, parse. Any backend failure is logged and replaced by the
/// fallback scorer, so this never fails.
pub async fn match_resume_to_job(
    llm: &dyn LlmBackend,
    resume: &ResumeRow,
    job: &JobRow,
) -> MatchOutcome {
    let prompt = build_match_prompt(resume, job);

    match llm.generate(&prompt).await {
        Ok(reply) => parse_llm_response(&reply),
        Err(e) => {
            warn!(
                "LLM unavailable for resume {} ({}): {e}; using fallback scorer",
                resume.id,
                llm.name()
            );
            fallback_match(&resume.skills, &job.required_skills)
        }
    }
}

/// Scores each resume in turn, one model call at a time, then orders by
/// score descending. Ties keep input order.
pub async fn batch_match_resumes(
    llm: &dyn LlmBackend,
    resumes: &[ResumeRow],
    job: &JobRow,
) -> Vec<RankedMatch> {
    let mut results = Vec::with_capacity(resumes.len());

    for resume in resumes {
        let outcome = match_resume_to_job(llm, resume, job).await;
        results.push(RankedMatch {
            resume_id: resume.id,
            candidate_name: resume.candidate_name.clone(),
            email: resume.email.clone(),
            outcome,
        });
    }

    // sort_by is stable
    results.sort_by(|a, b| b.outcome.match_score.total_cmp(&a.outcome.match_score));

    info!(
        "Matched {} resume(s) against job {} ({})",
        results.len(),
        job.id,
        job.job_title
    );
    results
}
