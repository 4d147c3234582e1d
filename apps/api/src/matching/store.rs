use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::matching::MatchOutcome;
use crate::models::match_result::{CandidateMatchRow, MatchHistoryRow, MatchResultRow};

pub const RECENT_LIMIT: i64 = 100;

/// Appends one result. Re-matching the same pair adds another row.
pub async fn insert_match_result(
    pool: &PgPool,
    resume_id: Uuid,
    job_id: Uuid,
    outcome: &MatchOutcome,
) -> Result<MatchResultRow, sqlx::Error> {
    sqlx::query_as::<_, MatchResultRow>(
        r#"
        INSERT INTO match_results
            (id, resume_id, job_id, match_score, justification, matched_skills,
             missing_skills, overall_assessment, recommendation, scored_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(resume_id)
    .bind(job_id)
    .bind(outcome.match_score)
    .bind(&outcome.justification)
    .bind(Json(&outcome.matched_skills))
    .bind(Json(&outcome.missing_skills))
    .bind(&outcome.overall_assessment)
    .bind(outcome.recommendation.as_str())
    .bind(outcome.scored_by.as_str())
    .fetch_one(pool)
    .await
}

/// Stored results for a job with candidate contact details, best first.
pub async fn matches_for_job(pool: &PgPool, job_id: Uuid) -> Result<Vec<CandidateMatchRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateMatchRow>(
        r#"
        SELECT mr.*, r.candidate_name, r.email, r.phone
        FROM match_results mr
        JOIN resumes r ON mr.resume_id = r.id
        WHERE mr.job_id = $1
        ORDER BY mr.match_score DESC, mr.created_at DESC
        "#,
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}

pub async fn recent_matches(pool: &PgPool, limit: i64) -> Result<Vec<MatchHistoryRow>, sqlx::Error> {
    sqlx::query_as::<_, MatchHistoryRow>(
        r#"
        SELECT mr.*, r.candidate_name, j.job_title
        FROM match_results mr
        JOIN resumes r ON mr.resume_id = r.id
        JOIN job_descriptions j ON mr.job_id = j.id
        ORDER BY mr.created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MatchStatistics {
    pub total_resumes: i64,
    pub total_jobs: i64,
    pub total_matches: i64,
    pub average_match_score: f64,
}

/// Aggregate counts; the average is rounded to two decimals and 0 when empty.
pub async fn statistics(pool: &PgPool) -> Result<MatchStatistics, sqlx::Error> {
    sqlx::query_as::<_, MatchStatistics>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM resumes) AS total_resumes,
            (SELECT COUNT(*) FROM job_descriptions) AS total_jobs,
            (SELECT COUNT(*) FROM match_results) AS total_matches,
            COALESCE(ROUND((SELECT AVG(match_score) FROM match_results)::numeric, 2), 0)::float8
                AS average_match_score
        "#,
    )
    .fetch_one(pool)
    .await
}
