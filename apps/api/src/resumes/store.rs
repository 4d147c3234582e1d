use std::collections::HashSet;

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::ResumeRow;
use crate::parsing::ParsedResume;

/// Newest-first cap for resume listings.
pub const LIST_LIMIT: i64 = 100;

/// Stores a freshly parsed resume. Resumes are never updated afterwards.
pub async fn insert_resume(
    pool: &PgPool,
    parsed: &ParsedResume,
    uploaded_by: Uuid,
) -> Result<ResumeRow, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes
            (id, candidate_name, email, phone, linkedin, github, file_path, raw_text,
             skills, experience, education, experience_years, parsed_data, uploaded_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&parsed.candidate_name)
    .bind(&parsed.email)
    .bind(&parsed.phone)
    .bind(&parsed.linkedin)
    .bind(&parsed.github)
    .bind(&parsed.file_path)
    .bind(&parsed.raw_text)
    .bind(Json(&parsed.skills))
    .bind(Json(&parsed.experience))
    .bind(Json(&parsed.education))
    .bind(&parsed.experience_years)
    .bind(Json(&parsed.parsed_data))
    .bind(uploaded_by)
    .fetch_one(pool)
    .await
}

pub async fn get_resume(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// A user's uploads, newest first.
pub async fn list_resumes_for_user(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE uploaded_by = $1 ORDER BY uploaded_at DESC LIMIT $2",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Fetches the given ids, preserving the requested order. Unknown ids are skipped.
pub async fn get_resumes_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<ResumeRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await?;

    let mut seen = HashSet::new();
    Ok(ids
        .iter()
        .filter(|id| seen.insert(**id))
        .filter_map(|id| rows.iter().find(|r| r.id == *id).cloned())
        .collect())
}

/// Deletes a resume (and, by cascade, its match results). Returns the deleted row.
pub async fn delete_resume(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("DELETE FROM resumes WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await
}
