use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::JobRow;

/// Newest-first cap for job listings.
pub const LIST_LIMIT: i64 = 50;

/// Validated fields for a new job description.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub job_title: String,
    pub company_name: Option<String>,
    pub required_skills: Vec<String>,
    pub experience_required: Option<String>,
    pub education_required: Option<String>,
    pub job_description: String,
}

pub async fn insert_job(pool: &PgPool, job: &NewJob, created_by: Uuid) -> Result<JobRow, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO job_descriptions
            (id, job_title, company_name, required_skills, experience_required,
             education_required, job_description, created_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&job.job_title)
    .bind(&job.company_name)
    .bind(Json(&job.required_skills))
    .bind(&job.experience_required)
    .bind(&job.education_required)
    .bind(&job.job_description)
    .bind(created_by)
    .fetch_one(pool)
    .await
}

pub async fn get_job(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM job_descriptions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_jobs(pool: &PgPool, limit: i64) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM job_descriptions ORDER BY created_at DESC LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .await
}

/// Returns whether a row was deleted. Match results cascade.
pub async fn delete_job(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM job_descriptions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
