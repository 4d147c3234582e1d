use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::jobs::store::{delete_job, get_job, insert_job, list_jobs, NewJob, LIST_LIMIT};
use crate::models::job::{JobRow, RequiredSkills};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    #[serde(default)]
    pub job_title: String,
    pub company_name: Option<String>,
    #[serde(default)]
    pub required_skills: RequiredSkills,
    pub experience_required: Option<String>,
    pub education_required: Option<String>,
    #[serde(default)]
    pub job_description: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CreateJobRequest {
    /// Title and description must be non-blank; skills are normalized.
    pub fn validate(self) -> Result<NewJob, AppError> {
        let job_title = self.job_title.trim().to_string();
        let job_description = self.job_description.trim().to_string();
        if job_title.is_empty() || job_description.is_empty() {
            return Err(AppError::Validation(
                "Job title and description are required".to_string(),
            ));
        }

        Ok(NewJob {
            job_title,
            company_name: non_blank(self.company_name),
            required_skills: self.required_skills.into_vec(),
            experience_required: non_blank(self.experience_required),
            education_required: non_blank(self.education_required),
            job_description,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreateJobResponse {
    pub message: &'static str,
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobRow>,
}

#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub job: JobRow,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<CreateJobResponse>), AppError> {
    let new_job = req.validate()?;
    let job = insert_job(&state.db, &new_job, user.id).await?;

    info!(
        "Created job {} '{}' with {} required skill(s)",
        job.id,
        job.job_title,
        job.required_skills.len()
    );
    Ok((
        StatusCode::CREATED,
        Json(CreateJobResponse {
            message: "Job description added successfully",
            job_id: job.id,
        }),
    ))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = list_jobs(&state.db, LIST_LIMIT).await?;
    Ok(Json(JobListResponse { jobs }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<JobResponse>, AppError> {
    let job = get_job(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(JobResponse { job }))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !delete_job(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }
    info!("Deleted job {id}");
    Ok(Json(DeleteResponse {
        message: "Job deleted successfully",
    }))
}
