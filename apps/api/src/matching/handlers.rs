use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::jobs::store::get_job;
use crate::matching::matcher::batch_match_resumes;
use crate::matching::store::{
    insert_match_result, matches_for_job, recent_matches, statistics, MatchStatistics,
    RECENT_LIMIT,
};
use crate::matching::RankedMatch;
use crate::models::match_result::{CandidateMatchRow, MatchHistoryRow};
use crate::resumes::store::{get_resumes_by_ids, list_resumes_for_user, LIST_LIMIT};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job_id: Uuid,
    /// Defaults to the caller's own uploads.
    pub resume_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub message: &'static str,
    pub total_candidates: usize,
    pub results: Vec<RankedMatch>,
}

#[derive(Debug, Serialize)]
pub struct JobMatchesResponse {
    pub matches: Vec<CandidateMatchRow>,
}

#[derive(Debug, Serialize)]
pub struct RecentMatchesResponse {
    pub matches: Vec<MatchHistoryRow>,
}

/// POST /api/v1/match
///
/// Scores every selected resume against the job and appends each result.
pub async fn handle_match(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let job = get_job(&state.db, req.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    let resumes = match req.resume_ids.filter(|ids| !ids.is_empty()) {
        Some(ids) => get_resumes_by_ids(&state.db, &ids).await?,
        None => list_resumes_for_user(&state.db, user.id, LIST_LIMIT).await?,
    };
    if resumes.is_empty() {
        return Err(AppError::NotFound("No resumes found".to_string()));
    }

    info!(
        "Matching {} resume(s) against job {} using {} ({})",
        resumes.len(),
        job.id,
        state.llm.name(),
        state.llm.model()
    );
    let results = batch_match_resumes(state.llm.as_ref(), &resumes, &job).await;

    for ranked in &results {
        insert_match_result(&state.db, ranked.resume_id, job.id, &ranked.outcome).await?;
    }

    Ok(Json(MatchResponse {
        message: "Matching completed successfully",
        total_candidates: results.len(),
        results,
    }))
}

/// GET /api/v1/jobs/:id/matches
pub async fn handle_job_matches(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobMatchesResponse>, AppError> {
    let matches = matches_for_job(&state.db, job_id).await?;
    Ok(Json(JobMatchesResponse { matches }))
}

/// GET /api/v1/matches
pub async fn handle_recent_matches(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<RecentMatchesResponse>, AppError> {
    let matches = recent_matches(&state.db, RECENT_LIMIT).await?;
    Ok(Json(RecentMatchesResponse { matches }))
}

/// GET /api/v1/statistics
pub async fn handle_statistics(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<MatchStatistics>, AppError> {
    Ok(Json(statistics(&state.db).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_request_resume_ids_optional() {
        let id = Uuid::new_v4();
        let req: MatchRequest = serde_json::from_value(serde_json::json!({ "job_id": id })).unwrap();
        assert_eq!(req.job_id, id);
        assert!(req.resume_ids.is_none());
    }

    #[test]
    fn test_match_request_rejects_missing_job_id() {
        assert!(serde_json::from_value::<MatchRequest>(serde_json::json!({})).is_err());
    }
}
