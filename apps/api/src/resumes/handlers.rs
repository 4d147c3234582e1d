use std::path::{Path as FsPath, PathBuf};

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extraction::DocumentKind;
use crate::models::resume::ResumeRow;
use crate::parsing::parse_resume;
use crate::resumes::store::{
    delete_resume, get_resume, insert_resume, list_resumes_for_user, LIST_LIMIT,
};
use crate::state::AppState;

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";
/// Skills shown per resume in listings.
const LISTED_SKILLS: usize = 10;

#[derive(Debug, Serialize)]
pub struct UploadSummary {
    pub candidate_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: String,
    pub total_skills: usize,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub resume_id: Uuid,
    pub data: UploadSummary,
}

#[derive(Debug, Serialize)]
pub struct ResumeListItem {
    pub id: Uuid,
    pub candidate_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<ResumeRow> for ResumeListItem {
    fn from(row: ResumeRow) -> Self {
        ResumeListItem {
            id: row.id,
            candidate_name: row.candidate_name,
            email: row.email,
            phone: row.phone,
            skills: row.skills.0.into_iter().take(LISTED_SKILLS).collect(),
            experience_years: row.experience_years,
            uploaded_at: row.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeListItem>,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume: ResumeRow,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Stem used when nothing of the uploaded name survives sanitizing.
const FALLBACK_STEM: &str = "resume";

/// Keeps ASCII letters, digits, '.', '-' and '_' of the base name's stem;
/// everything else becomes '_'. Leading dots and underscores are stripped so
/// the result can never be hidden or escape the upload directory. The
/// extension is always the canonical one for `kind`.
pub fn sanitize_filename(name: &str, kind: DocumentKind) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let stem = FsPath::new(base)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches(['.', '_']);
    let stem = if cleaned.is_empty() { FALLBACK_STEM } else { cleaned };
    format!("{stem}.{}", kind.extension())
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

/// Pulls the `file` field out of the form as (original filename, bytes).
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().trim().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok((filename, data));
    }
    Err(AppError::Validation("No file provided".to_string()))
}

/// POST /api/v1/resumes
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let (original_name, data) = read_upload(&mut multipart).await?;

    let extension = FsPath::new(&original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let Some(kind) = DocumentKind::from_extension(extension) else {
        return Err(AppError::UnsupportedFormat(
            "Invalid file type. Only PDF and DOCX allowed".to_string(),
        ));
    };

    let stored_name = format!(
        "{}_{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        sanitize_filename(&original_name, kind)
    );
    let path: PathBuf = FsPath::new(&state.config.upload_dir).join(stored_name);

    tokio::fs::write(&path, &data)
        .await
        .with_context(|| format!("Failed to store upload at {}", path.display()))?;
    info!(
        "Stored upload {} ({} bytes) for user {}",
        path.display(),
        data.len(),
        user.username
    );

    let parse_path = path.clone();
    let parsed = tokio::task::spawn_blocking(move || parse_resume(&parse_path))
        .await
        .context("Resume parser task failed")?;

    let parsed = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            if let Err(rm) = tokio::fs::remove_file(&path).await {
                warn!("Could not remove unparseable upload {}: {rm}", path.display());
            }
            return Err(e.into());
        }
    };

    info!("Parsed resume: {}", parsed.summary());
    let row = insert_resume(&state.db, &parsed, user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Resume uploaded and parsed successfully",
            resume_id: row.id,
            data: UploadSummary {
                total_skills: parsed.skills.len(),
                candidate_name: parsed.candidate_name,
                email: parsed.email,
                phone: parsed.phone,
                skills: parsed.skills,
                experience_years: parsed.experience_years,
            },
        }),
    ))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ResumeListResponse>, AppError> {
    let rows = list_resumes_for_user(&state.db, user.id, LIST_LIMIT).await?;
    Ok(Json(ResumeListResponse {
        resumes: rows.into_iter().map(ResumeListItem::from).collect(),
    }))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = get_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(ResumeResponse { resume }))
}

/// DELETE /api/v1/resumes/:id
///
/// Only the uploader (or an admin) may delete. The stored file is removed
/// best-effort after the row is gone.
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    let existing = get_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let owns = existing.uploaded_by.map_or(true, |owner| owner == user.id);
    if !owns && user.role != "admin" {
        return Err(AppError::Forbidden);
    }

    let deleted = delete_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    if let Err(e) = tokio::fs::remove_file(&deleted.file_path).await {
        warn!("Could not remove stored file {}: {e}", deleted.file_path);
    }

    info!("Deleted resume {id}");
    Ok(Json(DeleteResponse {
        message: "Resume deleted successfully",
    }))
}
