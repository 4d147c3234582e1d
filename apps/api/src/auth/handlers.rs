use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::store::{create_user, get_user_by_username};
use crate::auth::{hash_password, verify_password};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn require_credentials(username: &str, password: &str) -> Result<(), AppError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Username and password required".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    require_credentials(&req.username, &req.password)?;

    let username = req.username.trim();
    let email = req.email.as_deref().map(str::trim).filter(|e| !e.is_empty());
    let password_hash = hash_password(&req.password)?;

    let user = create_user(&state.db, username, &password_hash, email)
        .await?
        .ok_or_else(|| AppError::Validation("Username already exists".to_string()))?;

    info!("Registered user {} ({})", user.username, user.id);
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful",
            user_id: user.id,
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    require_credentials(&req.username, &req.password)?;

    let user = get_user_by_username(&state.db, req.username.trim())
        .await?
        .filter(|user| verify_password(&req.password, &user.password_hash))
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let token = state.jwt.issue(&user)?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        user: SessionUser {
            id: user.id,
            username: user.username,
            role: user.role,
        },
    }))
}

/// POST /api/v1/auth/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn handle_logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logout successful",
    })
}
