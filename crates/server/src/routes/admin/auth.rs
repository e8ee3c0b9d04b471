//! Admin login and logout.

use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;

use crate::error::{self, AppError, Result};
use crate::middleware::auth::bearer_token;
use crate::models::AdminUserPublic;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Login credentials.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// A minted session token plus the public user projection.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AdminUserPublic,
}

/// Log an admin in.
///
/// POST /api/admin/auth/login
///
/// On success the response carries a bearer token valid for 24 hours.
#[instrument(skip_all, fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let session = AuthService::new(state.pool(), &state.config().password_salt)
        .login(&request.email, &request.password)
        .await?;

    tracing::info!(admin_id = %session.user.id, "Admin logged in");

    Ok(Json(LoginResponse {
        token: session.token,
        user: session.user,
    }))
}

/// Log an admin out.
///
/// DELETE /api/admin/auth/logout
///
/// Deletes the server-side session row. Idempotent: a token that is
/// already gone still logs out successfully.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>> {
    let token = bearer_token(&headers).ok_or(AppError::Unauthorized)?;

    AuthService::new(state.pool(), &state.config().password_salt)
        .logout(token)
        .await?;
    error::clear_sentry_user();

    Ok(Json(json!({ "success": true })))
}
