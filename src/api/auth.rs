//! Authentication endpoints.

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use super::{success, ApiResult};
use crate::auth::{self, Session};
use crate::errors::AppError;
use crate::models::{LoginRequest, User};
use crate::AppState;

/// Session details returned by login and `me`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub username: String,
    pub role: String,
    pub name: String,
    pub expires_at: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            username: session.username,
            role: session.role,
            name: session.name,
            expires_at: session.expires_at.to_rfc3339(),
        }
    }
}

/// POST /api/auth/login - Exchange credentials for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<SessionResponse> {
    let username = request.username.trim();
    if username.is_empty() || request.password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let users: Vec<User> = state.repo.list().await;
    let user = users
        .iter()
        .find(|u| u.username == username && auth::verify_password(&u.password, &request.password));

    match user {
        Some(user) => {
            let session = state.sessions.create(user).await;
            tracing::info!("User {} logged in", user.username);
            success(session.into())
        }
        None => Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        )),
    }
}

/// POST /api/auth/logout - Invalidate the current session.
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> ApiResult<()> {
    state.sessions.remove(&session.token).await;
    tracing::info!("User {} logged out", session.username);
    success(())
}

/// GET /api/auth/me - Describe the current session.
pub async fn current_session(Extension(session): Extension<Session>) -> ApiResult<SessionResponse> {
    success(session.into())
}
