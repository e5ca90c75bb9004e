//! User management endpoints. All of these require the admin role.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::{success, ApiResult};
use crate::auth::{self, Session};
use crate::errors::AppError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User, UserPublic};
use crate::AppState;

/// GET /api/users - List user accounts.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> ApiResult<Vec<UserPublic>> {
    session.require_admin()?;

    let users: Vec<User> = state.repo.list().await;
    success(users.into_iter().map(UserPublic::from).collect())
}

/// GET /api/users/:id - Get a single user account.
pub async fn get_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<u64>,
) -> ApiResult<UserPublic> {
    session.require_admin()?;

    let user: User = state.repo.get(id).await?;
    success(user.into())
}

/// POST /api/users - Create a user account.
pub async fn create_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<UserPublic> {
    session.require_admin()?;

    let username = request.username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("Username is required".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }

    let users: Vec<User> = state.repo.list().await;
    if users.iter().any(|u| u.username == username) {
        return Err(AppError::Validation(format!(
            "Username {} is already taken",
            username
        )));
    }

    let password_hash = auth::hash_password(&request.password);
    let user = state.repo.create(request.into_record(password_hash)).await?;
    success(user.into())
}

/// PUT /api/users/:id - Update a user account. A submitted password is
/// re-hashed; omitted fields keep their values.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<UserPublic> {
    session.require_admin()?;

    let password_hash = request
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(auth::hash_password);
    let user = state
        .repo
        .update(id, |user| request.apply(user, password_hash))
        .await?;
    success(user.into())
}

/// DELETE /api/users/:id - Delete a user account.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<u64>,
) -> ApiResult<()> {
    session.require_admin()?;

    state.repo.delete::<User>(id).await?;
    success(())
}
