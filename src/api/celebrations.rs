//! Celebration endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Celebration, CreateCelebrationRequest, UpdateCelebrationRequest};
use crate::AppState;

/// GET /api/celebrations - List celebrations, newest first.
pub async fn list_celebrations(State(state): State<AppState>) -> ApiResult<Vec<Celebration>> {
    success(state.repo.list_by_date_desc().await)
}

/// GET /api/celebrations/:id - Get a single celebration.
pub async fn get_celebration(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Celebration> {
    success(state.repo.get(id).await?)
}

/// POST /api/celebrations - Add a celebration.
pub async fn create_celebration(
    State(state): State<AppState>,
    Json(request): Json<CreateCelebrationRequest>,
) -> ApiResult<Celebration> {
    if request.member_name.trim().is_empty() {
        return Err(AppError::Validation("Member name is required".to_string()));
    }

    success(state.repo.create(request.into_record()).await?)
}

/// PUT /api/celebrations/:id - Update a celebration.
pub async fn update_celebration(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateCelebrationRequest>,
) -> ApiResult<Celebration> {
    success(state.repo.update(id, |cel| request.apply(cel)).await?)
}

/// DELETE /api/celebrations/:id - Delete a celebration.
pub async fn delete_celebration(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<()> {
    state.repo.delete::<Celebration>(id).await?;
    success(())
}
