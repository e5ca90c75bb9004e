//! Build tracking endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Build, CreateBuildRequest, UpdateBuildRequest};
use crate::AppState;

/// GET /api/builds - List builds, newest first.
pub async fn list_builds(State(state): State<AppState>) -> ApiResult<Vec<Build>> {
    success(state.repo.list_by_date_desc().await)
}

/// GET /api/builds/:id - Get a single build.
pub async fn get_build(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Build> {
    success(state.repo.get(id).await?)
}

/// POST /api/builds - Record a build.
pub async fn create_build(
    State(state): State<AppState>,
    Json(request): Json<CreateBuildRequest>,
) -> ApiResult<Build> {
    if request.build_name.trim().is_empty() {
        return Err(AppError::Validation("Build name is required".to_string()));
    }
    if request.date.trim().is_empty() {
        return Err(AppError::Validation("Date is required".to_string()));
    }

    success(state.repo.create(request.into_record()).await?)
}

/// PUT /api/builds/:id - Update a build.
pub async fn update_build(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateBuildRequest>,
) -> ApiResult<Build> {
    success(state.repo.update(id, |build| request.apply(build)).await?)
}

/// DELETE /api/builds/:id - Delete a build.
pub async fn delete_build(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<()> {
    state.repo.delete::<Build>(id).await?;
    success(())
}
