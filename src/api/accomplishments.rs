//! Accomplishment endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Accomplishment, CreateAccomplishmentRequest, UpdateAccomplishmentRequest};
use crate::AppState;

/// GET /api/accomplishments - List accomplishments, newest first.
pub async fn list_accomplishments(
    State(state): State<AppState>,
) -> ApiResult<Vec<Accomplishment>> {
    success(state.repo.list_by_date_desc().await)
}

/// GET /api/accomplishments/:id - Get a single accomplishment.
pub async fn get_accomplishment(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Accomplishment> {
    success(state.repo.get(id).await?)
}

/// POST /api/accomplishments - Record a new accomplishment.
pub async fn create_accomplishment(
    State(state): State<AppState>,
    Json(request): Json<CreateAccomplishmentRequest>,
) -> ApiResult<Accomplishment> {
    if request.member_name.trim().is_empty() {
        return Err(AppError::Validation("Member name is required".to_string()));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::Validation("Description is required".to_string()));
    }

    success(state.repo.create(request.into_record()).await?)
}

/// PUT /api/accomplishments/:id - Update an accomplishment.
pub async fn update_accomplishment(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateAccomplishmentRequest>,
) -> ApiResult<Accomplishment> {
    success(state.repo.update(id, |acc| request.apply(acc)).await?)
}

/// DELETE /api/accomplishments/:id - Delete an accomplishment.
pub async fn delete_accomplishment(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<()> {
    state.repo.delete::<Accomplishment>(id).await?;
    success(())
}
