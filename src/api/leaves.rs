//! Leave tracking endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateLeaveRequest, Leave, UpdateLeaveRequest};
use crate::AppState;

/// GET /api/leaves - List leave entries, newest first.
pub async fn list_leaves(State(state): State<AppState>) -> ApiResult<Vec<Leave>> {
    success(state.repo.list_by_date_desc().await)
}

/// GET /api/leaves/:id - Get a single leave entry.
pub async fn get_leave(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Leave> {
    success(state.repo.get(id).await?)
}

/// POST /api/leaves - Record a new leave entry.
pub async fn create_leave(
    State(state): State<AppState>,
    Json(request): Json<CreateLeaveRequest>,
) -> ApiResult<Leave> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if request.date.trim().is_empty() {
        return Err(AppError::Validation("Date is required".to_string()));
    }

    success(state.repo.create(request.into_record()).await?)
}

/// PUT /api/leaves/:id - Update a leave entry. Omitted fields keep their
/// stored values.
pub async fn update_leave(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateLeaveRequest>,
) -> ApiResult<Leave> {
    success(state.repo.update(id, |leave| request.apply(leave)).await?)
}

/// DELETE /api/leaves/:id - Delete a leave entry.
pub async fn delete_leave(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<()> {
    state.repo.delete::<Leave>(id).await?;
    success(())
}
