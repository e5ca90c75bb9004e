//! Meeting notes endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateMeetingRequest, Meeting, UpdateMeetingRequest};
use crate::AppState;

/// GET /api/meetings - List meetings, newest first.
pub async fn list_meetings(State(state): State<AppState>) -> ApiResult<Vec<Meeting>> {
    success(state.repo.list_by_date_desc().await)
}

/// GET /api/meetings/:id - Get a single meeting.
pub async fn get_meeting(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Meeting> {
    success(state.repo.get(id).await?)
}

/// POST /api/meetings - Record a meeting.
pub async fn create_meeting(
    State(state): State<AppState>,
    Json(request): Json<CreateMeetingRequest>,
) -> ApiResult<Meeting> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("Topic is required".to_string()));
    }

    success(state.repo.create(request.into_record()).await?)
}

/// PUT /api/meetings/:id - Update a meeting.
pub async fn update_meeting(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateMeetingRequest>,
) -> ApiResult<Meeting> {
    success(state.repo.update(id, |meeting| request.apply(meeting)).await?)
}

/// DELETE /api/meetings/:id - Delete a meeting.
pub async fn delete_meeting(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<()> {
    state.repo.delete::<Meeting>(id).await?;
    success(())
}
