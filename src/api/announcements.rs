//! Announcement endpoints.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::{success, ApiResult};
use crate::auth::Session;
use crate::errors::AppError;
use crate::models::{Announcement, CreateAnnouncementRequest, UpdateAnnouncementRequest};
use crate::AppState;

/// GET /api/announcements - List announcements, newest first.
pub async fn list_announcements(State(state): State<AppState>) -> ApiResult<Vec<Announcement>> {
    success(state.repo.list_by_date_desc().await)
}

/// GET /api/announcements/:id - Get a single announcement.
pub async fn get_announcement(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Announcement> {
    success(state.repo.get(id).await?)
}

/// POST /api/announcements - Post an announcement. The poster is the
/// session's display name.
pub async fn create_announcement(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(request): Json<CreateAnnouncementRequest>,
) -> ApiResult<Announcement> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let record = request.into_record(session.name);
    success(state.repo.create(record).await?)
}

/// PUT /api/announcements/:id - Edit an announcement. The original poster
/// is preserved.
pub async fn update_announcement(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateAnnouncementRequest>,
) -> ApiResult<Announcement> {
    success(state.repo.update(id, |ann| request.apply(ann)).await?)
}

/// DELETE /api/announcements/:id - Delete an announcement.
pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<()> {
    state.repo.delete::<Announcement>(id).await?;
    success(())
}
