//! Shared link endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateLinkRequest, Link, UpdateLinkRequest};
use crate::AppState;

/// GET /api/links - List links.
pub async fn list_links(State(state): State<AppState>) -> ApiResult<Vec<Link>> {
    success(state.repo.list().await)
}

/// GET /api/links/:id - Get a single link.
pub async fn get_link(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Link> {
    success(state.repo.get(id).await?)
}

/// POST /api/links - Add a link.
pub async fn create_link(
    State(state): State<AppState>,
    Json(request): Json<CreateLinkRequest>,
) -> ApiResult<Link> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    if request.url.trim().is_empty() {
        return Err(AppError::Validation("URL is required".to_string()));
    }

    success(state.repo.create(request.into_record()).await?)
}

/// PUT /api/links/:id - Update a link.
pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateLinkRequest>,
) -> ApiResult<Link> {
    success(state.repo.update(id, |link| request.apply(link)).await?)
}

/// DELETE /api/links/:id - Delete a link.
pub async fn delete_link(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<()> {
    state.repo.delete::<Link>(id).await?;
    success(())
}
