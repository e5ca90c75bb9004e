//! Server fleet endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateServerRequest, Server, UpdateServerRequest};
use crate::AppState;

/// GET /api/servers - List servers.
pub async fn list_servers(State(state): State<AppState>) -> ApiResult<Vec<Server>> {
    success(state.repo.list().await)
}

/// GET /api/servers/:id - Get a single server.
pub async fn get_server(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Server> {
    success(state.repo.get(id).await?)
}

/// POST /api/servers - Register a server.
pub async fn create_server(
    State(state): State<AppState>,
    Json(request): Json<CreateServerRequest>,
) -> ApiResult<Server> {
    if request.server_name.trim().is_empty() {
        return Err(AppError::Validation("Server name is required".to_string()));
    }

    success(state.repo.create(request.into_record()).await?)
}

/// PUT /api/servers/:id - Update a server.
pub async fn update_server(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateServerRequest>,
) -> ApiResult<Server> {
    success(state.repo.update(id, |server| request.apply(server)).await?)
}

/// DELETE /api/servers/:id - Delete a server.
pub async fn delete_server(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<()> {
    state.repo.delete::<Server>(id).await?;
    success(())
}
