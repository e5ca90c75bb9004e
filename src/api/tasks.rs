//! Task endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateTaskRequest, Task, UpdateTaskRequest};
use crate::AppState;

/// GET /api/tasks - List tasks.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Vec<Task>> {
    success(state.repo.list().await)
}

/// GET /api/tasks/:id - Get a single task.
pub async fn get_task(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Task> {
    success(state.repo.get(id).await?)
}

/// POST /api/tasks - Add a task.
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<Task> {
    if request.member_name.trim().is_empty() {
        return Err(AppError::Validation("Member name is required".to_string()));
    }
    if request.task_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Task description is required".to_string(),
        ));
    }

    success(state.repo.create(request.into_record()).await?)
}

/// PUT /api/tasks/:id - Update a task.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Task> {
    success(state.repo.update(id, |task| request.apply(task)).await?)
}

/// DELETE /api/tasks/:id - Delete a task.
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<()> {
    state.repo.delete::<Task>(id).await?;
    success(())
}
