//! Skills matrix endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateSkillRequest, Skill, UpdateSkillRequest};
use crate::AppState;

/// GET /api/skills - List skill ratings.
pub async fn list_skills(State(state): State<AppState>) -> ApiResult<Vec<Skill>> {
    success(state.repo.list().await)
}

/// GET /api/skills/matrix - Skill ratings grouped by member name.
pub async fn skills_matrix(
    State(state): State<AppState>,
) -> ApiResult<BTreeMap<String, Vec<Skill>>> {
    let skills: Vec<Skill> = state.repo.list().await;

    let mut by_member: BTreeMap<String, Vec<Skill>> = BTreeMap::new();
    for skill in skills {
        by_member.entry(skill.name.clone()).or_default().push(skill);
    }

    success(by_member)
}

/// GET /api/skills/:id - Get a single skill rating.
pub async fn get_skill(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Skill> {
    success(state.repo.get(id).await?)
}

/// POST /api/skills - Add a skill rating. `lastUpdated` defaults to today.
pub async fn create_skill(
    State(state): State<AppState>,
    Json(request): Json<CreateSkillRequest>,
) -> ApiResult<Skill> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if request.skill.trim().is_empty() {
        return Err(AppError::Validation("Skill is required".to_string()));
    }

    let record = request.into_record(crate::summary::today());
    success(state.repo.create(record).await?)
}

/// PUT /api/skills/:id - Update a skill rating.
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateSkillRequest>,
) -> ApiResult<Skill> {
    success(state.repo.update(id, |skill| request.apply(skill)).await?)
}

/// DELETE /api/skills/:id - Delete a skill rating.
pub async fn delete_skill(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<()> {
    state.repo.delete::<Skill>(id).await?;
    success(())
}
