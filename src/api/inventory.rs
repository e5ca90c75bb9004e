//! Inventory endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateInventoryItemRequest, InventoryItem, UpdateInventoryItemRequest};
use crate::AppState;

/// GET /api/inventory - List inventory items.
pub async fn list_inventory(State(state): State<AppState>) -> ApiResult<Vec<InventoryItem>> {
    success(state.repo.list().await)
}

/// GET /api/inventory/:id - Get a single inventory item.
pub async fn get_inventory_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<InventoryItem> {
    success(state.repo.get(id).await?)
}

/// POST /api/inventory - Add an inventory item.
pub async fn create_inventory_item(
    State(state): State<AppState>,
    Json(request): Json<CreateInventoryItemRequest>,
) -> ApiResult<InventoryItem> {
    if request.item_name.trim().is_empty() {
        return Err(AppError::Validation("Item name is required".to_string()));
    }

    success(state.repo.create(request.into_record()).await?)
}

/// PUT /api/inventory/:id - Update an inventory item.
pub async fn update_inventory_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateInventoryItemRequest>,
) -> ApiResult<InventoryItem> {
    success(state.repo.update(id, |item| request.apply(item)).await?)
}

/// DELETE /api/inventory/:id - Delete an inventory item.
pub async fn delete_inventory_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<()> {
    state.repo.delete::<InventoryItem>(id).await?;
    success(())
}
