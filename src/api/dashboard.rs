//! Dashboard endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::summary::stats::{self, DashboardStats};
use crate::AppState;

/// GET /api/dashboard/stats - Summary statistics for the landing page.
pub async fn dashboard_stats(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    success(stats::collect(&state.repo).await)
}
