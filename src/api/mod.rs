//! REST API module.
//!
//! Contains all API routes and handlers.

mod accomplishments;
mod announcements;
mod auth;
mod builds;
mod celebrations;
mod dashboard;
mod email;
mod inventory;
mod jira;
mod leaves;
mod links;
mod meetings;
mod servers;
mod skills;
mod tasks;
mod users;

pub use accomplishments::*;
pub use announcements::*;
pub use auth::*;
pub use builds::*;
pub use celebrations::*;
pub use dashboard::*;
pub use email::*;
pub use inventory::*;
pub use jira::*;
pub use leaves::*;
pub use links::*;
pub use meetings::*;
pub use servers::*;
pub use skills::*;
pub use tasks::*;
pub use users::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}
