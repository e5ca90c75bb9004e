//! Issue-tracker endpoints.

use axum::extract::State;
use serde::Serialize;

use super::{success, ApiResult};
use crate::jira::JiraIssue;
use crate::AppState;

/// How many issues the dashboard widget shows.
const DASHBOARD_ISSUE_LIMIT: usize = 5;

/// Result of a full issue sync.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraSyncResponse {
    pub issues: Vec<JiraIssue>,
    pub count: usize,
}

/// GET /api/jira/issues - Top open issues for the dashboard widget.
pub async fn list_jira_issues(State(state): State<AppState>) -> ApiResult<Vec<JiraIssue>> {
    let mut issues = state.jira.fetch_issues(None).await;
    issues.truncate(DASHBOARD_ISSUE_LIMIT);
    success(issues)
}

/// GET /api/jira/sync - Fetch all open issues from the tracker.
pub async fn sync_jira(State(state): State<AppState>) -> ApiResult<JiraSyncResponse> {
    let issues = state.jira.fetch_issues(None).await;
    let count = issues.len();
    success(JiraSyncResponse { issues, count })
}
