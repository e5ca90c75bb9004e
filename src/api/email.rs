//! Mail endpoints: connectivity test and manual digest trigger.

use axum::extract::State;
use serde::Serialize;

use super::{success, ApiResult};
use crate::scheduler;
use crate::AppState;

/// Outcome of a mail send attempt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSendResponse {
    pub sent: bool,
}

/// GET /api/email/test - Send a test mail to verify SMTP configuration.
pub async fn test_email(State(state): State<AppState>) -> ApiResult<EmailSendResponse> {
    let body = "<h2>This is a test email</h2>\
                <p>If you received this, email is configured correctly.</p>"
        .to_string();
    let sent = state
        .mailer
        .send("Test Email from TeamOps Dashboard", body, None)
        .await;
    success(EmailSendResponse { sent })
}

/// POST /api/email/summary - Send today's digest immediately.
pub async fn send_summary(State(state): State<AppState>) -> ApiResult<EmailSendResponse> {
    let sent = scheduler::send_daily_digest(&state).await;
    success(EmailSendResponse { sent })
}
