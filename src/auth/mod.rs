//! Session-based authentication module.
//!
//! Login exchanges credentials for an opaque session token held in memory;
//! password digests are compared in constant time to mitigate timing attacks.

use std::collections::HashMap;

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

use crate::errors::{AppError, ErrorResponse};
use crate::models::User;

/// Header name for the session token.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// An authenticated session, injected into request extensions by the
/// auth middleware.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: String,
    pub name: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Require the admin role, for the user-management endpoints.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Administrator role required".to_string(),
            ))
        }
    }
}

/// In-memory session map. Sessions die with the process, matching the
/// original deployment's single-instance lifetime.
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            ttl: Duration::hours(ttl_hours),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Mint a session for an authenticated user.
    pub async fn create(&self, user: &User) -> Session {
        let session = Session {
            token: uuid::Uuid::new_v4().to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            name: user.name.clone(),
            expires_at: Utc::now() + self.ttl,
        };
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        session
    }

    /// Resolve a token to its session. Expired sessions are evicted.
    pub async fn resolve(&self, token: &str) -> Option<Session> {
        let expired = {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if session.expires_at > Utc::now() => {
                    return Some(session.clone())
                }
                Some(_) => true,
                None => false,
            }
        };
        if expired {
            self.sessions.write().await.remove(token);
        }
        None
    }

    /// Drop a session, logging the holder out.
    pub async fn remove(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}

/// Session authentication layer. Resolves the token from the
/// `x-session-token` header or an `Authorization: Bearer` header and
/// injects the session into the request.
pub async fn session_auth_layer(
    sessions: std::sync::Arc<SessionStore>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .or_else(|| {
            request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
                .map(|s| s.to_string())
        });

    let Some(token) = token else {
        return unauthorized_response("Missing session token");
    };

    match sessions.resolve(&token).await {
        Some(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        None => unauthorized_response("Invalid or expired session token"),
    }
}

/// Hash a password as SHA-256 hex, the digest format of the user store.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    format!("{:x}", digest)
}

/// Check a password against a stored digest in constant time.
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    let computed = hash_password(password);
    computed.as_bytes().ct_eq(stored_hash.as_bytes()).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse::new(&AppError::Unauthorized(message.to_string()));
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> User {
        User {
            id: 1,
            username: "casey".to_string(),
            password: hash_password("hunter2"),
            role: role.to_string(),
            name: "Casey".to_string(),
        }
    }

    #[test]
    fn test_hash_password_is_sha256_hex() {
        // Known SHA-256 of the empty string.
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_verify_password() {
        let stored = hash_password("hunter2");
        assert!(verify_password(&stored, "hunter2"));
        assert!(!verify_password(&stored, "hunter3"));
        assert!(!verify_password(&stored, ""));
    }

    #[tokio::test]
    async fn test_session_roundtrip() {
        let store = SessionStore::new(24);
        let session = store.create(&user("member")).await;

        let resolved = store.resolve(&session.token).await.unwrap();
        assert_eq!(resolved.username, "casey");
        assert!(!resolved.is_admin());

        store.remove(&session.token).await;
        assert!(store.resolve(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_evicted() {
        let store = SessionStore::new(-1);
        let session = store.create(&user("member")).await;
        assert!(store.resolve(&session.token).await.is_none());
    }

    #[test]
    fn test_require_admin() {
        let session = Session {
            token: "t".to_string(),
            username: "casey".to_string(),
            role: "admin".to_string(),
            name: "Casey".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        assert!(session.require_admin().is_ok());

        let session = Session {
            role: "member".to_string(),
            ..session
        };
        assert!(session.require_admin().is_err());
    }
}
