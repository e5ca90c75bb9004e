//! User account model.
//!
//! Passwords are stored as SHA-256 hex digests and never serialized back
//! out over the API; handlers return [`UserPublic`] instead.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A dashboard user account as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    /// SHA-256 hex digest of the password.
    pub password: String,
    pub role: String,
    pub name: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

impl Record for User {
    const FILE: &'static str = "users.json";
    const NAME: &'static str = "User";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// The user shape returned over the API (no password digest).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: u64,
    pub username: String,
    pub role: String,
    pub name: String,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            name: user.name,
        }
    }
}

/// Request body for creating a user account. The password arrives in the
/// clear and is hashed before it reaches the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
    pub name: String,
}

fn default_role() -> String {
    "member".to_string()
}

impl CreateUserRequest {
    pub fn into_record(self, password_hash: String) -> User {
        User {
            id: 0,
            username: self.username,
            password: password_hash,
            role: self.role,
            name: self.name,
        }
    }
}

/// Request body for updating a user account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    /// New password in the clear; re-hashed on write.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl UpdateUserRequest {
    /// Merge the submitted fields; `password_hash` is the already-hashed
    /// replacement when a new password was submitted.
    pub fn apply(self, user: &mut User, password_hash: Option<String>) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(hash) = password_hash {
            user.password = hash;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
    }
}

/// Request body for logging in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
