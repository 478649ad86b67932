//! User Model

use serde::{Deserialize, Serialize};
use shared::models::Role;
use surrealdb::RecordId;

/// User ID type
pub type UserId = RecordId;

/// User record as stored in SurrealDB
///
/// `password` holds the argon2 hash and never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub name: String,
    /// Stored lower-case
    pub email: String,
    pub password: String,
    pub role: Role,
    pub created_at: i64,
}

/// Partial update (`MERGE`)
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}
