//! User Repository

use super::{BaseRepository, CountRow, RepoError, RepoResult};
use crate::db::models::{User, UserId, UserPatch};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all users, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM user ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(users)
    }

    pub async fn find_by_id(&self, id: &UserId) -> RepoResult<Option<User>> {
        let user: Option<User> = self.base.db().select(id.clone()).await?;
        Ok(user)
    }

    /// Find user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", normalize_email(email)))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    pub async fn count(&self) -> RepoResult<usize> {
        let rows: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS total FROM user GROUP ALL")
            .await?
            .take(0)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0))
    }

    /// Create a new user; `data.password` must already be hashed
    pub async fn create(&self, mut data: User) -> RepoResult<User> {
        data.id = None;
        data.email = normalize_email(&data.email);

        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(
                "User with this email already exists".to_string(),
            ));
        }

        let created: Option<User> = self.base.db().create(TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Update a user; `patch.password` must already be hashed
    pub async fn update(&self, id: &UserId, mut patch: UserPatch) -> RepoResult<User> {
        if let Some(email) = patch.email.as_mut() {
            *email = normalize_email(email);
            if let Some(other) = self.find_by_email(email).await?
                && other.id.as_ref() != Some(id)
            {
                return Err(RepoError::Duplicate(
                    "User with this email already exists".to_string(),
                ));
            }
        }

        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound("User not found".to_string()));
        }

        let updated: Option<User> = self.base.db().update(id.clone()).merge(patch).await?;
        updated.ok_or_else(|| RepoError::NotFound("User not found".to_string()))
    }

    /// Hard delete a user
    pub async fn delete(&self, id: &UserId) -> RepoResult<bool> {
        let deleted: Option<User> = self.base.db().delete(id.clone()).await?;
        Ok(deleted.is_some())
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
