//! Database Module
//!
//! 嵌入式 SurrealDB：磁盘 (SurrealKV) 或内存引擎

pub mod models;
pub mod repository;

use shared::models::Role;
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, SurrealKv};

use crate::auth::password;
use repository::{RepoError, RepoResult, UserRepository};

pub const NAMESPACE: &str = "restin";
pub const DATABASE: &str = "main";

/// 启动时执行的索引定义 (幂等)
const SCHEMA: &str = r#"
DEFINE INDEX IF NOT EXISTS user_email ON TABLE user FIELDS email UNIQUE;
DEFINE INDEX IF NOT EXISTS room_restaurant ON TABLE room FIELDS restaurant;
DEFINE INDEX IF NOT EXISTS booking_slot ON TABLE booking FIELDS room, date, time;
DEFINE INDEX IF NOT EXISTS booking_customer ON TABLE booking FIELDS customer;
DEFINE INDEX IF NOT EXISTS report_staff ON TABLE report FIELDS staff_id;
"#;

/// Database service — owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) an on-disk database at `path`
    pub async fn open(path: &str) -> RepoResult<Self> {
        std::fs::create_dir_all(path)
            .map_err(|e| RepoError::Database(format!("Failed to create {path}: {e}")))?;
        let db = Surreal::new::<SurrealKv>(path).await?;
        tracing::info!(path = %path, "Database opened (SurrealKV)");
        Self::init(db).await
    }

    /// In-memory database, discarded on drop
    pub async fn memory() -> RepoResult<Self> {
        let db = Surreal::new::<Mem>(()).await?;
        tracing::info!("Database opened (in-memory)");
        Self::init(db).await
    }

    async fn init(db: Surreal<Db>) -> RepoResult<Self> {
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;
        db.query(SCHEMA).await?.check()?;
        Ok(Self { db })
    }

    /// Create the bootstrap admin when the user table is empty
    pub async fn ensure_admin(&self, email: &str, password: &str) -> RepoResult<()> {
        let users = UserRepository::new(self.db.clone());
        if users.count().await? > 0 {
            return Ok(());
        }

        let hash = password::hash_password(password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;
        let admin = users
            .create(models::User {
                id: None,
                name: "Administrator".to_string(),
                email: email.to_string(),
                password: hash,
                role: Role::Admin,
                created_at: now_millis(),
            })
            .await?;

        tracing::info!(email = %admin.email, "Bootstrap admin account created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_admin_only_seeds_empty_table() {
        let service = DbService::memory().await.unwrap();
        service.ensure_admin("Admin@Example.com", "secret123").await.unwrap();
        service.ensure_admin("other@example.com", "secret123").await.unwrap();

        let users = UserRepository::new(service.db.clone());
        assert_eq!(users.count().await.unwrap(), 1);
        let admin = users.find_by_email("admin@example.com").await.unwrap().unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(password::verify_password("secret123", &admin.password));
    }

    #[tokio::test]
    async fn test_open_creates_on_disk_store() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("database");
        let service = DbService::open(path.to_str().unwrap()).await.unwrap();
        assert!(path.exists());

        let users = UserRepository::new(service.db.clone());
        assert_eq!(users.count().await.unwrap(), 0);
        service.ensure_admin("root@example.com", "secret123").await.unwrap();
        assert_eq!(users.count().await.unwrap(), 1);
    }
}
