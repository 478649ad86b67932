//! Repository Module
//!
//! 每张表一个仓储，封装全部 SurrealQL 查询。

pub mod booking;
pub mod report;
pub mod restaurant;
pub mod room;
pub mod user;

// Re-exports
pub use booking::BookingRepository;
pub use report::ReportRepository;
pub use restaurant::RestaurantRepository;
pub use room::RoomRepository;
pub use user::UserRepository;

use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // 唯一索引冲突
        if msg.contains("already contains") {
            return RepoError::Duplicate(msg);
        }
        RepoError::Database(msg)
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: API 统一使用 "table:key" 格式
// =============================================================================
//
// 路径参数既可以是 "room:abc" 也可以是裸 key "abc"，统一经
// parse_record_id 转为 RecordId；反向使用 RecordId::to_string()。

/// 将 API 传入的 ID 解析为指定表的 RecordId
///
/// 表名不符或为空时返回 `Validation`
pub fn parse_record_id(table: &str, raw: &str) -> RepoResult<RecordId> {
    let raw = raw.trim();
    let key = match raw.split_once(':') {
        Some((tb, key)) if tb == table => key,
        Some(_) => return Err(RepoError::Validation(format!("Invalid {table} id: {raw}"))),
        None => raw,
    };
    let key = key.trim_start_matches('⟨').trim_end_matches('⟩');
    if key.is_empty() {
        return Err(RepoError::Validation(format!("Invalid {table} id: {raw}")));
    }
    Ok(RecordId::from_table_key(table, key.to_string()))
}

/// `SELECT count() AS total ... GROUP ALL`
#[derive(Debug, Deserialize)]
pub(crate) struct CountRow {
    pub total: usize,
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id_accepts_full_and_bare() {
        let full = parse_record_id("room", "room:abc123").unwrap();
        let bare = parse_record_id("room", "abc123").unwrap();
        assert_eq!(full, bare);
        assert_eq!(full.table(), "room");
        assert_eq!(full.to_string(), "room:abc123");
    }

    #[test]
    fn test_parse_record_id_rejects_other_table() {
        assert!(matches!(
            parse_record_id("room", "booking:abc"),
            Err(RepoError::Validation(_))
        ));
        assert!(parse_record_id("room", "").is_err());
        assert!(parse_record_id("room", "room:").is_err());
    }
}
