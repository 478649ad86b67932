//! Report Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Report, ReportId, ReportPatch, UserId};

pub const TABLE: &str = "report";

/// 带作者、房间、处理人摘要的查询
const SELECT_REPORT: &str = "SELECT *, \
     staff_id.name AS staff_name, staff_id.email AS staff_email, \
     room_id.name AS room_name, room_id.room_type AS room_kind, \
     resolved_by.name AS resolver_name, resolved_by.email AS resolver_email FROM";

#[derive(Clone)]
pub struct ReportRepository {
    base: BaseRepository,
}

impl ReportRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find reports newest first, optionally only one author's
    pub async fn find_all(&self, staff: Option<&UserId>) -> RepoResult<Vec<Report>> {
        let reports: Vec<Report> = match staff {
            Some(uid) => self
                .base
                .db()
                .query(format!(
                    "{SELECT_REPORT} report WHERE staff_id = $staff ORDER BY created_at DESC"
                ))
                .bind(("staff", uid.clone()))
                .await?
                .take(0)?,
            None => self
                .base
                .db()
                .query(format!("{SELECT_REPORT} report ORDER BY created_at DESC"))
                .await?
                .take(0)?,
        };
        Ok(reports)
    }

    pub async fn find_by_id(&self, id: &ReportId) -> RepoResult<Option<Report>> {
        let mut result = self
            .base
            .db()
            .query(format!("{SELECT_REPORT} $report"))
            .bind(("report", id.clone()))
            .await?;
        let reports: Vec<Report> = result.take(0)?;
        Ok(reports.into_iter().next())
    }

    pub async fn create(&self, mut data: Report) -> RepoResult<Report> {
        data.id = None;
        let created: Option<Report> = self.base.db().create(TABLE).content(data).await?;
        let id = created
            .and_then(|r| r.id)
            .ok_or_else(|| RepoError::Database("Failed to create report".to_string()))?;
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create report".to_string()))
    }

    pub async fn update(&self, id: &ReportId, patch: ReportPatch) -> RepoResult<Report> {
        let _: Option<Report> = self.base.db().update(id.clone()).merge(patch).await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Report not found".to_string()))
    }

    pub async fn delete(&self, id: &ReportId) -> RepoResult<bool> {
        let deleted: Option<Report> = self.base.db().delete(id.clone()).await?;
        Ok(deleted.is_some())
    }
}
