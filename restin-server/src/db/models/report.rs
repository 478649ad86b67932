//! Report Model

use serde::{Deserialize, Serialize};
use shared::models::{ReportCategory, ReportPriority, ReportStatus};
use surrealdb::RecordId;

use super::{RoomId, UserId};

/// Report ID type
pub type ReportId = RecordId;

/// Report record
///
/// Projection fields (`staff_name` ...) come from the linked user / room
/// records at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReportId>,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub priority: ReportPriority,
    pub status: ReportStatus,
    pub staff_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<RoomId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,

    #[serde(default, skip_serializing)]
    pub staff_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub staff_email: Option<String>,
    #[serde(default, skip_serializing)]
    pub room_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub room_kind: Option<String>,
    #[serde(default, skip_serializing)]
    pub resolver_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub resolver_email: Option<String>,
}

/// Partial update (`MERGE`); `updated_at` is always set
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ReportCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<ReportPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<RoomId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<i64>,
    pub updated_at: i64,
}
