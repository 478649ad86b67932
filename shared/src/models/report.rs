//! Report Model (staff incident / task reports)

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::{RoomSummary, UserSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Maintenance,
    GuestService,
    Cleaning,
    Security,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Report status (报告状态)
///
/// | From | Allowed next |
/// |------|--------------|
/// | pending | in_progress, resolved, closed |
/// | in_progress | pending, resolved, closed |
/// | resolved | in_progress, closed |
/// | closed | (terminal) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
    Closed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Closed => "closed",
        }
    }

    pub fn can_transition_to(&self, next: ReportStatus) -> bool {
        use ReportStatus::*;
        match (*self, next) {
            (from, to) if from == to => true,
            (Pending, InProgress) | (Pending, Resolved) | (Pending, Closed) => true,
            (InProgress, Pending) | (InProgress, Resolved) | (InProgress, Closed) => true,
            (Resolved, InProgress) | (Resolved, Closed) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report as served by the API, references expanded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub priority: ReportPriority,
    pub status: ReportStatus,
    pub staff_id: UserSummary,
    #[serde(default)]
    pub room_id: Option<RoomSummary>,
    #[serde(default)]
    pub resolved_by: Option<UserSummary>,
    #[serde(default)]
    pub resolved_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create report payload (author is always the caller)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReportCreate {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub category: ReportCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<ReportPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
}

/// Update report payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ReportUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ReportCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<ReportPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// Explicit resolver; only honoured on the transition into `resolved`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_transitions() {
        use ReportStatus::*;
        assert!(Pending.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Resolved));
        assert!(Resolved.can_transition_to(Resolved));
        assert!(Resolved.can_transition_to(InProgress));
        assert!(!Closed.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(Pending));
    }

    #[test]
    fn test_report_enums_use_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReportCategory::GuestService).unwrap(),
            "\"guest_service\""
        );
        assert_eq!(
            serde_json::from_str::<ReportStatus>("\"in_progress\"").unwrap(),
            ReportStatus::InProgress
        );
        assert_eq!(ReportPriority::default(), ReportPriority::Medium);
    }
}
