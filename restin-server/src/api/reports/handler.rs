//! Report API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::MessageResponse;
use shared::models::{self as api, ReportCreate, ReportStatus, ReportUpdate, Role};
use shared::util::now_millis;

use crate::api::convert::convert_all;
use crate::api::extract::ValidatedJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models as db;
use crate::db::repository::{
    ReportRepository, RoomRepository, UserRepository, parse_record_id, report, room, user,
};
use crate::utils::{AppError, AppResult};

fn not_found() -> AppError {
    AppError::not_found("Report not found")
}

/// 关联房间必须存在
async fn existing_room(state: &ServerState, raw: &str) -> AppResult<db::RoomId> {
    let id = parse_record_id(room::TABLE, raw)?;
    RoomRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Room not found"))?;
    Ok(id)
}

/// 指定的处理人必须存在
async fn existing_user(state: &ServerState, raw: &str) -> AppResult<db::UserId> {
    let id = parse_record_id(user::TABLE, raw)?;
    UserRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(id)
}

/// POST /api/reports - 作者固定为调用者
pub async fn create(
    State(state): State<ServerState>,
    current: CurrentUser,
    ValidatedJson(payload): ValidatedJson<ReportCreate>,
) -> AppResult<(StatusCode, Json<api::Report>)> {
    let staff_id = parse_record_id(user::TABLE, &current.id)?;
    let room_id = match payload.room_id.as_deref().filter(|r| !r.trim().is_empty()) {
        Some(raw) => Some(existing_room(&state, raw).await?),
        None => None,
    };
    let now = now_millis();

    let record = db::Report {
        id: None,
        title: payload.title,
        description: payload.description,
        category: payload.category,
        priority: payload.priority.unwrap_or_default(),
        status: ReportStatus::Pending,
        staff_id,
        room_id,
        resolved_by: None,
        resolved_at: None,
        created_at: now,
        updated_at: now,
        staff_name: None,
        staff_email: None,
        room_name: None,
        room_kind: None,
        resolver_name: None,
        resolver_email: None,
    };

    let created = ReportRepository::new(state.get_db()).create(record).await?;
    tracing::info!(report = ?created.id, staff = %current.id, "Report created");
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/reports - 员工只看自己的，管理员看全部
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<api::Report>>> {
    let staff = if current.role == Role::Admin {
        None
    } else {
        Some(parse_record_id(user::TABLE, &current.id)?)
    };
    let reports = ReportRepository::new(state.get_db())
        .find_all(staff.as_ref())
        .await?;
    Ok(Json(convert_all(reports)))
}

/// PATCH /api/reports/{id}
///
/// 状态进入 `resolved` 时记录处理人 (请求指定或调用者) 与处理时间；
/// 已有处理人时不再覆盖
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ReportUpdate>,
) -> AppResult<Json<api::Report>> {
    let id = parse_record_id(report::TABLE, &id)?;
    let repo = ReportRepository::new(state.get_db());
    let existing = repo.find_by_id(&id).await?.ok_or_else(not_found)?;

    if let Some(next) = payload.status
        && !existing.status.can_transition_to(next)
    {
        return Err(AppError::business_rule(format!(
            "Cannot change report status from {} to {}",
            existing.status, next
        )));
    }

    let room_id = match payload.room_id.as_deref().filter(|r| !r.trim().is_empty()) {
        Some(raw) => Some(existing_room(&state, raw).await?),
        None => None,
    };

    let mut patch = db::ReportPatch {
        title: payload.title,
        description: payload.description,
        category: payload.category,
        priority: payload.priority,
        status: payload.status,
        room_id,
        resolved_by: None,
        resolved_at: None,
        updated_at: now_millis(),
    };

    let entering_resolved = payload.status == Some(ReportStatus::Resolved)
        && existing.status != ReportStatus::Resolved;
    if entering_resolved && existing.resolved_by.is_none() {
        let resolver = match payload.resolved_by.as_deref() {
            Some(raw) => existing_user(&state, raw).await?,
            None => parse_record_id(user::TABLE, &current.id)?,
        };
        patch.resolved_by = Some(resolver);
        patch.resolved_at = Some(patch.updated_at);
    }

    let updated = repo.update(&id, patch).await?;
    if entering_resolved {
        tracing::info!(report = %id, by = %current.id, "Report resolved");
    }
    Ok(Json(updated.into()))
}

/// DELETE /api/reports/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_record_id(report::TABLE, &id)?;
    let deleted = ReportRepository::new(state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(not_found());
    }
    tracing::info!(report = %id, "Report deleted");
    Ok(Json(MessageResponse::new("Report deleted successfully")))
}
