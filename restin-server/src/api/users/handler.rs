//! User API Handlers (admin)

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::MessageResponse;
use shared::models::{User, UserCreate, UserUpdate};
use shared::util::now_millis;

use crate::api::convert::convert_all;
use crate::api::extract::ValidatedJson;
use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::models as db;
use crate::db::repository::{UserRepository, parse_record_id, user as users};
use crate::utils::{AppError, AppResult};

fn hash(raw: &str) -> AppResult<String> {
    password::hash_password(raw)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// GET /api/users
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let records = UserRepository::new(state.get_db()).find_all().await?;
    Ok(Json(convert_all(records)))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_record_id(users::TABLE, &id)?;
    let record = UserRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(record.into()))
}

/// POST /api/users
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    let record = db::User {
        id: None,
        name: payload.name,
        email: payload.email,
        password: hash(&payload.password)?,
        role: payload.role,
        created_at: now_millis(),
    };

    let created = UserRepository::new(state.get_db()).create(record).await?;
    let user = User::from(created);
    tracing::info!(user_id = %user.id, role = %user.role, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/{id} - 密码若提供则重新哈希
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserUpdate>,
) -> AppResult<Json<User>> {
    let id = parse_record_id(users::TABLE, &id)?;
    let password = payload.password.as_deref().map(hash).transpose()?;

    let patch = db::UserPatch {
        name: payload.name,
        email: payload.email,
        password,
        role: payload.role,
    };
    let updated = UserRepository::new(state.get_db())
        .update(&id, patch)
        .await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/users/{id} - 不能删除自己
pub async fn delete(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_record_id(users::TABLE, &id)?;
    if id.to_string() == current.id {
        return Err(AppError::business_rule("You cannot delete your own account"));
    }

    let deleted = UserRepository::new(state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found("User not found"));
    }
    tracing::info!(user_id = %id, by = %current.id, "User deleted");
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
