//! Authentication Handlers
//!
//! Handles login, self-registration and profile lookup

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{LoginRequest, LoginResponse, RegisterRequest, Role, User};
use shared::util::now_millis;

use crate::api::extract::ValidatedJson;
use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::models as db;
use crate::db::repository::{UserRepository, parse_record_id, user as users};
use crate::utils::{AppError, AppResult};

/// 签发令牌并组装响应
fn issue_token(state: &ServerState, user: User) -> AppResult<LoginResponse> {
    let token = state
        .get_jwt_service()
        .generate_token(&user)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;
    Ok(LoginResponse { token, user })
}

/// POST /api/auth/login
///
/// 未知邮箱与错误密码返回同一条 401；判定前固定延迟
pub async fn login(
    State(state): State<ServerState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.get_db());
    let found = repo.find_by_email(&req.email).await?;

    // Fixed delay before the result is decided
    tokio::time::sleep(Duration::from_millis(state.config.login_delay_ms)).await;

    let record = match found {
        Some(u) if password::verify_password(&req.password, &u.password) => u,
        Some(_) => {
            tracing::warn!(email = %req.email, "Login failed - invalid credentials");
            return Err(AppError::InvalidCredentials);
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::InvalidCredentials);
        }
    };

    let user = User::from(record);
    tracing::info!(user_id = %user.id, role = %user.role, "User logged in successfully");

    Ok(Json(issue_token(&state, user)?))
}

/// POST /api/auth/register - 自助注册，始终为 customer
pub async fn register(
    State(state): State<ServerState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    let hash = password::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

    let repo = UserRepository::new(state.get_db());
    let record = repo
        .create(db::User {
            id: None,
            name: req.name,
            email: req.email,
            password: hash,
            role: Role::Customer,
            created_at: now_millis(),
        })
        .await?;

    let user = User::from(record);
    tracing::info!(user_id = %user.id, "Customer registered");

    Ok((StatusCode::CREATED, Json(issue_token(&state, user)?)))
}

/// GET /api/auth/profile - 当前用户 (从数据库重新读取)
pub async fn profile(State(state): State<ServerState>, current: CurrentUser) -> AppResult<Json<User>> {
    let id = parse_record_id(users::TABLE, &current.id)?;
    let repo = UserRepository::new(state.get_db());
    let record = repo.find_by_id(&id).await?.ok_or(AppError::Unauthorized)?;
    Ok(Json(User::from(record)))
}
