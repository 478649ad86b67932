//! 统一错误处理
//!
//! 所有处理器返回 [`AppResult<T>`]，错误统一序列化为
//!
//! ```json
//! { "code": "E0003", "message": "Room not found" }
//! ```
//!
//! # 错误码规范
//!
//! | 前缀 | 分类 | 示例 |
//! |------|------|------|
//! | E0xxx | 请求/业务错误 | E0003 资源不存在 |
//! | E2xxx | 权限错误 | E2001 无权限 |
//! | E3xxx | 认证错误 | E3002 无效令牌 |
//! | E9xxx | 系统错误 | E9002 数据库错误 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::error::{ErrorBody, codes};
use tracing::error;

use crate::db::repository::RepoError;

/// 403 的统一提示
pub const ACCESS_DENIED: &str = "Access denied. Insufficient permissions.";

/// 应用错误枚举
///
/// | 分类 | 说明 |
/// |------|------|
/// | 认证错误 | 未登录、令牌过期、无效令牌 |
/// | 业务逻辑错误 | 资源不存在、验证失败、规则冲突 |
/// | 系统错误 | 数据库错误、内部错误 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (4xx) ==========
    /// 未登录 (401)
    #[error("Authentication required")]
    Unauthorized,

    /// 令牌过期 (401)
    #[error("Token expired")]
    TokenExpired,

    /// 无效令牌 (401)
    #[error("Invalid token")]
    InvalidToken,

    /// 登录失败 (401)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 无权限 (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    // ========== 业务逻辑错误 (4xx) ==========
    /// 资源不存在 (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 资源冲突 (409)
    #[error("Resource conflict: {0}")]
    Conflict(String),

    /// 验证失败 (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 业务规则违反 (400)
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    // ========== 系统错误 (5xx) ==========
    /// 数据库错误 (500)
    #[error("Database error: {0}")]
    Database(String),

    /// 内部错误 (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn forbidden() -> Self {
        Self::Forbidden(ACCESS_DENIED.to_string())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized
            | AppError::TokenExpired
            | AppError::InvalidToken
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::BusinessRule(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::Unauthorized => (codes::UNAUTHORIZED, "No token, authorization denied"),
            AppError::TokenExpired => (codes::TOKEN_EXPIRED, "Token expired"),
            AppError::InvalidToken => (codes::INVALID_TOKEN, "Token is not valid"),
            AppError::InvalidCredentials => (codes::UNAUTHORIZED, "Invalid email or password"),
            AppError::Forbidden(msg) => (codes::FORBIDDEN, msg.as_str()),
            AppError::NotFound(msg) => (codes::NOT_FOUND, msg.as_str()),
            AppError::Conflict(msg) => (codes::CONFLICT, msg.as_str()),
            AppError::Validation(msg) | AppError::BusinessRule(msg) => {
                (codes::VALIDATION, msg.as_str())
            }
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (codes::DATABASE, "Server error")
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (codes::INTERNAL, "Server error")
            }
        };

        (status, Json(ErrorBody::new(code, message))).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(describe_validation_errors(&errors))
    }
}

/// 将字段校验错误拼成一句提示
///
/// 字段按名称排序，保证消息稳定
fn describe_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid value for {field}"),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::forbidden().status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::business_rule("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(RepoError::NotFound("Room not found".into())).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let payload = shared::models::UserCreate {
            name: String::new(),
            email: "nope".into(),
            password: "123".into(),
            role: shared::models::Role::Staff,
        };
        let err = AppError::from(payload.validate().unwrap_err());
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("Invalid email address"));
                assert!(msg.contains("Name is required"));
                assert!(msg.contains("at least 6"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
