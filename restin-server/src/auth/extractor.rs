//! CurrentUser Extractor
//!
//! 处理函数直接声明 `user: CurrentUser` 即可获取调用者。身份由
//! [`require_auth`](crate::auth::require_auth) 写入请求扩展，这里只负责取出。

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::security_log;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<CurrentUser>() {
            Some(user) => Ok(user.clone()),
            // 公开路由上的处理函数不应要求身份
            None => {
                security_log!(
                    "WARN",
                    "identity_missing",
                    method = parts.method.to_string(),
                    uri = parts.uri.to_string()
                );
                Err(AppError::Unauthorized)
            }
        }
    }
}
