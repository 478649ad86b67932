//! 认证中间件
//!
//! 为 JWT 认证和角色授权提供 Axum 中间件

use std::future::Future;
use std::pin::Pin;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::models::Role;

use crate::AppError;
use crate::auth::{Claims, CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::db::repository::{UserRepository, parse_record_id, user};
use crate::security_log;

/// 无需认证的 API 路径
const PUBLIC_API_ROUTES: &[&str] = &["/api/health", "/api/auth/login", "/api/auth/register"];

/// 认证中间件 - 要求用户登录
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT，再按令牌主体
/// 读取账号：角色以存储为准，账号已删除时拒绝。
/// 验证成功后将 [`CurrentUser`] 注入请求扩展。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径
/// - `/api/health`、`/api/auth/login`、`/api/auth/register`
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 Unauthorized |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 InvalidToken |
/// | 账号不存在 | 401 InvalidToken |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // 允许 CORS 预检的 OPTIONS 请求
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过认证 (让它们正常返回 404)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if PUBLIC_API_ROUTES.contains(&path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or(AppError::InvalidToken)?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::Unauthorized);
        }
    };

    match state.get_jwt_service().validate_token(token) {
        Ok(claims) => {
            let user = load_account(&state, claims).await?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}

/// 令牌对应的当前账号
async fn load_account(state: &ServerState, claims: Claims) -> Result<CurrentUser, AppError> {
    let id = parse_record_id(user::TABLE, &claims.sub).map_err(|_| AppError::InvalidToken)?;
    let Some(stored) = UserRepository::new(state.get_db()).find_by_id(&id).await? else {
        security_log!("WARN", "account_missing", user_id = claims.sub.clone());
        return Err(AppError::InvalidToken);
    };

    if stored.role != claims.role {
        tracing::debug!(
            user_id = %claims.sub,
            token_role = %claims.role,
            role = %stored.role,
            "Role changed since token was issued"
        );
    }
    Ok(CurrentUser {
        id: claims.sub,
        name: stored.name,
        email: stored.email,
        role: stored.role,
    })
}

/// 允许访问的角色集合
///
/// 可由单个 [`Role`]、角色数组或切片构造：
///
/// ```ignore
/// require_role(Role::Admin);
/// require_role([Role::Admin, Role::Staff]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AllowedRoles(&'static [Role]);

impl AllowedRoles {
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }
}

impl From<Role> for AllowedRoles {
    fn from(role: Role) -> Self {
        let roles: &'static [Role] = match role {
            Role::Admin => &[Role::Admin],
            Role::Staff => &[Role::Staff],
            Role::Customer => &[Role::Customer],
        };
        Self(roles)
    }
}

impl From<&'static [Role]> for AllowedRoles {
    fn from(roles: &'static [Role]) -> Self {
        Self(roles)
    }
}

impl<const N: usize> From<&'static [Role; N]> for AllowedRoles {
    fn from(roles: &'static [Role; N]) -> Self {
        Self(roles.as_slice())
    }
}

/// 管理员或员工
pub const OPERATORS: &[Role] = &[Role::Admin, Role::Staff];

/// 角色检查中间件 - 要求调用者角色在允许列表中
///
/// # 用法
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/", post(handler::create))
///     .layer(middleware::from_fn(require_role(OPERATORS)));
/// ```
///
/// # 错误
///
/// 未认证返回 401，角色不符返回 403
pub fn require_role(
    allowed: impl Into<AllowedRoles>,
) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    let allowed = allowed.into();
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or(AppError::Unauthorized)?;

            if !allowed.contains(user.role) {
                security_log!(
                    "WARN",
                    "role_denied",
                    user_id = user.id.clone(),
                    user_role = user.role.as_str(),
                    uri = format!("{:?}", req.uri())
                );
                return Err(AppError::forbidden());
            }

            Ok(next.run(req).await)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_roles_from_single_and_set() {
        let admin_only = AllowedRoles::from(Role::Admin);
        assert!(admin_only.contains(Role::Admin));
        assert!(!admin_only.contains(Role::Staff));

        let operators = AllowedRoles::from(OPERATORS);
        assert!(operators.contains(Role::Staff));
        assert!(!operators.contains(Role::Customer));

        let everyone = AllowedRoles::from(&Role::ALL);
        assert!(everyone.contains(Role::Customer));
    }
}
