//! 客户端会话
//!
//! 登录、注册或读取个人资料后填充；登出或收到任意 401 时清空。
//! 会话总是显式传入 [`RestinClient`](crate::RestinClient) 的方法，不存在全局状态。

use shared::models::{LoginResponse, Role, User};

#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// 登录 / 注册成功
    pub fn establish(&mut self, login: LoginResponse) {
        self.token = Some(login.token);
        self.user = Some(login.user);
    }

    /// 刷新用户资料 (令牌不变)
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        if self.token.take().is_some() {
            tracing::debug!("Session cleared");
        }
        self.user = None;
    }

    /// 401 时清空会话，其余结果原样返回
    pub(crate) fn observe<T>(&mut self, result: crate::ClientResult<T>) -> crate::ClientResult<T> {
        if let Err(err) = &result
            && err.is_unauthorized()
        {
            self.clear();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    fn login() -> LoginResponse {
        LoginResponse {
            token: "t".into(),
            user: User {
                id: "user:1".into(),
                name: "Sam".into(),
                email: "sam@restin.test".into(),
                role: Role::Staff,
                created_at: 0,
            },
        }
    }

    #[test]
    fn test_establish_and_clear() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());

        session.establish(login());
        assert_eq!(session.token(), Some("t"));
        assert_eq!(session.role(), Some(Role::Staff));

        session.clear();
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_only_unauthorized_clears() {
        let mut session = Session::new();
        session.establish(login());

        let forbidden: crate::ClientResult<()> = Err(ClientError::Forbidden("no".into()));
        assert!(session.observe(forbidden).is_err());
        assert!(session.is_authenticated());

        let expired: crate::ClientResult<()> = Err(ClientError::Unauthorized("expired".into()));
        assert!(session.observe(expired).is_err());
        assert!(!session.is_authenticated());
    }
}
