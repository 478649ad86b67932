use std::path::PathBuf;

use crate::auth::{JwtConfig, JwtError};

/// `DATABASE_PATH` 取此值时使用内存数据库
pub const MEMORY_DATABASE: &str = "memory";

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | <WORK_DIR>/database | 数据库目录，`memory` 表示内存库 |
/// | ENVIRONMENT | development | 运行环境 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | LOGIN_DELAY_MS | 500 | 登录判定前的固定延迟(毫秒) |
/// | ADMIN_EMAIL / ADMIN_PASSWORD | - | 用户表为空时创建的管理员 |
/// | JWT_SECRET 等 | - | 见 [`JwtConfig`] |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/restin HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库目录或 `memory`
    pub database_path: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 登录固定延迟 (毫秒)
    pub login_delay_ms: u64,
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// JWT 密钥缺失或过短时返回错误 (开发构建下自动生成临时密钥)
    pub fn from_env() -> Result<Self, JwtError> {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("database")
                .to_string_lossy()
                .into_owned()
        });

        Ok(Self {
            work_dir,
            http_port: env_parse("HTTP_PORT", 3000),
            database_path,
            jwt: JwtConfig::from_env()?,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30_000),
            login_delay_ms: env_parse("LOGIN_DELAY_MS", 500),
            admin_email: std::env::var("ADMIN_EMAIL").ok().filter(|s| !s.is_empty()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty()),
        })
    }

    /// 内存数据库配置，不读取环境变量
    ///
    /// 常用于测试场景
    pub fn in_memory(jwt: JwtConfig) -> Self {
        Self {
            work_dir: std::env::temp_dir().to_string_lossy().into_owned(),
            http_port: 0,
            database_path: MEMORY_DATABASE.to_string(),
            jwt,
            environment: "test".to_string(),
            request_timeout_ms: 30_000,
            login_delay_ms: 0,
            admin_email: None,
            admin_password: None,
        }
    }

    pub fn is_memory_database(&self) -> bool {
        self.database_path == MEMORY_DATABASE
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_config() {
        let config = Config::in_memory(JwtConfig::with_secret("x".repeat(32)));
        assert!(config.is_memory_database());
        assert_eq!(config.login_delay_ms, 0);
        assert!(!config.is_production());
    }
}
