//! Restin Server - 酒店/餐厅预订管理后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储，仓储层封装全部查询
//! - **认证** (`auth`): JWT + Argon2 认证，角色门控
//! - **HTTP API** (`api`): 餐厅、房间、预订、报告、用户、统计
//!
//! # 模块结构
//!
//! ```text
//! restin-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、角色中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装、HTTP 中间件
//! ├── utils/         # 错误、日志
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerError, ServerState};
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境: 加载 .env、初始化日志
pub fn setup_environment() -> Result<(), ServerError> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____            __  _
   / __ \___  _____/ /_(_)___
  / /_/ / _ \/ ___/ __/ / __ \
 / _, _/  __(__  ) /_/ / / / /
/_/ |_|\___/____/\__/_/_/ /_/
    "#
    );
}
