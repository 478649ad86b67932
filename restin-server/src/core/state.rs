use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::Mutex;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一份。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | booking_lock | Arc<Mutex<()>> | 预订时段检查与写入的串行锁 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 预订创建锁: 时段检查和插入之间不允许其他预订写入
    pub booking_lock: Arc<Mutex<()>>,
}

impl ServerState {
    /// 使用已打开的数据库构造状态
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
            booking_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录
    /// 2. 数据库 (DATABASE_PATH 或内存库) 与索引
    /// 3. 管理员账号 (用户表为空且配置了 ADMIN_EMAIL / ADMIN_PASSWORD)
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let db_service = if config.is_memory_database() {
            DbService::memory().await?
        } else {
            DbService::open(&config.database_path).await?
        };

        if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
            db_service.ensure_admin(email, password).await?;
        }

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
