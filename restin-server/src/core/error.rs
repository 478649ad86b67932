use thiserror::Error;

use crate::auth::JwtError;
use crate::db::repository::RepoError;

/// 启动期错误 (配置、数据库、监听)
///
/// 请求期错误见 [`crate::utils::AppError`]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(#[from] JwtError),

    #[error("数据库初始化失败: {0}")]
    Database(#[from] RepoError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
