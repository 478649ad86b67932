//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查 (公开)
//! - [`auth`] - 登录、注册、当前用户
//! - [`restaurants`] - 餐厅管理
//! - [`rooms`] - 房间管理、清洁与维护
//! - [`bookings`] - 预订
//! - [`reports`] - 员工问题上报
//! - [`users`] - 用户管理 (管理员)
//! - [`stats`] - 仪表盘汇总

pub mod convert;
pub mod extract;

pub mod auth;
pub mod health;

// Resources
pub mod bookings;
pub mod reports;
pub mod restaurants;
pub mod rooms;
pub mod stats;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
