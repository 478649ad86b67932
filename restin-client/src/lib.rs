//! Restin Client - HTTP client for the Restin server
//!
//! - [`HttpClient`] - JSON over reqwest, typed errors
//! - [`Session`] - explicit identity context (token + user)
//! - [`RestinClient`] - typed methods for every endpoint
//! - [`RoleDashboard`] - per-role dashboards built from the session role

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod session;

pub use client::RestinClient;
pub use config::ClientConfig;
pub use dashboard::{
    AdminDashboard, AdminView, CustomerDashboard, CustomerView, Dashboard, DashboardView,
    RoleDashboard, StaffDashboard, StaffView,
};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::Session;

// Re-export shared types for convenience
pub use shared::models::{LoginResponse, Role, User};
