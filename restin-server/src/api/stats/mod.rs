//! Stats API 模块 (仪表盘汇总)

mod handler;

use axum::{Router, middleware, routing::get};
use shared::models::Role;

use crate::auth::{OPERATORS, require_role};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stats", routes())
}

fn routes() -> Router<ServerState> {
    let admin_routes = Router::new()
        .route("/overview", get(handler::overview))
        .layer(middleware::from_fn(require_role(Role::Admin)));

    let operate_routes = Router::new()
        .route("/operations", get(handler::operations))
        .layer(middleware::from_fn(require_role(OPERATORS)));

    admin_routes.merge(operate_routes)
}
