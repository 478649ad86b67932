//! Report API 模块 (员工问题上报)

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, patch},
};
use shared::models::Role;

use crate::auth::{OPERATORS, require_role};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    let operate_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", patch(handler::update))
        .layer(middleware::from_fn(require_role(OPERATORS)));

    let admin_routes = Router::new()
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_role(Role::Admin)));

    operate_routes.merge(admin_routes)
}
