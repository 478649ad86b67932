//! Booking API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch},
};

use crate::auth::{OPERATORS, require_role};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    // 任意已登录用户；顾客的可见范围在 handler 内限制
    let customer_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).delete(handler::cancel));

    let operate_routes = Router::new()
        .route("/{id}", patch(handler::update_status))
        .layer(middleware::from_fn(require_role(OPERATORS)));

    customer_routes.merge(operate_routes)
}
