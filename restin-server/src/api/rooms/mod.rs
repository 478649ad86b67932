//! Room API 模块
//!
//! | 路径 | 方法 | 角色 |
//! |------|------|------|
//! | /api/rooms | GET | 任意 |
//! | /api/rooms/restaurant/{restaurant_id} | GET | 任意 |
//! | /api/rooms/{id} | GET | 任意 |
//! | /api/rooms | POST | admin, staff |
//! | /api/rooms/{id} | PUT, PATCH | admin, staff |
//! | /api/rooms/{id}/clean | PATCH | admin, staff |
//! | /api/rooms/{id}/maintenance | PATCH | admin, staff |
//! | /api/rooms/{id} | DELETE | admin |

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post, put},
};
use shared::models::Role;

use crate::auth::{OPERATORS, require_role};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/rooms", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/restaurant/{restaurant_id}", get(handler::list_by_restaurant))
        .route("/{id}", get(handler::get_by_id));

    let operate_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", put(handler::update).patch(handler::update))
        .route("/{id}/clean", patch(handler::mark_cleaned))
        .route("/{id}/maintenance", patch(handler::mark_maintenance))
        .layer(middleware::from_fn(require_role(OPERATORS)));

    let admin_routes = Router::new()
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_role(Role::Admin)));

    read_routes.merge(operate_routes).merge(admin_routes)
}
