//! Room API Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::MessageResponse;
use shared::models::{
    self as api, DEFAULT_MAINTENANCE_REASON, DEFAULT_ROOM_IMAGE_URL, DEFAULT_ROOM_TYPE,
    MaintenanceRequest, RoomCreate, RoomUpdate,
};
use shared::util::now_millis;

use crate::api::convert::convert_all;
use crate::api::extract::{ValidatedJson, validate_input};
use crate::core::ServerState;
use crate::db::models as db;
use crate::db::repository::{RestaurantRepository, RoomRepository, parse_record_id, restaurant, room};
use crate::utils::{AppError, AppResult};

fn not_found() -> AppError {
    AppError::not_found("Room not found")
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub restaurant: Option<String>,
}

async fn list_for(state: &ServerState, restaurant: Option<&str>) -> AppResult<Vec<api::Room>> {
    let rid = restaurant
        .filter(|r| !r.trim().is_empty())
        .map(|r| parse_record_id(restaurant::TABLE, r))
        .transpose()?;
    let rooms = RoomRepository::new(state.get_db())
        .find_all(rid.as_ref())
        .await?;
    Ok(convert_all(rooms))
}

/// GET /api/rooms?restaurant=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<api::Room>>> {
    Ok(Json(list_for(&state, query.restaurant.as_deref()).await?))
}

/// GET /api/rooms/restaurant/{restaurant_id}
pub async fn list_by_restaurant(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<Vec<api::Room>>> {
    Ok(Json(list_for(&state, Some(&restaurant_id)).await?))
}

/// GET /api/rooms/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<api::Room>> {
    let id = parse_record_id(room::TABLE, &id)?;
    let record = RoomRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(record.into()))
}

/// 所属餐厅必须存在
async fn existing_restaurant(state: &ServerState, raw: &str) -> AppResult<db::RestaurantId> {
    let rid = parse_record_id(restaurant::TABLE, raw)?;
    RestaurantRepository::new(state.get_db())
        .find_by_id(&rid)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant not found"))?;
    Ok(rid)
}

/// POST /api/rooms
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<RoomCreate>,
) -> AppResult<(StatusCode, Json<api::Room>)> {
    let restaurant = existing_restaurant(&state, &payload.restaurant).await?;
    let now = now_millis();

    let record = db::Room {
        id: None,
        name: payload.name,
        restaurant,
        capacity: payload.capacity,
        room_type: payload
            .room_type
            .unwrap_or_else(|| DEFAULT_ROOM_TYPE.to_string()),
        amenities: payload.amenities.unwrap_or_default(),
        image_url: payload
            .image_url
            .unwrap_or_else(|| DEFAULT_ROOM_IMAGE_URL.to_string()),
        price_per_hour: payload.price_per_hour,
        is_available: payload.is_available.unwrap_or(true),
        needs_cleaning: false,
        needs_maintenance: false,
        maintenance_reason: String::new(),
        last_cleaned: now,
        created_at: now,
        restaurant_name: None,
        restaurant_location: None,
    };

    let created = RoomRepository::new(state.get_db()).create(record).await?;
    tracing::info!(room = ?created.id, "Room created");
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT / PATCH /api/rooms/{id}
///
/// `isAvailable` 可单独修改，不影响清洁与维护标记
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<RoomUpdate>,
) -> AppResult<Json<api::Room>> {
    let id = parse_record_id(room::TABLE, &id)?;
    let restaurant = match payload.restaurant.as_deref() {
        Some(raw) => Some(existing_restaurant(&state, raw).await?),
        None => None,
    };

    let patch = db::RoomPatch {
        name: payload.name,
        restaurant,
        capacity: payload.capacity,
        room_type: payload.room_type,
        amenities: payload.amenities,
        image_url: payload.image_url,
        price_per_hour: payload.price_per_hour,
        is_available: payload.is_available,
        needs_cleaning: payload.needs_cleaning,
        needs_maintenance: payload.needs_maintenance,
        maintenance_reason: payload.maintenance_reason,
        last_cleaned: None,
    };

    let updated = RoomRepository::new(state.get_db())
        .update(&id, patch)
        .await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/rooms/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_record_id(room::TABLE, &id)?;
    let deleted = RoomRepository::new(state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(not_found());
    }
    tracing::info!(room = %id, "Room deleted");
    Ok(Json(MessageResponse::new("Room deleted successfully")))
}

/// PATCH /api/rooms/{id}/clean - 标记已清洁并重新开放
pub async fn mark_cleaned(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<api::Room>> {
    let id = parse_record_id(room::TABLE, &id)?;
    let patch = db::RoomPatch {
        last_cleaned: Some(now_millis()),
        needs_cleaning: Some(false),
        is_available: Some(true),
        ..Default::default()
    };
    let updated = RoomRepository::new(state.get_db())
        .update(&id, patch)
        .await?;
    tracing::info!(room = %id, "Room marked as cleaned");
    Ok(Json(updated.into()))
}

/// PATCH /api/rooms/{id}/maintenance - 停用房间
///
/// 请求体可省略；`reason` 缺省为 "Scheduled maintenance"
pub async fn mark_maintenance(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<api::Room>> {
    let id = parse_record_id(room::TABLE, &id)?;

    let request = if body.iter().all(u8::is_ascii_whitespace) {
        MaintenanceRequest::default()
    } else {
        let req: MaintenanceRequest = serde_json::from_slice(&body)
            .map_err(|e| AppError::validation(format!("Invalid request body: {}", e)))?;
        validate_input(&req)?;
        req
    };
    let reason = request
        .reason
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MAINTENANCE_REASON.to_string());

    let patch = db::RoomPatch {
        is_available: Some(false),
        needs_maintenance: Some(true),
        maintenance_reason: Some(reason),
        ..Default::default()
    };
    let updated = RoomRepository::new(state.get_db())
        .update(&id, patch)
        .await?;
    tracing::info!(room = %id, reason = %updated.maintenance_reason, "Room marked for maintenance");
    Ok(Json(updated.into()))
}
