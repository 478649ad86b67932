//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::MessageResponse;
use shared::models::{
    self as api, DEFAULT_IMAGE_URL, DEFAULT_OPENING_HOURS, DEFAULT_PHONE, DEFAULT_RATING,
    RestaurantCreate, RestaurantDetail, RestaurantListItem, RestaurantUpdate, default_cuisine,
    default_facilities,
};
use shared::util::now_millis;

use crate::api::convert::convert_all;
use crate::api::extract::ValidatedJson;
use crate::core::ServerState;
use crate::db::models as db;
use crate::db::repository::{RestaurantRepository, RoomRepository, parse_record_id, restaurant};
use crate::utils::{AppError, AppResult};

fn not_found() -> AppError {
    AppError::not_found("Restaurant not found")
}

/// GET /api/restaurants - 全部餐厅，附房间数
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<RestaurantListItem>>> {
    let repo = RestaurantRepository::new(state.get_db());
    let restaurants = repo.find_all().await?;
    let counts = repo.room_counts().await?;

    let items = restaurants
        .into_iter()
        .map(|r| {
            let restaurant = api::Restaurant::from(r);
            let room_count = counts.get(&restaurant.id).copied().unwrap_or(0);
            RestaurantListItem {
                restaurant,
                room_count,
            }
        })
        .collect();
    Ok(Json(items))
}

/// GET /api/restaurants/{id} - 餐厅详情及房间列表
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<RestaurantDetail>> {
    let rid = parse_record_id(restaurant::TABLE, &id)?;
    let record = RestaurantRepository::new(state.get_db())
        .find_by_id(&rid)
        .await?
        .ok_or_else(not_found)?;
    let rooms = RoomRepository::new(state.get_db())
        .find_all(Some(&rid))
        .await?;

    Ok(Json(RestaurantDetail {
        restaurant: record.into(),
        rooms: convert_all(rooms),
    }))
}

/// POST /api/restaurants - 创建餐厅 (缺省字段取默认值)
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<RestaurantCreate>,
) -> AppResult<(StatusCode, Json<api::Restaurant>)> {
    let record = db::Restaurant {
        id: None,
        name: payload.name,
        description: payload.description,
        location: payload.location,
        phone: payload.phone.unwrap_or_else(|| DEFAULT_PHONE.to_string()),
        email: payload.email,
        image_url: payload
            .image_url
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        facilities: payload.facilities.unwrap_or_else(default_facilities),
        cuisine: payload.cuisine.unwrap_or_else(default_cuisine),
        rating: payload.rating.unwrap_or(DEFAULT_RATING),
        opening_hours: payload
            .opening_hours
            .unwrap_or_else(|| DEFAULT_OPENING_HOURS.to_string()),
        contact_number: payload.contact_number,
        created_at: now_millis(),
    };

    let created = RestaurantRepository::new(state.get_db())
        .create(record)
        .await?;
    tracing::info!(restaurant = ?created.id, "Restaurant created");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/restaurants/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<RestaurantUpdate>,
) -> AppResult<Json<api::Restaurant>> {
    let rid = parse_record_id(restaurant::TABLE, &id)?;
    let patch = db::RestaurantPatch {
        name: payload.name,
        description: payload.description,
        location: payload.location,
        phone: payload.phone,
        email: payload.email,
        image_url: payload.image_url,
        facilities: payload.facilities,
        cuisine: payload.cuisine,
        rating: payload.rating,
        opening_hours: payload.opening_hours,
        contact_number: payload.contact_number,
    };

    let updated = RestaurantRepository::new(state.get_db())
        .update(&rid, patch)
        .await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/restaurants/{id} - 级联删除其房间
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let rid = parse_record_id(restaurant::TABLE, &id)?;
    let deleted = RestaurantRepository::new(state.get_db())
        .delete_cascade(&rid)
        .await?;
    if !deleted {
        return Err(not_found());
    }

    tracing::info!(restaurant = %rid, "Restaurant and its rooms deleted");
    Ok(Json(MessageResponse::new("Restaurant deleted successfully")))
}
