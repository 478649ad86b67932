//! Room Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::RestaurantSummary;

pub const DEFAULT_ROOM_TYPE: &str = "shared";
pub const DEFAULT_ROOM_IMAGE_URL: &str =
    "https://images.pexels.com/photos/164595/pexels-photo-164595.jpeg";
pub const DEFAULT_MAINTENANCE_REASON: &str = "Scheduled maintenance";

/// Bookable room (房间)
///
/// `is_available` is a staff-controlled flag. It is not derived from
/// bookings, and the generic update may set it without touching the
/// cleaning / maintenance flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub restaurant: RestaurantSummary,
    pub capacity: i32,
    #[serde(rename = "type")]
    pub room_type: String,
    pub amenities: Vec<String>,
    #[serde(rename = "image_url")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    pub is_available: bool,
    pub needs_cleaning: bool,
    pub needs_maintenance: bool,
    pub maintenance_reason: String,
    pub last_cleaned: i64,
    pub created_at: i64,
}

/// Embedded room reference
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub room_type: String,
}

/// Create room payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreate {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    /// Restaurant id (`restaurant:xxx` or bare key)
    #[validate(length(min = 1, message = "Restaurant is required"))]
    pub restaurant: String,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(rename = "image_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price_per_hour: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

/// Update room payload (PUT and PATCH)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(rename = "image_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price_per_hour: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_cleaning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_maintenance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_reason: Option<String>,
}

/// Body of `PATCH /api/rooms/{id}/maintenance`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MaintenanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
