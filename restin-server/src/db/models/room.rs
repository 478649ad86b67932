//! Room Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::RestaurantId;

/// Room ID type
pub type RoomId = RecordId;

/// Room record
///
/// `restaurant_name` / `restaurant_location` are read-only projections
/// through the `restaurant` link; they are never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RoomId>,
    pub name: String,
    pub restaurant: RestaurantId,
    pub capacity: i32,
    pub room_type: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    pub is_available: bool,
    #[serde(default)]
    pub needs_cleaning: bool,
    #[serde(default)]
    pub needs_maintenance: bool,
    #[serde(default)]
    pub maintenance_reason: String,
    pub last_cleaned: i64,
    pub created_at: i64,

    #[serde(default, skip_serializing)]
    pub restaurant_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub restaurant_location: Option<String>,
}

/// Partial update (`MERGE`)
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoomPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<RestaurantId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_cleaning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_maintenance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_cleaned: Option<i64>,
}
