//! Booking Model

use serde::{Deserialize, Serialize};
use shared::models::BookingStatus;
use surrealdb::RecordId;

use super::{RestaurantId, RoomId, UserId};

/// Booking ID type
pub type BookingId = RecordId;

/// Booking record
///
/// The trailing `Option` fields are projections through the `customer`,
/// `restaurant` and `room` links, filled by the repository's select.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookingId>,
    pub customer: UserId,
    pub restaurant: RestaurantId,
    pub room: RoomId,
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub duration: i32,
    pub status: BookingStatus,
    #[serde(default)]
    pub special_requests: String,
    pub total_amount: f64,
    pub created_at: i64,

    #[serde(default, skip_serializing)]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing)]
    pub restaurant_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub restaurant_location: Option<String>,
    #[serde(default, skip_serializing)]
    pub room_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub room_kind: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingStatusPatch {
    pub status: BookingStatus,
}
