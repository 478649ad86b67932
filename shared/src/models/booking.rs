//! Booking Model

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

use super::{RestaurantSummary, RoomSummary, UserSummary};

/// Hours billed when the request leaves `duration` out
pub const DEFAULT_DURATION_HOURS: i32 = 2;
/// Hourly price used when a room has no positive price set
pub const FALLBACK_PRICE_PER_HOUR: f64 = 50.0;

/// Stored booking date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Stored booking time format
pub const TIME_FORMAT: &str = "%H:%M";

/// Booking status (预订状态)
///
/// ```text
/// pending ──► confirmed ──► cancelled
///    │                         ▲
///    └─────────────────────────┘
/// ```
///
/// `cancelled` is terminal. Re-applying the current status is a no-op and
/// always allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        match (*self, next) {
            (from, to) if from == to => true,
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled) => true,
            _ => false,
        }
    }

    /// Whether the booking still holds its slot
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking as served by the API, references expanded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer: UserSummary,
    pub restaurant: RestaurantSummary,
    pub room: RoomSummary,
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub duration: i32,
    pub status: BookingStatus,
    pub special_requests: String,
    pub total_amount: f64,
    pub created_at: i64,
}

/// Create booking payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    /// Optional; must match the room's restaurant when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<String>,
    #[validate(length(min = 1, message = "Room is required"))]
    pub room: String,
    /// `YYYY-MM-DD`
    #[validate(custom(function = "validate_date"))]
    pub date: String,
    /// `HH:MM`
    #[validate(custom(function = "validate_time"))]
    pub time: String,
    #[validate(range(min = 1, message = "At least one guest is required"))]
    pub guests: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 24, message = "Duration must be between 1 and 24 hours"))]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000))]
    pub special_requests: Option<String>,
}

/// Body of `PATCH /api/bookings/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    canonical_date(value).map(|_| ()).ok_or_else(|| {
        let mut err = ValidationError::new("date");
        err.message = Some("Date must be formatted as YYYY-MM-DD".into());
        err
    })
}

fn validate_time(value: &str) -> Result<(), ValidationError> {
    canonical_time(value).map(|_| ()).ok_or_else(|| {
        let mut err = ValidationError::new("time");
        err.message = Some("Time must be formatted as HH:MM".into());
        err
    })
}

/// Zero-padded `YYYY-MM-DD`
///
/// chrono accepts single-digit fields (`2030-5-1`); slots are compared on
/// the stored string, so every date is rewritten to one spelling.
pub fn canonical_date(value: &str) -> Option<String> {
    chrono::NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .ok()
        .map(|d| d.format(DATE_FORMAT).to_string())
}

/// Zero-padded `HH:MM`
pub fn canonical_time(value: &str) -> Option<String> {
    chrono::NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .ok()
        .map(|t| t.format(TIME_FORMAT).to_string())
}

/// `totalAmount` for a new booking
///
/// A missing or non-positive hourly price falls back to
/// [`FALLBACK_PRICE_PER_HOUR`].
pub fn compute_total_amount(price_per_hour: Option<f64>, duration: i32) -> f64 {
    let price = price_per_hour
        .filter(|p| *p > 0.0)
        .unwrap_or(FALLBACK_PRICE_PER_HOUR);
    price * f64::from(duration)
}
