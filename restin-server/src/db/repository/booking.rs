//! Booking Repository

use shared::models::BookingStatus;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Booking, BookingId, BookingStatusPatch, RoomId, UserId};

pub const TABLE: &str = "booking";

/// 带顾客、餐厅、房间摘要的查询
const SELECT_BOOKING: &str = "SELECT *, \
     customer.name AS customer_name, customer.email AS customer_email, \
     restaurant.name AS restaurant_name, restaurant.location AS restaurant_location, \
     room.name AS room_name, room.room_type AS room_kind FROM";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find bookings newest first, optionally only one customer's
    pub async fn find_all(&self, customer: Option<&UserId>) -> RepoResult<Vec<Booking>> {
        let bookings: Vec<Booking> = match customer {
            Some(uid) => self
                .base
                .db()
                .query(format!(
                    "{SELECT_BOOKING} booking WHERE customer = $customer ORDER BY created_at DESC"
                ))
                .bind(("customer", uid.clone()))
                .await?
                .take(0)?,
            None => self
                .base
                .db()
                .query(format!("{SELECT_BOOKING} booking ORDER BY created_at DESC"))
                .await?
                .take(0)?,
        };
        Ok(bookings)
    }

    pub async fn find_by_id(&self, id: &BookingId) -> RepoResult<Option<Booking>> {
        let mut result = self
            .base
            .db()
            .query(format!("{SELECT_BOOKING} $booking"))
            .bind(("booking", id.clone()))
            .await?;
        let bookings: Vec<Booking> = result.take(0)?;
        Ok(bookings.into_iter().next())
    }

    /// Whether a non-cancelled booking already holds `(room, date, time)`
    pub async fn slot_taken(&self, room: &RoomId, date: &str, time: &str) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT VALUE id FROM booking WHERE room = $room AND date = $date AND time = $time \
                 AND status != $cancelled LIMIT 1",
            )
            .bind(("room", room.clone()))
            .bind(("date", date.to_string()))
            .bind(("time", time.to_string()))
            .bind(("cancelled", BookingStatus::Cancelled))
            .await?;
        let ids: Vec<RecordId> = result.take(0)?;
        Ok(!ids.is_empty())
    }

    pub async fn create(&self, mut data: Booking) -> RepoResult<Booking> {
        data.id = None;
        let created: Option<Booking> = self.base.db().create(TABLE).content(data).await?;
        let id = created
            .and_then(|b| b.id)
            .ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))?;
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    pub async fn set_status(&self, id: &BookingId, status: BookingStatus) -> RepoResult<Booking> {
        let _: Option<Booking> = self
            .base
            .db()
            .update(id.clone())
            .merge(BookingStatusPatch { status })
            .await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Booking not found".to_string()))
    }
}
