//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::MessageResponse;
use shared::models::{
    self as api, BookingCreate, BookingStatus, BookingStatusUpdate, DEFAULT_DURATION_HOURS,
    canonical_date, canonical_time, compute_total_amount,
};
use shared::util::now_millis;

use crate::api::convert::convert_all;
use crate::api::extract::ValidatedJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models as db;
use crate::db::repository::{
    BookingRepository, RoomRepository, booking, parse_record_id, restaurant, room, user,
};
use crate::security_log;
use crate::utils::{AppError, AppResult};

fn not_found() -> AppError {
    AppError::not_found("Booking not found")
}

/// 顾客只能访问自己的预订
fn ensure_owner(current: &CurrentUser, booking: &db::Booking) -> AppResult<()> {
    if current.is_operator() || booking.customer.to_string() == current.id {
        return Ok(());
    }
    security_log!(
        "WARN",
        "booking_access_denied",
        user_id = current.id.clone(),
        booking = format!("{:?}", booking.id)
    );
    Err(AppError::Forbidden("Not authorized".to_string()))
}

/// POST /api/bookings
///
/// 时段检查与写入在 `booking_lock` 内完成，同一 (room, date, time) 只保留一条有效预订
pub async fn create(
    State(state): State<ServerState>,
    current: CurrentUser,
    ValidatedJson(payload): ValidatedJson<BookingCreate>,
) -> AppResult<(StatusCode, Json<api::Booking>)> {
    let room_id = parse_record_id(room::TABLE, &payload.room)?;
    let customer = parse_record_id(user::TABLE, &current.id)?;

    let room = RoomRepository::new(state.get_db())
        .find_by_id(&room_id)
        .await?
        .ok_or_else(|| AppError::not_found("Room not found"))?;

    if !room.is_available {
        return Err(AppError::business_rule("Room is not available"));
    }
    if payload.guests > room.capacity {
        return Err(AppError::business_rule(format!(
            "Room capacity is {}, but {} guests requested",
            room.capacity, payload.guests
        )));
    }
    if let Some(raw) = payload.restaurant.as_deref().filter(|r| !r.trim().is_empty()) {
        let requested = parse_record_id(restaurant::TABLE, raw)?;
        if requested != room.restaurant {
            return Err(AppError::business_rule(
                "Room does not belong to the selected restaurant",
            ));
        }
    }

    // 统一存储补零后的日期和时间，时段比较按字符串进行
    let date = canonical_date(&payload.date)
        .ok_or_else(|| AppError::validation("Date must be formatted as YYYY-MM-DD"))?;
    let time = canonical_time(&payload.time)
        .ok_or_else(|| AppError::validation("Time must be formatted as HH:MM"))?;

    let duration = payload.duration.unwrap_or(DEFAULT_DURATION_HOURS);
    let record = db::Booking {
        id: None,
        customer,
        restaurant: room.restaurant.clone(),
        room: room_id.clone(),
        date,
        time,
        guests: payload.guests,
        duration,
        status: BookingStatus::Pending,
        special_requests: payload.special_requests.unwrap_or_default(),
        total_amount: compute_total_amount(room.price_per_hour, duration),
        created_at: now_millis(),
        customer_name: None,
        customer_email: None,
        restaurant_name: None,
        restaurant_location: None,
        room_name: None,
        room_kind: None,
    };

    let repo = BookingRepository::new(state.get_db());
    let created = {
        let _guard = state.booking_lock.lock().await;
        if repo
            .slot_taken(&room_id, &record.date, &record.time)
            .await?
        {
            return Err(AppError::conflict(format!(
                "Room is already booked on {} at {}",
                record.date, record.time
            )));
        }
        repo.create(record).await?
    };

    tracing::info!(
        booking = ?created.id,
        room = %room_id,
        customer = %current.id,
        "Booking created"
    );
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/bookings - 顾客仅能看到自己的预订
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<api::Booking>>> {
    let customer = if current.is_operator() {
        None
    } else {
        Some(parse_record_id(user::TABLE, &current.id)?)
    };
    let bookings = BookingRepository::new(state.get_db())
        .find_all(customer.as_ref())
        .await?;
    Ok(Json(convert_all(bookings)))
}

/// GET /api/bookings/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<api::Booking>> {
    let id = parse_record_id(booking::TABLE, &id)?;
    let record = BookingRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(not_found)?;
    ensure_owner(&current, &record)?;
    Ok(Json(record.into()))
}

/// PATCH /api/bookings/{id} - 按状态机推进
pub async fn update_status(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<BookingStatusUpdate>,
) -> AppResult<Json<api::Booking>> {
    let id = parse_record_id(booking::TABLE, &id)?;
    let repo = BookingRepository::new(state.get_db());
    let existing = repo.find_by_id(&id).await?.ok_or_else(not_found)?;

    if !existing.status.can_transition_to(payload.status) {
        return Err(AppError::business_rule(format!(
            "Cannot change booking status from {} to {}",
            existing.status, payload.status
        )));
    }
    if existing.status == payload.status {
        return Ok(Json(existing.into()));
    }

    let updated = repo.set_status(&id, payload.status).await?;
    tracing::info!(
        booking = %id,
        from = %existing.status,
        to = %payload.status,
        by = %current.id,
        "Booking status changed"
    );
    Ok(Json(updated.into()))
}

/// DELETE /api/bookings/{id} - 取消预订 (不修改房间可用状态)
pub async fn cancel(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_record_id(booking::TABLE, &id)?;
    let repo = BookingRepository::new(state.get_db());
    let existing = repo.find_by_id(&id).await?.ok_or_else(not_found)?;
    ensure_owner(&current, &existing)?;

    if existing.status != BookingStatus::Cancelled {
        repo.set_status(&id, BookingStatus::Cancelled).await?;
        tracing::info!(booking = %id, by = %current.id, "Booking cancelled");
    }
    Ok(Json(MessageResponse::new("Booking cancelled successfully")))
}
