//! Stats API Handlers

use axum::{Json, extract::State};
use chrono::Utc;
use shared::models::{Booking, Report, Room};
use shared::stats::{self, OperationsStats, OverviewStats};

use crate::api::convert::convert_all;
use crate::core::ServerState;
use crate::db::repository::{BookingRepository, ReportRepository, RoomRepository, UserRepository};
use crate::utils::AppResult;

/// GET /api/stats/overview
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<OverviewStats>> {
    let db = state.get_db();
    let bookings: Vec<Booking> = convert_all(BookingRepository::new(db.clone()).find_all(None).await?);
    let rooms: Vec<Room> = convert_all(RoomRepository::new(db.clone()).find_all(None).await?);
    let reports: Vec<Report> = convert_all(ReportRepository::new(db.clone()).find_all(None).await?);
    let user_count = UserRepository::new(db).count().await?;

    Ok(Json(stats::overview(&bookings, user_count, &rooms, &reports)))
}

/// GET /api/stats/operations - "今日" 按 UTC 日期计算
pub async fn operations(State(state): State<ServerState>) -> AppResult<Json<OperationsStats>> {
    let db = state.get_db();
    let rooms: Vec<Room> = convert_all(RoomRepository::new(db.clone()).find_all(None).await?);
    let bookings: Vec<Booking> = convert_all(BookingRepository::new(db).find_all(None).await?);

    Ok(Json(stats::operations(
        &rooms,
        &bookings,
        Utc::now().date_naive(),
    )))
}
