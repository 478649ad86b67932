//! Dashboard reductions
//!
//! Pure functions over already-fetched collections. The server uses them
//! for `/api/stats/*`; the client can reuse them on cached lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    Booking, BookingStatus, DATE_FORMAT, Report, ReportStatus, Room, canonical_date,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStatusCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportStatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

/// Admin overview (`GET /api/stats/overview`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_revenue: f64,
    pub total_bookings: usize,
    pub total_users: usize,
    pub occupancy_rate: u32,
    pub bookings_by_status: BookingStatusCounts,
    pub reports_by_status: ReportStatusCounts,
}

/// Staff operations view (`GET /api/stats/operations`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsStats {
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub pending_bookings: usize,
    pub today_check_ins: usize,
    pub rooms_needing_cleaning: usize,
    pub rooms_needing_maintenance: usize,
    pub occupancy_rate: u32,
}

/// Rounded percentage of rooms currently flagged unavailable
///
/// An empty room list yields 0.
pub fn occupancy_rate(rooms: &[Room]) -> u32 {
    if rooms.is_empty() {
        return 0;
    }
    let occupied = rooms.iter().filter(|r| !r.is_available).count();
    ((occupied as f64 / rooms.len() as f64) * 100.0).round() as u32
}

/// Sum of `totalAmount` over bookings that were not cancelled
pub fn total_revenue(bookings: &[Booking]) -> f64 {
    bookings
        .iter()
        .filter(|b| b.status.is_active())
        .map(|b| b.total_amount)
        .sum()
}

pub fn count_bookings(bookings: &[Booking]) -> BookingStatusCounts {
    bookings
        .iter()
        .fold(BookingStatusCounts::default(), |mut acc, b| {
            match b.status {
                BookingStatus::Pending => acc.pending += 1,
                BookingStatus::Confirmed => acc.confirmed += 1,
                BookingStatus::Cancelled => acc.cancelled += 1,
            }
            acc
        })
}

pub fn count_reports(reports: &[Report]) -> ReportStatusCounts {
    reports
        .iter()
        .fold(ReportStatusCounts::default(), |mut acc, r| {
            match r.status {
                ReportStatus::Pending => acc.pending += 1,
                ReportStatus::InProgress => acc.in_progress += 1,
                ReportStatus::Resolved => acc.resolved += 1,
                ReportStatus::Closed => acc.closed += 1,
            }
            acc
        })
}

pub fn overview(
    bookings: &[Booking],
    user_count: usize,
    rooms: &[Room],
    reports: &[Report],
) -> OverviewStats {
    OverviewStats {
        total_revenue: total_revenue(bookings),
        total_bookings: bookings.len(),
        total_users: user_count,
        occupancy_rate: occupancy_rate(rooms),
        bookings_by_status: count_bookings(bookings),
        reports_by_status: count_reports(reports),
    }
}

/// Operations counters; `today` is the calendar date check-ins are matched on
pub fn operations(rooms: &[Room], bookings: &[Booking], today: NaiveDate) -> OperationsStats {
    let today = today.format(DATE_FORMAT).to_string();
    let available_rooms = rooms.iter().filter(|r| r.is_available).count();

    OperationsStats {
        total_rooms: rooms.len(),
        available_rooms,
        occupied_rooms: rooms.len() - available_rooms,
        pending_bookings: bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Pending)
            .count(),
        today_check_ins: bookings
            .iter()
            .filter(|b| {
                b.status.is_active()
                    && canonical_date(&b.date).as_deref() == Some(today.as_str())
            })
            .count(),
        rooms_needing_cleaning: rooms.iter().filter(|r| r.needs_cleaning).count(),
        rooms_needing_maintenance: rooms.iter().filter(|r| r.needs_maintenance).count(),
        occupancy_rate: occupancy_rate(rooms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RestaurantSummary, RoomSummary, UserSummary};

    fn room(available: bool, cleaning: bool) -> Room {
        Room {
            id: "room:x".into(),
            name: "Suite".into(),
            restaurant: RestaurantSummary::default(),
            capacity: 4,
            room_type: "shared".into(),
            amenities: vec![],
            image_url: String::new(),
            price_per_hour: None,
            is_available: available,
            needs_cleaning: cleaning,
            needs_maintenance: false,
            maintenance_reason: String::new(),
            last_cleaned: 0,
            created_at: 0,
        }
    }

    fn booking(status: BookingStatus, date: &str, amount: f64) -> Booking {
        Booking {
            id: "booking:x".into(),
            customer: UserSummary::default(),
            restaurant: RestaurantSummary::default(),
            room: RoomSummary::default(),
            date: date.into(),
            time: "19:00".into(),
            guests: 2,
            duration: 2,
            status,
            special_requests: String::new(),
            total_amount: amount,
            created_at: 0,
        }
    }

    #[test]
    fn test_occupancy_rate_rounds() {
        assert_eq!(occupancy_rate(&[]), 0);
        let rooms = vec![room(false, false), room(true, false), room(true, false)];
        assert_eq!(occupancy_rate(&rooms), 33);
        let rooms = vec![room(false, false), room(false, false), room(true, false)];
        assert_eq!(occupancy_rate(&rooms), 67);
    }

    #[test]
    fn test_revenue_skips_cancelled() {
        let bookings = vec![
            booking(BookingStatus::Pending, "2025-01-01", 100.0),
            booking(BookingStatus::Confirmed, "2025-01-01", 50.0),
            booking(BookingStatus::Cancelled, "2025-01-01", 999.0),
        ];
        let stats = overview(&bookings, 3, &[], &[]);
        assert_eq!(stats.total_revenue, 150.0);
        assert_eq!(stats.total_bookings, 3);
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.bookings_by_status.cancelled, 1);
    }

    #[test]
    fn test_operations_counts_today() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let rooms = vec![room(true, true), room(false, false)];
        let bookings = vec![
            booking(BookingStatus::Pending, "2025-03-14", 10.0),
            booking(BookingStatus::Cancelled, "2025-03-14", 10.0),
            booking(BookingStatus::Confirmed, "2025-03-15", 10.0),
        ];
        let stats = operations(&rooms, &bookings, today);
        assert_eq!(stats.total_rooms, 2);
        assert_eq!(stats.available_rooms, 1);
        assert_eq!(stats.occupied_rooms, 1);
        assert_eq!(stats.pending_bookings, 1);
        assert_eq!(stats.today_check_ins, 1);
        assert_eq!(stats.rooms_needing_cleaning, 1);
        assert_eq!(stats.occupancy_rate, 50);
    }

    #[test]
    fn test_check_ins_match_unpadded_dates() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let bookings = vec![
            booking(BookingStatus::Pending, "2025-3-4", 10.0),
            booking(BookingStatus::Confirmed, "2025-03-04", 10.0),
        ];
        assert_eq!(operations(&[], &bookings, today).today_check_ins, 2);
    }
}
