//! Database Models
//!
//! Records as stored in SurrealDB. Links between tables are native
//! `RecordId`s; conversion to the `table:key` strings of the API lives in
//! `api::convert`.

pub mod booking;
pub mod report;
pub mod restaurant;
pub mod room;
pub mod user;

// Re-exports
pub use booking::{Booking, BookingId, BookingStatusPatch};
pub use report::{Report, ReportId, ReportPatch};
pub use restaurant::{Restaurant, RestaurantId, RestaurantPatch};
pub use room::{Room, RoomId, RoomPatch};
pub use user::{User, UserId, UserPatch};
