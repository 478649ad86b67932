//! Data models
//!
//! API-facing shapes shared between restin-server and restin-client.
//! All IDs are `table:key` strings.

pub mod booking;
pub mod report;
pub mod restaurant;
pub mod role;
pub mod room;
pub mod user;

// Re-exports
pub use booking::*;
pub use report::*;
pub use restaurant::*;
pub use role::*;
pub use room::*;
pub use user::*;
