//! Shared types for Restin
//!
//! API models, request payloads, status state machines and dashboard
//! reductions used by both `restin-server` and `restin-client`.

pub mod error;
pub mod models;
pub mod response;
pub mod stats;
pub mod util;

// Re-exports
pub use error::ErrorBody;
pub use models::Role;
pub use response::{HealthResponse, MessageResponse};
pub use serde::{Deserialize, Serialize};
