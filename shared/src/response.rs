//! Plain acknowledgement responses

use serde::{Deserialize, Serialize};

/// `{ "message": "..." }` body returned by delete / cancel endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `GET /api/health` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 状态 (ok)
    pub status: String,
    pub message: String,
    pub version: String,
    /// 毫秒时间戳
    pub timestamp: i64,
}
