//! Error body shared by server and client
//!
//! Every non-2xx response carries this body:
//!
//! ```json
//! { "code": "E0003", "message": "Room not found" }
//! ```

use serde::{Deserialize, Serialize};

/// Error codes
///
/// | Code | HTTP | Meaning |
/// |------|------|---------|
/// | E0002 | 400 | validation / business rule |
/// | E0003 | 404 | not found |
/// | E0004 | 409 | conflict |
/// | E2001 | 403 | insufficient role |
/// | E3001 | 401 | no credential |
/// | E3002 | 401 | invalid credential |
/// | E3003 | 401 | expired credential |
/// | E9001 | 500 | internal |
/// | E9002 | 500 | database |
pub mod codes {
    pub const VALIDATION: &str = "E0002";
    pub const NOT_FOUND: &str = "E0003";
    pub const CONFLICT: &str = "E0004";
    pub const FORBIDDEN: &str = "E2001";
    pub const UNAUTHORIZED: &str = "E3001";
    pub const INVALID_TOKEN: &str = "E3002";
    pub const TOKEN_EXPIRED: &str = "E3003";
    pub const INTERNAL: &str = "E9001";
    pub const DATABASE: &str = "E9002";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
