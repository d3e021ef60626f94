//! Data transfer objects for web responses.

use serde::{Deserialize, Serialize};

/// Error response body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
