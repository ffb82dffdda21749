//! Outbound response types.

use serde::{Deserialize, Serialize};

/// The JSON envelope of every successful response: `{"data": <payload>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// The operation's payload; `null` for the index endpoint
    pub data: T,
}

impl<T> DataEnvelope<T> {
    /// Wrap a payload in the envelope.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status: "healthy" or "unhealthy"
    pub status: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Current timestamp (RFC 3339)
    pub timestamp: String,
}
