use serde::{Deserialize, Serialize};

/// Body of `POST /queue/join`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequest {
    /// Display name of the person joining the queue.
    pub name: String,
}

/// Error envelope the server attaches to non-2xx responses.
///
/// The `error` string is surfaced verbatim as the failure message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error description.
    pub error: String,
}
