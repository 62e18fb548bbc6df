use thiserror::Error;

/// Failure surfaced by [`crate::http::QueueClient`] calls.
///
/// Three-valued by contract: callers distinguish kinds structurally but
/// surface only the rendered message. The client never retries; for the
/// tracker the next scheduled cycle is the retry.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout — the request never
    /// produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered outside `[200, 300)`. `message` is the server's
    /// `error` field when present, otherwise the raw body, otherwise a
    /// transport-level description.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        code: u16,
        /// Failure message shown to the user.
        message: String,
    },

    /// A 2xx response whose body is missing a required field or has the
    /// wrong shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}
