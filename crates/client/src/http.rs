use std::time::Duration;

use async_trait::async_trait;
use queue_core::api::{ErrorBody, JoinRequest};
use queue_core::model::{JoinResult, QueueState, StatusSnapshot, Ticket};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;
use crate::tracker::StatusSource;

/// Connect timeout for every request.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(4);
/// Read timeout for every request.
pub const READ_TIMEOUT: Duration = Duration::from_secs(4);

/// Thin wire adapter for the queue service: JSON over HTTP with bounded
/// timeouts, no retries, no authentication. Correctness does not depend on
/// connection reuse.
#[derive(Debug, Clone)]
pub struct QueueClient {
    http: reqwest::Client,
    base_url: String,
}

impl QueueClient {
    /// Creates a client for `base_url`, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: &str) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Joins the queue under `name` and returns the issued ticket.
    ///
    /// The name is sent as given; callers validate it first.
    pub async fn join(&self, name: &str) -> Result<JoinResult, ClientError> {
        let req = JoinRequest {
            name: name.to_string(),
        };
        debug!(name, "POST /queue/join");
        let resp = self
            .http
            .post(format!("{}/queue/join", self.base_url))
            .json(&req)
            .header(reqwest::header::CONTENT_TYPE, "application/json; charset=utf-8")
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }

    /// Fetches the current status of `ticket`.
    pub async fn status(&self, ticket: Ticket) -> Result<StatusSnapshot, ClientError> {
        debug!(ticket, "GET /queue/status");
        let resp = self
            .http
            .get(format!("{}/queue/status", self.base_url))
            .query(&[("ticket", ticket)])
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }

    /// Fetches the whole-queue summary.
    pub async fn state(&self) -> Result<QueueState, ClientError> {
        let resp = self
            .http
            .get(format!("{}/queue/state", self.base_url))
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }

    /// Advances the queue to the next ticket. Operator endpoint.
    pub async fn advance(&self) -> Result<QueueState, ClientError> {
        let resp = self
            .http
            .post(format!("{}/queue/next", self.base_url))
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }

    /// Clears the queue. Operator endpoint.
    pub async fn reset(&self) -> Result<QueueState, ClientError> {
        let resp = self
            .http
            .post(format!("{}/queue/reset", self.base_url))
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }

    /// Liveness probe against `/health`.
    pub async fn health(&self) -> Result<(), ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(network)?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(http_failure(resp).await)
        }
    }
}

#[async_trait]
impl StatusSource for QueueClient {
    async fn status(&self, ticket: Ticket) -> Result<StatusSnapshot, ClientError> {
        QueueClient::status(self, ticket).await
    }
}

fn network(err: reqwest::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    if resp.status().is_success() {
        resp.json::<T>().await.map_err(|err| {
            if err.is_decode() {
                ClientError::Malformed(err.to_string())
            } else {
                network(err)
            }
        })
    } else {
        Err(http_failure(resp).await)
    }
}

/// Builds the failure for a non-2xx response: the body's `error` field when
/// present, otherwise the raw body, otherwise the status line.
async fn http_failure(resp: reqwest::Response) -> ClientError {
    let code = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(envelope) => envelope.error,
        Err(_) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {code}")
            } else {
                trimmed.to_string()
            }
        }
    };
    ClientError::Http { code, message }
}
