use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::RequestOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
}

pub type SharedGateway = Arc<dyn Gateway + Send + Sync>;

#[async_trait]
pub trait Gateway {
    /// Base URL every endpoint path is resolved against.
    fn base_url(&self) -> String;

    /// Sends a single request to the backend. There are no retries; the
    /// caller decides whether the user may try again.
    ///
    /// Transport failures, application errors carrying a `detail` payload,
    /// and successful bodies are all folded into one `RequestOutcome`.
    async fn send(&self, path: &str, method: Method, body: Option<Value>)
        -> RequestOutcome<Value>;
}

fn decode<R: DeserializeOwned>(path: &str, data: Value) -> RequestOutcome<R> {
    match serde_json::from_value::<R>(data) {
        Ok(res) => return RequestOutcome::Success(res),
        Err(err) => {
            tracing::warn!(error = ?err, path = path, "Unexpected response body");
            return RequestOutcome::unexpected_response();
        }
    }
}

/// Sends `body` as JSON and reads the success payload into `R`. A payload
/// that does not fit `R` becomes an error outcome rather than a panic.
pub async fn send_json<B: Serialize, R: DeserializeOwned>(
    gateway: &SharedGateway,
    path: &str,
    method: Method,
    body: &B,
) -> RequestOutcome<R> {
    let value = match serde_json::to_value(body) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = ?err, path = path, "Failed to encode request body");
            return RequestOutcome::unexpected_response();
        }
    };

    return gateway
        .send(path, method, Some(value))
        .await
        .and_then(|data| return decode(path, data));
}

pub async fn fetch_json<R: DeserializeOwned>(
    gateway: &SharedGateway,
    path: &str,
) -> RequestOutcome<R> {
    return gateway
        .send(path, Method::Get, None)
        .await
        .and_then(|data| return decode(path, data));
}
