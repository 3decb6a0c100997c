#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use async_trait::async_trait;
use serde_json::Value;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Gateway;
use crate::domain::models::Method;
use crate::domain::models::RequestOutcome;

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => return reqwest::Method::GET,
        Method::Post => return reqwest::Method::POST,
        Method::Patch => return reqwest::Method::PATCH,
    }
}

/// Pulls a displayable message out of an error body. FastAPI style backends
/// send either `{"detail": "..."}` or a list of validation errors under
/// `detail`.
fn error_detail(text: &str) -> Option<String> {
    let json: Value = serde_json::from_str(text).ok()?;
    let detail = json.get("detail")?;

    if let Some(message) = detail.as_str() {
        return Some(message.to_string());
    }

    if let Some(entries) = detail.as_array() {
        let messages = entries
            .iter()
            .filter_map(|entry| {
                if let Some(message) = entry.as_str() {
                    return Some(message.to_string());
                }
                return entry
                    .get("msg")
                    .and_then(|e| return e.as_str())
                    .map(|e| return e.to_string());
            })
            .collect::<Vec<String>>();

        if !messages.is_empty() {
            return Some(messages.join("; "));
        }
    }

    return None;
}

pub struct HttpGateway {
    url: String,
    client: reqwest::Client,
}

impl Default for HttpGateway {
    fn default() -> HttpGateway {
        return HttpGateway::new(&Config::get(ConfigKey::ApiURL));
    }
}

impl HttpGateway {
    pub fn new(url: &str) -> HttpGateway {
        let mut url = url.trim().trim_end_matches('/').to_string();
        if url.is_empty() {
            url = Config::default(ConfigKey::ApiURL);
        }

        return HttpGateway {
            url,
            client: reqwest::Client::new(),
        };
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    fn base_url(&self) -> String {
        return self.url.to_string();
    }

    #[allow(clippy::implicit_return)]
    async fn send(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> RequestOutcome<Value> {
        let mut req = self
            .client
            .request(to_reqwest_method(method), format!("{}{path}", self.url));
        if let Some(json) = body {
            req = req.json(&json);
        }

        tracing::debug!(method = %method, path = path, "Sending request");

        let res = match req.send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, path = path, "Backend is not reachable");
                return RequestOutcome::transport_error();
            }
        };

        let status = res.status();
        let text = match res.text().await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = ?err, path = path, "Failed to read response body");
                return RequestOutcome::transport_error();
            }
        };

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path = path, "Backend returned an error");
            let message = error_detail(&text).unwrap_or_else(|| {
                return format!("Request failed with status {}", status.as_u16());
            });
            return RequestOutcome::server_error(&message);
        }

        if text.trim().is_empty() {
            return RequestOutcome::Success(Value::Null);
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(data) => {
                tracing::debug!(status = status.as_u16(), path = path, "Request succeeded");
                return RequestOutcome::Success(data);
            }
            Err(err) => {
                tracing::warn!(error = ?err, path = path, "Success response is not JSON");
                return RequestOutcome::Success(Value::Null);
            }
        }
    }
}
