use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use crate::domain::models::Gateway;
use crate::domain::models::Method;
use crate::domain::models::RequestOutcome;

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
}

/// Replays canned outcomes in order and records every request. With `hold`
/// set, each request waits for a notification before answering.
#[derive(Default)]
pub struct ScriptedGateway {
    outcomes: Mutex<VecDeque<RequestOutcome<Value>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    hold: Option<Arc<Notify>>,
}

impl ScriptedGateway {
    pub fn new(outcomes: Vec<RequestOutcome<Value>>) -> ScriptedGateway {
        return ScriptedGateway {
            outcomes: Mutex::new(outcomes.into()),
            ..ScriptedGateway::default()
        };
    }

    pub fn held(outcomes: Vec<RequestOutcome<Value>>, hold: Arc<Notify>) -> ScriptedGateway {
        return ScriptedGateway {
            outcomes: Mutex::new(outcomes.into()),
            hold: Some(hold),
            ..ScriptedGateway::default()
        };
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        return self.requests.lock().unwrap().clone();
    }
}

#[async_trait]
impl Gateway for ScriptedGateway {
    fn base_url(&self) -> String {
        return "http://scripted.test".to_string();
    }

    #[allow(clippy::implicit_return)]
    async fn send(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> RequestOutcome<Value> {
        self.requests.lock().unwrap().push(RecordedRequest {
            path: path.to_string(),
            method,
            body,
        });

        if let Some(hold) = &self.hold {
            hold.notified().await;
        }

        return self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(RequestOutcome::transport_error);
    }
}
