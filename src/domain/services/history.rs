#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use crate::domain::models::fetch_json;
use crate::domain::models::RequestOutcome;
use crate::domain::models::SessionOverview;
use crate::domain::models::SessionSummary;
use crate::domain::models::SharedGateway;

/// Read-only access to past interview sessions.
pub struct SessionHistory {
    gateway: SharedGateway,
}

impl SessionHistory {
    pub fn new(gateway: SharedGateway) -> SessionHistory {
        return SessionHistory { gateway };
    }

    /// Past sessions, most recent first. With `email` set, only sessions
    /// started by that user are kept.
    pub async fn list(&self, email: Option<&str>) -> RequestOutcome<Vec<SessionOverview>> {
        let outcome = fetch_json::<Vec<SessionOverview>>(&self.gateway, "/session/list").await;

        return outcome.map(|sessions| {
            let Some(email) = email else {
                return sessions;
            };

            return sessions
                .into_iter()
                .filter(|session| {
                    return session
                        .user_email
                        .as_ref()
                        .map(|e| return e.eq_ignore_ascii_case(email.trim()))
                        .unwrap_or(false);
                })
                .collect();
        });
    }

    pub async fn summary(&self, session_id: &str) -> RequestOutcome<SessionSummary> {
        return fetch_json::<SessionSummary>(
            &self.gateway,
            &format!("/session/{}/summary", session_id.trim()),
        )
        .await;
    }
}
