#[cfg(test)]
#[path = "session_launch_test.rs"]
mod tests;

use std::sync::Mutex;
use std::sync::MutexGuard;

use super::compose;
use super::Loading;
use super::SessionContext;
use crate::domain::models::send_json;
use crate::domain::models::Method;
use crate::domain::models::RequestOutcome;
use crate::domain::models::ScenarioDraft;
use crate::domain::models::SessionHandle;
use crate::domain::models::SessionRequest;
use crate::domain::models::SharedGateway;

/// Client side gate for starting an interview. Whitespace-only fields count as
/// empty. The backend validates again on its own.
pub fn can_start(draft: &ScenarioDraft) -> bool {
    return !draft.company.trim().is_empty()
        && !draft.role.trim().is_empty()
        && draft.agreed_to_terms;
}

pub struct SessionLaunch {
    gateway: SharedGateway,
    loading: Loading,
    error: Mutex<Option<String>>,
}

impl SessionLaunch {
    pub fn new(gateway: SharedGateway) -> SessionLaunch {
        return SessionLaunch {
            gateway,
            loading: Loading::default(),
            error: Mutex::new(None),
        };
    }

    fn error_mut(&self) -> MutexGuard<'_, Option<String>> {
        return self
            .error
            .lock()
            .unwrap_or_else(|poisoned| return poisoned.into_inner());
    }

    pub fn is_loading(&self) -> bool {
        return self.loading.is_active();
    }

    pub fn error(&self) -> Option<String> {
        return self.error_mut().clone();
    }

    /// Creates a session for `draft` and, on success, carries the handle to
    /// the interview screen. Returns `None` without a request when the gate
    /// fails or a launch is already in flight.
    pub async fn start(
        &self,
        ctx: &SessionContext,
        draft: &ScenarioDraft,
    ) -> Option<RequestOutcome<SessionHandle>> {
        if !can_start(draft) {
            return None;
        }

        return self.launch(ctx, draft, "/session".to_string(), Method::Post, None).await;
    }

    /// Asks the backend to reset an existing session with a fresh first
    /// question. Same gate and in-flight rules as `start`.
    pub async fn restart(
        &self,
        ctx: &SessionContext,
        draft: &ScenarioDraft,
        session_id: &str,
    ) -> Option<RequestOutcome<SessionHandle>> {
        if !can_start(draft) || session_id.trim().is_empty() {
            return None;
        }

        return self
            .launch(
                ctx,
                draft,
                format!("/session/{}", session_id.trim()),
                Method::Patch,
                Some(session_id.trim().to_string()),
            )
            .await;
    }

    async fn launch(
        &self,
        ctx: &SessionContext,
        draft: &ScenarioDraft,
        path: String,
        method: Method,
        session_id: Option<String>,
    ) -> Option<RequestOutcome<SessionHandle>> {
        // Released on every exit path, including a panic while reading the
        // response.
        let _guard = self.loading.acquire()?;
        *self.error_mut() = None;

        let request = SessionRequest {
            session_id,
            email: ctx.identity.get().map(|e| return e.email),
            ..compose(draft)
        };

        let outcome = send_json::<_, SessionHandle>(&self.gateway, &path, method, &request).await;
        match &outcome {
            RequestOutcome::Success(handle) => {
                tracing::info!(session_id = %handle.session_id, "Session started");
                ctx.navigator.carry(handle.clone());
            }
            RequestOutcome::Error { message, .. } => {
                tracing::info!(path = %path, "Failed to start session");
                *self.error_mut() = Some(message.to_string());
            }
        }

        return Some(outcome);
    }
}
