#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod tests;

use std::sync::Mutex;
use std::sync::MutexGuard;

use serde_json::Value;

use super::Loading;
use super::SessionContext;
use crate::domain::models::AuthFlowKind;
use crate::domain::models::AuthForm;
use crate::domain::models::AuthResponse;
use crate::domain::models::CredentialsRequest;
use crate::domain::models::FlowStatus;
use crate::domain::models::ForgotPasswordRequest;
use crate::domain::models::Identity;
use crate::domain::models::Method;
use crate::domain::models::RequestOutcome;
use crate::domain::models::SharedGateway;

/// Loose syntactic check: one `@`, something before it, and a dotted domain.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    return !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
}

/// Client side precondition for submitting `form`. Nothing is sent while this
/// fails.
pub fn validate_form(kind: AuthFlowKind, form: &AuthForm) -> Result<(), String> {
    if !is_plausible_email(&form.email) {
        return Err("Enter a valid email address.".to_string());
    }

    if kind == AuthFlowKind::ForgotPassword {
        return Ok(());
    }

    if form.password.is_empty() {
        return Err("Enter your password.".to_string());
    }

    if kind == AuthFlowKind::Signup && form.password != form.confirm_password {
        return Err("Passwords do not match.".to_string());
    }

    return Ok(());
}

fn request_body(kind: AuthFlowKind, form: &AuthForm) -> Option<Value> {
    let email = form.email.trim().to_string();
    let body = match kind {
        AuthFlowKind::Signup | AuthFlowKind::Login => serde_json::to_value(CredentialsRequest {
            email,
            password: form.password.to_string(),
        }),
        AuthFlowKind::ForgotPassword => serde_json::to_value(ForgotPasswordRequest { email }),
    };

    match body {
        Ok(value) => return Some(value),
        Err(err) => {
            tracing::error!(error = ?err, flow = %kind, "Failed to encode auth request");
            return None;
        }
    }
}

/// Drives one signup, login, or password reset screen.
///
/// `idle -> submitting -> (succeeded | failed)`. A failed flow re-arms on the
/// next edit or resubmission. Login and signup store the identity and move on
/// to role selection; a password reset stays on its screen and treats every
/// success the same way, whether or not the account exists.
pub struct AuthFlow {
    kind: AuthFlowKind,
    gateway: SharedGateway,
    loading: Loading,
    status: Mutex<FlowStatus>,
}

impl AuthFlow {
    pub fn new(kind: AuthFlowKind, gateway: SharedGateway) -> AuthFlow {
        return AuthFlow {
            kind,
            gateway,
            loading: Loading::default(),
            status: Mutex::new(FlowStatus::Idle),
        };
    }

    fn status_mut(&self) -> MutexGuard<'_, FlowStatus> {
        return self
            .status
            .lock()
            .unwrap_or_else(|poisoned| return poisoned.into_inner());
    }

    pub fn status(&self) -> FlowStatus {
        return self.status_mut().clone();
    }

    pub fn is_submitting(&self) -> bool {
        return self.loading.is_active();
    }

    pub fn can_submit(&self, form: &AuthForm) -> bool {
        return !self.is_submitting() && validate_form(self.kind, form).is_ok();
    }

    /// The user changed an input. Clears a previous failure.
    pub fn edit(&self) {
        let mut status = self.status_mut();
        if matches!(*status, FlowStatus::Failed { .. }) {
            *status = FlowStatus::Idle;
        }
    }

    /// Submits `form`. Returns `None` without sending anything when the form
    /// is invalid or a submission is already in flight; otherwise the
    /// outcome carries the message shown to the user.
    pub async fn submit(
        &self,
        ctx: &SessionContext,
        form: &AuthForm,
    ) -> Option<RequestOutcome<String>> {
        if validate_form(self.kind, form).is_err() {
            return None;
        }

        let _guard = self.loading.acquire()?;
        *self.status_mut() = FlowStatus::Submitting;

        let outcome = match request_body(self.kind, form) {
            Some(body) => {
                self.gateway
                    .send(self.kind.endpoint(), Method::Post, Some(body))
                    .await
            }
            None => RequestOutcome::unexpected_response(),
        };

        let outcome = outcome.map(|data| {
            return serde_json::from_value::<AuthResponse>(data).unwrap_or_default();
        });

        let res = match outcome {
            RequestOutcome::Success(response) => {
                RequestOutcome::Success(self.succeed(ctx, form, response))
            }
            RequestOutcome::Error {
                message,
                is_server_error,
            } => {
                tracing::info!(flow = %self.kind, is_server_error = is_server_error, "Auth request failed");
                if self.kind == AuthFlowKind::Login && is_server_error {
                    if let Err(err) = ctx.identity.clear() {
                        tracing::warn!(err = ?err, "Failed to clear identity after rejected login");
                    }
                }
                *self.status_mut() = FlowStatus::Failed {
                    message: message.to_string(),
                };
                RequestOutcome::Error {
                    message,
                    is_server_error,
                }
            }
        };

        return Some(res);
    }

    fn succeed(&self, ctx: &SessionContext, form: &AuthForm, response: AuthResponse) -> String {
        let message = response
            .message
            .filter(|e| return !e.trim().is_empty())
            .unwrap_or_else(|| return self.kind.fallback_message().to_string());

        if let Some(route) = self.kind.success_route() {
            let email = response
                .email
                .filter(|e| return !e.trim().is_empty())
                .unwrap_or_else(|| return form.email.to_string());

            if let Err(err) = ctx.identity.set(Identity::new(&email, response.token)) {
                tracing::warn!(error = ?err, "Failed to persist identity");
            }
            ctx.navigator.navigate(route);
        }

        tracing::info!(flow = %self.kind, "Auth request succeeded");
        *self.status_mut() = FlowStatus::Succeeded {
            message: message.to_string(),
        };

        return message;
    }
}
