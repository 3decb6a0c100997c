use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Route;

/// Shown after a password reset request when the backend sends no message.
pub const RESET_LINK_FALLBACK: &str = "If this email exists, we sent a reset link.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AuthFlowKind {
    Signup,
    Login,
    ForgotPassword,
}

impl AuthFlowKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            AuthFlowKind::Signup => return "/auth/signup",
            AuthFlowKind::Login => return "/auth/login",
            AuthFlowKind::ForgotPassword => return "/auth/forgot-password",
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            AuthFlowKind::Signup => return "Signup successful",
            AuthFlowKind::Login => return "Login successful",
            AuthFlowKind::ForgotPassword => return RESET_LINK_FALLBACK,
        }
    }

    /// Where a successful submission leads. Password resets stay put.
    pub fn success_route(&self) -> Option<Route> {
        match self {
            AuthFlowKind::Signup | AuthFlowKind::Login => return Some(Route::SelectRole),
            AuthFlowKind::ForgotPassword => return None,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            AuthFlowKind::Signup => return Route::Signup,
            AuthFlowKind::Login => return Route::Login,
            AuthFlowKind::ForgotPassword => return Route::ForgotPassword,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    pub fn credentials(email: &str, password: &str) -> AuthForm {
        return AuthForm {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: password.to_string(),
        };
    }

    pub fn email_only(email: &str) -> AuthForm {
        return AuthForm {
            email: email.to_string(),
            ..AuthForm::default()
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowStatus {
    Idle,
    Submitting,
    Succeeded { message: String },
    Failed { message: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "access_token")]
    pub token: Option<String>,
}
