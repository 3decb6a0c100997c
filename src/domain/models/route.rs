#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Route {
    Login,
    Signup,
    ForgotPassword,
    SelectRole,
    Interview,
}

impl Route {
    /// Routes that can only be shown to a signed in user.
    pub fn requires_identity(&self) -> bool {
        return matches!(self, Route::SelectRole | Route::Interview);
    }
}
