#[cfg(test)]
#[path = "session_context_test.rs"]
mod tests;

use anyhow::Result;

use super::IdentityStore;
use super::Navigator;
use crate::domain::models::KeyValueStoreBox;
use crate::domain::models::Route;

/// Everything shared across screens, passed explicitly to each controller.
/// The identity may only be changed by the auth flows and by `logout`.
pub struct SessionContext {
    pub identity: IdentityStore,
    pub navigator: Navigator,
}

impl SessionContext {
    pub fn new(storage: KeyValueStoreBox) -> SessionContext {
        return SessionContext {
            identity: IdentityStore::new(storage),
            navigator: Navigator::default(),
        };
    }

    /// Entry screen after a restart. A remembered identity skips sign in.
    pub fn resume(&self) -> Route {
        if self.identity.get().is_some() {
            self.navigator.navigate(Route::SelectRole);
        } else {
            self.navigator.navigate(Route::Login);
        }

        return self.navigator.current();
    }

    /// The route that may actually be shown. Screens requiring an identity
    /// bounce to sign in when there is none.
    pub fn guard(&self) -> Route {
        let route = self.navigator.current();
        if route.requires_identity() && self.identity.get().is_none() {
            tracing::debug!(route = %route, "No identity, redirecting to login");
            self.navigator.navigate(Route::Login);
        }

        return self.navigator.current();
    }

    /// Clears the identity before navigating so the next screen never sees a
    /// stale one. Carried session state is dropped by the navigation.
    pub fn logout(&self) -> Result<()> {
        let res = self.identity.clear();
        self.navigator.navigate(Route::Login);

        return res;
    }
}
