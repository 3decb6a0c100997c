#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;

use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::domain::models::Route;
use crate::domain::models::SessionHandle;

struct NavigationState {
    route: Route,
    carried: Option<SessionHandle>,
}

/// Tracks the active screen and carries a session handle from the scenario
/// screen to the interview screen. The handle is transient: it is consumed
/// once and never written to durable storage.
pub struct Navigator {
    state: Mutex<NavigationState>,
}

impl Default for Navigator {
    fn default() -> Navigator {
        return Navigator {
            state: Mutex::new(NavigationState {
                route: Route::Login,
                carried: None,
            }),
        };
    }
}

impl Navigator {
    fn state(&self) -> MutexGuard<'_, NavigationState> {
        return self
            .state
            .lock()
            .unwrap_or_else(|poisoned| return poisoned.into_inner());
    }

    pub fn current(&self) -> Route {
        return self.state().route;
    }

    /// Moves to `route` without carrying anything. A handle left behind by an
    /// earlier `carry` is dropped, so reaching the interview screen this way
    /// means there is no active session.
    pub fn navigate(&self, route: Route) {
        let mut state = self.state();
        tracing::debug!(from = %state.route, to = %route, "Navigate");
        state.route = route;
        state.carried = None;
    }

    /// Moves to the interview screen with `handle` attached.
    pub fn carry(&self, handle: SessionHandle) {
        let mut state = self.state();
        tracing::debug!(from = %state.route, session_id = %handle.session_id, "Carry session");
        state.route = Route::Interview;
        state.carried = Some(handle);
    }

    /// Hands the carried session to the destination screen. A second call
    /// returns `None`.
    pub fn take_session(&self) -> Option<SessionHandle> {
        return self.state().carried.take();
    }
}
