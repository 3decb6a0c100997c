#[cfg(test)]
#[path = "loading_test.rs"]
mod tests;

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Busy flag for one logical action. At most one holder at a time; the flag
/// is released when the guard drops, whichever way the holder exits.
#[derive(Default)]
pub struct Loading {
    active: AtomicBool,
}

impl Loading {
    pub fn is_active(&self) -> bool {
        return self.active.load(Ordering::SeqCst);
    }

    /// Returns `None` while another holder is in flight.
    pub fn acquire(&self) -> Option<LoadingGuard<'_>> {
        if self
            .active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }

        return Some(LoadingGuard { loading: self });
    }
}

pub struct LoadingGuard<'a> {
    loading: &'a Loading,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.loading.active.store(false, Ordering::SeqCst);
    }
}
