#[cfg(test)]
#[path = "identity_store_test.rs"]
mod tests;

use std::sync::Mutex;
use std::sync::MutexGuard;

use anyhow::Result;

use crate::domain::models::Identity;
use crate::domain::models::KeyValueStoreBox;
use crate::domain::models::EMAIL_STORAGE_KEY;
use crate::domain::models::TOKEN_STORAGE_KEY;

/// Single owner of the signed in identity. Keeps the in-memory value for the
/// running process and mirrors it into durable storage so a restart does not
/// force signing in again.
pub struct IdentityStore {
    current: Mutex<Option<Identity>>,
    storage: KeyValueStoreBox,
}

impl IdentityStore {
    pub fn new(storage: KeyValueStoreBox) -> IdentityStore {
        return IdentityStore {
            current: Mutex::new(None),
            storage,
        };
    }

    fn current(&self) -> MutexGuard<'_, Option<Identity>> {
        return self
            .current
            .lock()
            .unwrap_or_else(|poisoned| return poisoned.into_inner());
    }

    /// Replaces any existing identity.
    pub fn set(&self, identity: Identity) -> Result<()> {
        *self.current() = Some(identity.clone());

        self.storage.set(EMAIL_STORAGE_KEY, &identity.email)?;
        match &identity.session_token {
            Some(token) => self.storage.set(TOKEN_STORAGE_KEY, token)?,
            None => self.storage.remove(TOKEN_STORAGE_KEY)?,
        }

        tracing::debug!("Identity stored");
        return Ok(());
    }

    /// The in-memory identity when there is one, otherwise whatever durable
    /// storage still holds.
    pub fn get(&self) -> Option<Identity> {
        let mut current = self.current();
        if current.is_some() {
            return current.clone();
        }

        let email = match self.storage.get(EMAIL_STORAGE_KEY) {
            Ok(Some(email)) if !email.trim().is_empty() => email,
            Ok(_) => return None,
            Err(err) => {
                tracing::warn!(error = ?err, "Failed to read identity from storage");
                return None;
            }
        };

        let session_token = self.storage.get(TOKEN_STORAGE_KEY).unwrap_or_else(|err| {
            tracing::warn!(error = ?err, "Failed to read session token from storage");
            return None;
        });

        let identity = Identity::new(&email, session_token);
        *current = Some(identity.clone());

        return Some(identity);
    }

    /// Forgets the identity everywhere. The in-memory copy is dropped even if
    /// durable storage fails to clear.
    pub fn clear(&self) -> Result<()> {
        *self.current() = None;
        self.storage.clear()?;

        tracing::debug!("Identity cleared");
        return Ok(());
    }
}
