use anyhow::Result;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Storage key holding the signed in email.
pub const EMAIL_STORAGE_KEY: &str = "email";
/// Storage key holding the optional session token issued at sign in.
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub session_token: Option<String>,
}

impl Identity {
    pub fn new(email: &str, session_token: Option<String>) -> Identity {
        return Identity {
            email: email.trim().to_string(),
            session_token,
        };
    }
}

pub type KeyValueStoreBox = Box<dyn KeyValueStore + Send + Sync>;

/// Durable client storage that survives restarts.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}
