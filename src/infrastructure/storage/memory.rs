#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use anyhow::Result;
use dashmap::DashMap;

use crate::domain::models::KeyValueStore;

/// In-process storage. Nothing survives a restart; used for `--ephemeral`
/// runs and as a test double.
#[derive(Default)]
pub struct MemoryStore {
    values: DashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        return Ok(self.values.get(key).map(|e| return e.value().to_string()));
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        return Ok(());
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.remove(key);
        return Ok(());
    }

    fn clear(&self) -> Result<()> {
        self.values.clear();
        return Ok(());
    }
}
