#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::fs;
use std::path;
use std::sync::Mutex;

use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::KeyValueStore;

/// Durable storage backed by a single JSON object file.
pub struct FileStore {
    pub file_path: path::PathBuf,
    lock: Mutex<()>,
}

impl Default for FileStore {
    fn default() -> FileStore {
        return FileStore::new(path::PathBuf::from(Config::get(ConfigKey::StorageFile)));
    }
}

impl FileStore {
    pub fn new(file_path: path::PathBuf) -> FileStore {
        return FileStore {
            file_path,
            lock: Mutex::new(()),
        };
    }

    fn read(&self) -> Result<BTreeMap<String, String>> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.file_path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let values: BTreeMap<String, String> = serde_json::from_str(&contents)?;
        return Ok(values);
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_string_pretty(values)?;
        fs::write(&self.file_path, payload)?;
        return Ok(());
    }

    fn update<F: FnOnce(&mut BTreeMap<String, String>)>(&self, f: F) -> Result<()> {
        let _guard = match self.lock.lock() {
            Ok(guard) => guard,
            Err(_) => bail!("Storage lock poisoned"),
        };

        let mut values = self.read()?;
        f(&mut values);
        return self.write(&values);
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.read()?;
        return Ok(values.get(key).cloned());
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        tracing::debug!(key = key, file = ?self.file_path, "Storing value");
        return self.update(|values| {
            values.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.file_path.exists() {
            return Ok(());
        }

        return self.update(|values| {
            values.remove(key);
        });
    }

    fn clear(&self) -> Result<()> {
        if !self.file_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.file_path)?;
        return Ok(());
    }
}
