use super::{PersistenceResult, StorageSubstrate};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process storage with no durability, for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSubstrate for MemoryStorage {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        let values = self.values.lock().expect("memory storage mutex poisoned");
        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> PersistenceResult<()> {
        let mut values = self.values.lock().expect("memory storage mutex poisoned");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
