use std::{cell::RefCell, collections::BTreeMap};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Key, KeyValueStore, domain};

/// Store keeping the serialized values in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text under the key.
    pub fn insert_raw(&self, key: Key, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn raw(&self, key: Key) -> Option<String> {
        self.entries.borrow().get(key.as_ref()).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, domain::StorageError> {
        self.entries
            .borrow()
            .get(key.as_ref())
            .map(|value| {
                serde_json::from_str(value).map_err(|err| domain::StorageError::Corrupted {
                    key: key.to_string(),
                    reason: err.to_string(),
                })
            })
            .transpose()
    }

    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), domain::StorageError> {
        let value =
            serde_json::to_string(value).map_err(|err| domain::StorageError::Other(err.into()))?;
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}
