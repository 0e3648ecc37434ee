use std::collections::VecDeque;

use gloo_storage::{Storage as GlooStorage, errors::StorageError as GlooStorageError};
use liftos_web_app::log;
use ::log::debug;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Key, KeyValueStore, domain};

/// Browser local storage.
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, domain::StorageError> {
        match gloo_storage::LocalStorage::get(key.as_ref()) {
            Ok(value) => Ok(Some(value)),
            Err(err) => match err {
                GlooStorageError::KeyNotFound(_) => Ok(None),
                err => Err(storage_error(key, err)),
            },
        }
    }

    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::set(key.as_ref(), value).map_err(|err| storage_error(key, err))
    }
}

fn storage_error(key: Key, err: GlooStorageError) -> domain::StorageError {
    match err {
        GlooStorageError::SerdeError(err) => domain::StorageError::Corrupted {
            key: key.to_string(),
            reason: err.to_string(),
        },
        GlooStorageError::JsError(err) => {
            debug!("failed to access \"{key}\": {err}");
            domain::StorageError::Unavailable
        }
        GlooStorageError::KeyNotFound(_) => domain::StorageError::Other(err.into()),
    }
}

pub struct Log;

const KEY_LOG: &str = "log";
const MAX_LOG_ENTRIES: usize = 100;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                GlooStorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
