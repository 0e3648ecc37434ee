#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use liftos_domain as domain;
use serde::{Serialize, de::DeserializeOwned};
use strum::{AsRefStr, Display};

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;
pub mod records;
mod repository;

pub use repository::Repository;

/// Synchronous store of JSON values under string keys.
pub trait KeyValueStore {
    /// Returns `None` if no value is stored under the key.
    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, domain::StorageError>;
    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), domain::StorageError>;
}

#[derive(AsRefStr, Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "lo_sets_v1")]
    Sets,
    #[strum(serialize = "lo_settings_v1")]
    Settings,
    #[strum(serialize = "lo_program_v1")]
    Program,
    #[strum(serialize = "lo_bests_v1")]
    Bests,
}
