//! String slots and the typed JSON adapter on top of them.
//!
//! Backends only move raw text around, the way browser storage does. All
//! knowledge of record shapes lives in [`JsonStore`] and the repositories.

mod memory;
mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub const KEY_DOCTORS: &str = "doctors";
pub const KEY_PATIENTS: &str = "patients";
pub const KEY_APPOINTMENTS: &str = "appointments";
pub const KEY_MESSAGES: &str = "messages";

pub trait StorageBackend {
    fn get_item(&mut self, key: &str) -> anyhow::Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove_item(&mut self, key: &str) -> anyhow::Result<()>;
}

pub struct JsonStore<B> {
    backend: B,
}

impl<B: StorageBackend> JsonStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Reads and parses the slot at `key`.
    ///
    /// An absent slot and a slot holding text that does not parse as `T`
    /// both load as `None`. Only a failing backend is an error.
    pub fn load<T: DeserializeOwned>(&mut self, key: &str) -> anyhow::Result<Option<T>> {
        let raw = match self.backend.get_item(key)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(key, %err, "Ignoring corrupt storage slot");
                Ok(None)
            }
        }
    }

    /// The raw entries of the array stored at `key`. `None` when the slot is
    /// absent, corrupt or holds something other than an array.
    pub fn load_array(&mut self, key: &str) -> anyhow::Result<Option<Vec<Value>>> {
        match self.load::<Value>(key)? {
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => {
                tracing::warn!(key, "Ignoring storage slot that is not an array");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Loads a record collection, treating absent or corrupt slots as empty.
    /// Entries that do not decode as `T` are skipped one by one; the rest of
    /// the collection still loads.
    pub fn load_list<T: DeserializeOwned>(&mut self, key: &str) -> anyhow::Result<Vec<T>> {
        let items = self.load_array(key)?.unwrap_or_default();
        Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(key, index, %err, "Skipping unreadable record");
                    None
                }
            })
            .collect())
    }

    /// Pushes `item` onto the array at `key`, keeping every existing entry
    /// as stored, including ones that no longer decode.
    pub fn push<T: Serialize>(&mut self, key: &str, item: &T) -> anyhow::Result<()> {
        let mut items = self.load_array(key)?.unwrap_or_default();
        items.push(serde_json::to_value(item)?);
        self.save(key, &items)
    }

    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> anyhow::Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_item(key, &raw)
    }

    pub fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.backend.remove_item(key)
    }

    #[cfg(test)]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
