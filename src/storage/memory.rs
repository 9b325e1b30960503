use std::collections::HashMap;

use super::StorageBackend;

/// Slots held in process memory. Gone as soon as the owner is dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    items: HashMap<String, String>,
}

impl StorageBackend for MemoryBackend {
    fn get_item(&mut self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> anyhow::Result<()> {
        self.items.remove(key);
        Ok(())
    }
}
