use dashmap::DashMap;

use crate::dao::{
    local_store::LocalStore,
    storage::{StorageResult, check_quota},
};

/// In-process local store, used when no data directory is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: DashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store with an optional byte budget.
    pub fn new(quota: Option<usize>) -> Self {
        Self {
            items: DashMap::new(),
            quota,
        }
    }

    fn other_bytes(&self, exclude: &str) -> usize {
        self.items
            .iter()
            .filter(|entry| entry.key() != exclude)
            .map(|entry| entry.value().len())
            .sum()
    }
}

impl LocalStore for MemoryStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.get(key).map(|value| value.value().clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        check_quota(key, self.other_bytes(key), value.len(), self.quota)?;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_rejects_oversized_writes() {
        let store = MemoryStore::new(Some(8));
        store.set_item("k", "12345678").unwrap();
        assert!(store.set_item("k", "123456789").unwrap_err().is_quota_exceeded());
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("12345678"));
    }

    #[test]
    fn unlimited_store_accepts_anything() {
        let store = MemoryStore::new(None);
        store.set_item("k", &"x".repeat(10_000)).unwrap();
        assert_eq!(store.get_item("k").unwrap().map(|v| v.len()), Some(10_000));
        assert!(store.get_item("other").unwrap().is_none());
    }
}
