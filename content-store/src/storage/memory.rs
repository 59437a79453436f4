//! In-memory storage backend

use super::{DurableStorage, StorageResult, check_quota, entry_size};
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// Map-backed storage with an optional byte quota.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Unlimited storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes pushing usage above `quota` bytes
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            quota: Some(quota),
        }
    }

    /// Pre-populated storage, e.g. a copy written by an older release
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Mutex::new(map),
            quota: None,
        }
    }

    pub fn quota(&self) -> Option<usize> {
        self.quota
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock();
        let total: usize = entries.iter().map(|(k, v)| entry_size(k, v)).sum();
        let old = entries.get(key).map(|v| entry_size(key, v)).unwrap_or(0);
        check_quota(self.quota, key, value, total, old)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.entries.lock().clear();
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.entries.lock().keys().cloned().collect())
    }

    fn usage_bytes(&self) -> StorageResult<usize> {
        Ok(self
            .entries
            .lock()
            .iter()
            .map(|(k, v)| entry_size(k, v))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("a").unwrap(), None);
        storage.set("a", "1").unwrap();
        storage.set("a", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("2"));
        storage.remove("a").unwrap();
        storage.remove("a").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_quota_keeps_previous_value() {
        let storage = MemoryStorage::with_quota(16);
        storage.set("hero", "small").unwrap();
        let err = storage.set("hero", &"x".repeat(64)).unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(storage.get("hero").unwrap().as_deref(), Some("small"));
        assert_eq!(storage.usage_bytes().unwrap(), 9);
    }

    #[test]
    fn test_clear_and_keys() {
        let storage = MemoryStorage::with_entries([("b", "2"), ("a", "1")]);
        assert_eq!(storage.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
        storage.clear().unwrap();
        assert_eq!(storage.len(), 0);
    }
}
