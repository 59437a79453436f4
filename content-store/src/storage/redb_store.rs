//! redb-based storage backend

use super::{DurableStorage, StorageResult, check_quota, entry_size};
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// Site content table: key = storage key (`qespace_*`), value = JSON text
const CONTENT_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Single-file storage shared by the admin CLI and anything embedding the store
#[derive(Clone)]
pub struct RedbStorage {
    db: Arc<Database>,
    quota: Option<usize>,
}

impl std::fmt::Debug for RedbStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStorage")
            .field("quota", &self.quota)
            .finish_non_exhaustive()
    }
}

impl RedbStorage {
    /// Open or create database. `quota` of `None` means unlimited.
    pub fn open(path: impl AsRef<Path>, quota: Option<usize>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path)?;
        Self::init(db, quota)
    }

    /// Open in-memory database
    pub fn open_in_memory(quota: Option<usize>) -> StorageResult<Self> {
        let db =
            Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db, quota)
    }

    fn init(db: Database, quota: Option<usize>) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CONTENT_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(db),
            quota,
        })
    }

    pub fn quota(&self) -> Option<usize> {
        self.quota
    }

    /// Number of stored keys
    pub fn len(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONTENT_TABLE)?;
        Ok(table.len()?)
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl DurableStorage for RedbStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONTENT_TABLE)?;

        match table.get(key)? {
            Some(guard) => Ok(Some(guard.value().to_string())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(CONTENT_TABLE)?;

            if self.quota.is_some() {
                let mut total = 0usize;
                let mut old = 0usize;
                for result in table.iter()? {
                    let (k, v) = result?;
                    let size = entry_size(k.value(), v.value());
                    if k.value() == key {
                        old = size;
                    }
                    total += size;
                }
                // dropping the txn aborts it, the old value stays
                check_quota(self.quota, key, value, total, old)?;
            }

            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(CONTENT_TABLE)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(CONTENT_TABLE)?;
            let mut keys = Vec::new();
            for result in table.iter()? {
                let (k, _) = result?;
                keys.push(k.value().to_string());
            }
            for key in &keys {
                table.remove(key.as_str())?;
            }
        }
        txn.commit()?;
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONTENT_TABLE)?;

        let mut keys = Vec::new();
        for result in table.iter()? {
            let (k, _) = result?;
            keys.push(k.value().to_string());
        }
        Ok(keys)
    }

    fn usage_bytes(&self) -> StorageResult<usize> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONTENT_TABLE)?;

        let mut total = 0;
        for result in table.iter()? {
            let (k, v) = result?;
            total += entry_size(k.value(), v.value());
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crud() {
        let storage = RedbStorage::open_in_memory(None).unwrap();
        assert!(storage.is_empty().unwrap());

        storage.set("qespace_hero", "[]").unwrap();
        storage.set("qespace_leads", "[1]").unwrap();
        assert_eq!(storage.get("qespace_hero").unwrap().as_deref(), Some("[]"));
        assert_eq!(
            storage.keys().unwrap(),
            vec!["qespace_hero".to_string(), "qespace_leads".to_string()]
        );

        storage.remove("qespace_hero").unwrap();
        assert_eq!(storage.get("qespace_hero").unwrap(), None);
        assert_eq!(storage.len().unwrap(), 1);

        storage.clear().unwrap();
        assert!(storage.is_empty().unwrap());
    }

    #[test]
    fn test_quota_rejects_and_keeps_old_value() {
        let storage = RedbStorage::open_in_memory(Some(32)).unwrap();
        storage.set("k", "v1").unwrap();

        let err = storage.set("k", &"x".repeat(40)).unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v1"));
        assert_eq!(storage.usage_bytes().unwrap(), 3);
    }

    #[test]
    fn test_file_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("content.redb");
        {
            let storage = RedbStorage::open(&path, None).unwrap();
            storage.set("qespace_config", "{}").unwrap();
        }
        let storage = RedbStorage::open(&path, None).unwrap();
        assert_eq!(storage.get("qespace_config").unwrap().as_deref(), Some("{}"));
    }
}
