//! Durable key-value storage
//!
//! The content store only ever talks to [`DurableStorage`]; backends are
//! injected at construction.
//!
//! - [`MemoryStorage`] - in-process map, used by tests and previews
//! - [`RedbStorage`] - single redb file, used by the admin binary
//!
//! Both enforce an optional byte quota the same way a browser's local
//! storage does: the write that would push total usage over the limit fails
//! and the previous value stays in place.

mod memory;
mod redb_store;

pub use memory::MemoryStorage;
pub use redb_store::RedbStorage;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage quota exceeded writing '{key}': {required} bytes needed, limit {limit}")]
    QuotaExceeded {
        key: String,
        required: usize,
        limit: usize,
    },

    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Capacity failures are reported to the user; everything else is only logged.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StorageError::QuotaExceeded { .. })
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::QuotaExceeded {
                key,
                required,
                limit,
            } => AppError::with_message(
                ErrorCode::StorageFull,
                format!("Storage quota exceeded writing '{key}'"),
            )
            .with_detail("key", key)
            .with_detail("required", required)
            .with_detail("limit", limit),
            other => AppError::storage(other.to_string()),
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key to string value persistence, shared by every collection.
pub trait DurableStorage: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key; removing a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Remove every key in this storage namespace
    fn clear(&self) -> StorageResult<()>;

    /// All keys currently stored, sorted
    fn keys(&self) -> StorageResult<Vec<String>>;

    /// Bytes currently counted against the quota
    fn usage_bytes(&self) -> StorageResult<usize>;
}

/// Size of one entry as counted against the quota
pub(crate) fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

/// Check a pending write against the quota.
///
/// `current_total` is the usage including the old value of `key` (if any),
/// `old_entry` that old entry's size.
pub(crate) fn check_quota(
    quota: Option<usize>,
    key: &str,
    value: &str,
    current_total: usize,
    old_entry: usize,
) -> StorageResult<()> {
    let Some(limit) = quota else {
        return Ok(());
    };
    let required = current_total - old_entry + entry_size(key, value);
    if required > limit {
        return Err(StorageError::QuotaExceeded {
            key: key.to_string(),
            required,
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_quota_unlimited() {
        assert!(check_quota(None, "k", &"x".repeat(10_000), 0, 0).is_ok());
    }

    #[test]
    fn test_check_quota_replacing_value_frees_old_entry() {
        // existing "k" -> 8 bytes ("k" + 7), total 20
        assert!(check_quota(Some(20), "k", "abcdefg", 20, 8).is_ok());
        let err = check_quota(Some(20), "k", "abcdefgh", 20, 8).unwrap_err();
        assert!(err.is_quota_exceeded());
        match err {
            StorageError::QuotaExceeded { required, limit, .. } => {
                assert_eq!(required, 21);
                assert_eq!(limit, 20);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = check_quota(Some(4), "key", "value", 0, 0).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::StorageFull);
        let details = err.details.unwrap();
        assert_eq!(details.get("required").unwrap(), 8);
        assert_eq!(details.get("limit").unwrap(), 4);

        let err: AppError = StorageError::Unavailable("gone".into()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("gone"));
    }
}
