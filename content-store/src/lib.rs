//! QE.SPACE content store
//!
//! Site content and lead records for the QE.SPACE marketing site, persisted
//! collection by collection in a quota-bound key-value store.
//!
//! # 模块结构
//!
//! ```text
//! content_store
//! ├── core      - ContentStore, collections, config, observer
//! ├── storage   - DurableStorage: memory / redb backends
//! ├── seed      - built-in default content
//! ├── auth      - credential verifiers, admin session gate
//! ├── editing   - admin panel helpers (full-value builders for replace_*)
//! ├── leads     - lead filtering and CSV export
//! ├── stats     - dashboard numbers
//! └── utils     - logging, validation
//! ```
//!
//! # Example
//!
//! ```
//! use content_store::core::{ContentStore, NoopObserver};
//! use content_store::storage::MemoryStorage;
//! use shared::models::{LeadSource, LeadSubmission};
//! use std::sync::Arc;
//!
//! let store = ContentStore::open(Arc::new(MemoryStorage::new()), Arc::new(NoopObserver));
//! let lead = store
//!     .add_lead(LeadSubmission::new("张先生", "13800138000", LeadSource::ContactPage))
//!     .unwrap();
//! assert_eq!(store.leads()[0].id, lead.id);
//! ```

pub mod auth;
pub mod core;
pub mod editing;
pub mod leads;
pub mod seed;
pub mod stats;
pub mod storage;
pub mod utils;

pub use crate::core::{Collection, Collections, Config, ContentStore, PersistStatus, StoreObserver};
pub use stats::DashboardStats;
pub use storage::{DurableStorage, MemoryStorage, RedbStorage, StorageError};
