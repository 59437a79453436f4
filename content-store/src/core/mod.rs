//! 核心模块 - 内容库、集合定义、配置与通知

pub mod collection;
pub mod config;
pub mod observer;
pub mod store;

pub use collection::{Collection, SESSION_KEY};
pub use config::{AuthMode, Config};
pub use observer::{NoopObserver, PersistNotice, RecordingObserver, StoreObserver, TracingObserver};
pub use store::{Collections, ContentStore, PersistStatus, overlay_fields};
