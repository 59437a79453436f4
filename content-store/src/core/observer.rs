//! Store → host notifications
//!
//! The store never talks to a UI directly. Whatever hosts it (admin CLI,
//! a desktop shell, tests) implements [`StoreObserver`] and decides how to
//! surface the notice.

use super::collection::Collection;
use parking_lot::Mutex;

/// Blocking notice shown when a change could not be saved durably
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistNotice {
    pub collection: Collection,
    pub key: &'static str,
    /// What happened
    pub cause: String,
    /// What the user can do about it
    pub remedy: String,
}

impl PersistNotice {
    /// Notice for a write rejected by the storage quota
    pub fn quota_exceeded(collection: Collection, required: usize, limit: usize) -> Self {
        Self {
            collection,
            key: collection.key(),
            cause: format!(
                "保存失败！本地存储空间已满 (Storage Quota Exceeded): 需要 {required} 字节，上限 {limit} 字节。"
            ),
            remedy: "您上传的图片或数据量过大。请压缩图片或改用外部图片链接，\
                     大量高清图片请接入真正的后端数据库/对象存储。"
                .to_string(),
        }
    }
}

impl std::fmt::Display for PersistNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}\n{}", self.collection, self.cause, self.remedy)
    }
}

pub trait StoreObserver: Send + Sync {
    /// A change is kept in memory but was not saved because storage is full.
    /// Called synchronously, before the mutating call returns.
    fn persist_failed(&self, notice: &PersistNotice);

    /// `reset_all` finished; the host should rebuild its view from scratch
    fn reload_requested(&self);
}

/// Ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StoreObserver for NoopObserver {
    fn persist_failed(&self, _notice: &PersistNotice) {}

    fn reload_requested(&self) {}
}

/// Writes notices to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl StoreObserver for TracingObserver {
    fn persist_failed(&self, notice: &PersistNotice) {
        tracing::warn!(
            collection = %notice.collection,
            key = notice.key,
            "{} {}",
            notice.cause,
            notice.remedy
        );
    }

    fn reload_requested(&self) {
        tracing::info!("Content reset, reload requested");
    }
}

/// Records every notification; handy for tests and previews
#[derive(Debug, Default)]
pub struct RecordingObserver {
    notices: Mutex<Vec<PersistNotice>>,
    reloads: Mutex<usize>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<PersistNotice> {
        self.notices.lock().clone()
    }

    pub fn reload_count(&self) -> usize {
        *self.reloads.lock()
    }
}

impl StoreObserver for RecordingObserver {
    fn persist_failed(&self, notice: &PersistNotice) {
        self.notices.lock().push(notice.clone());
    }

    fn reload_requested(&self) {
        *self.reloads.lock() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_notice_text() {
        let notice = PersistNotice::quota_exceeded(Collection::HeroSlides, 6_000_000, 5_242_880);
        assert_eq!(notice.key, "qespace_hero");
        assert!(notice.cause.contains("5242880"));
        assert!(notice.to_string().starts_with("[hero]"));
    }

    #[test]
    fn test_recording_observer() {
        let observer = RecordingObserver::new();
        observer.persist_failed(&PersistNotice::quota_exceeded(Collection::Leads, 10, 5));
        observer.reload_requested();
        assert_eq!(observer.notices().len(), 1);
        assert_eq!(observer.reload_count(), 1);
    }
}
