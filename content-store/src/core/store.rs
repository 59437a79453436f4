//! Content Store
//!
//! Sole owner of the eight site collections. Each collection is loaded from
//! its own storage key when the store is opened and written back, alone,
//! after every mutation.
//!
//! # Lifecycle
//!
//! ```text
//! open() ─► load × 8 (fallback to seed per collection) ─► ready
//!              │
//!              └─ read only, nothing is written while loading
//!
//! replace_*/add_lead/... ─► mutate in memory ─► persist that collection
//!                                                  │
//!                                  quota full ─────┴─► keep memory, notify observer
//! ```

use super::collection::Collection;
use super::observer::{PersistNotice, StoreObserver};
use crate::seed;
use crate::storage::{DurableStorage, StorageError};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text, validate_text,
};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    AboutPageData, AdminUser, CustomPageData, HeroSlide, Lead, LeadStatus, LeadSubmission,
    ProductCategory, Scenario, SiteConfig,
};
use shared::util::{now_utc, unique_prefixed_id};
use std::sync::Arc;

/// Outcome of writing one collection back to storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistStatus {
    /// Written durably
    Saved,
    /// Nothing changed, nothing written
    Unchanged,
    /// Kept in memory only; storage is full and the observer was notified
    QuotaExceeded,
    /// Kept in memory only; the write failed for another reason (logged)
    Failed,
}

impl PersistStatus {
    pub fn is_durable(&self) -> bool {
        matches!(self, PersistStatus::Saved | PersistStatus::Unchanged)
    }
}

/// Current value of every collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collections {
    pub hero_slides: Vec<HeroSlide>,
    pub product_categories: Vec<ProductCategory>,
    pub scenarios: Vec<Scenario>,
    pub site_config: SiteConfig,
    pub leads: Vec<Lead>,
    pub about: AboutPageData,
    pub custom: CustomPageData,
    pub admin_users: Vec<AdminUser>,
}

impl Collections {
    /// Built-in defaults for every collection
    pub fn seeded() -> Self {
        Self {
            hero_slides: seed::hero_slides(),
            product_categories: seed::product_categories(),
            scenarios: seed::scenarios(),
            site_config: seed::site_config(),
            leads: seed::leads(),
            about: seed::about(),
            custom: seed::custom(),
            admin_users: seed::admin_users(),
        }
    }

    /// Serialized form of one collection, exactly as stored
    pub fn to_json(&self, collection: Collection) -> serde_json::Result<String> {
        match collection {
            Collection::HeroSlides => serde_json::to_string(&self.hero_slides),
            Collection::ProductCategories => serde_json::to_string(&self.product_categories),
            Collection::Scenarios => serde_json::to_string(&self.scenarios),
            Collection::SiteConfig => serde_json::to_string(&self.site_config),
            Collection::Leads => serde_json::to_string(&self.leads),
            Collection::About => serde_json::to_string(&self.about),
            Collection::Custom => serde_json::to_string(&self.custom),
            Collection::AdminUsers => serde_json::to_string(&self.admin_users),
        }
    }

    pub fn to_value(&self, collection: Collection) -> serde_json::Result<Value> {
        match collection {
            Collection::HeroSlides => serde_json::to_value(&self.hero_slides),
            Collection::ProductCategories => serde_json::to_value(&self.product_categories),
            Collection::Scenarios => serde_json::to_value(&self.scenarios),
            Collection::SiteConfig => serde_json::to_value(&self.site_config),
            Collection::Leads => serde_json::to_value(&self.leads),
            Collection::About => serde_json::to_value(&self.about),
            Collection::Custom => serde_json::to_value(&self.custom),
            Collection::AdminUsers => serde_json::to_value(&self.admin_users),
        }
    }
}

/// Field-level overlay of `loaded` onto `default`.
///
/// Top-level keys present in `loaded` replace the default's value wholesale
/// (no deep merge); keys only in `default` survive. A non-object `loaded`
/// leaves `default` untouched.
pub fn overlay_fields(default: Value, loaded: Value) -> Value {
    match (default, loaded) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                base.insert(key, value);
            }
            Value::Object(base)
        }
        (default, _) => default,
    }
}

/// Process-wide content authority
pub struct ContentStore {
    storage: Arc<dyn DurableStorage>,
    observer: Arc<dyn StoreObserver>,
    state: RwLock<Collections>,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore").finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Load every collection and return a ready store.
    ///
    /// Missing, unreadable or malformed copies fall back to the built-in
    /// default of that collection only; the failure is logged, never returned.
    pub fn open(storage: Arc<dyn DurableStorage>, observer: Arc<dyn StoreObserver>) -> Self {
        let state = load_all(storage.as_ref());
        tracing::info!(
            leads = state.leads.len(),
            admins = state.admin_users.len(),
            "Content store ready"
        );
        Self {
            storage,
            observer,
            state: RwLock::new(state),
        }
    }

    pub fn storage(&self) -> Arc<dyn DurableStorage> {
        self.storage.clone()
    }

    // ========== Reads ==========

    pub fn hero_slides(&self) -> Vec<HeroSlide> {
        self.state.read().hero_slides.clone()
    }

    pub fn product_categories(&self) -> Vec<ProductCategory> {
        self.state.read().product_categories.clone()
    }

    pub fn scenarios(&self) -> Vec<Scenario> {
        self.state.read().scenarios.clone()
    }

    pub fn site_config(&self) -> SiteConfig {
        self.state.read().site_config.clone()
    }

    pub fn leads(&self) -> Vec<Lead> {
        self.state.read().leads.clone()
    }

    pub fn about(&self) -> AboutPageData {
        self.state.read().about.clone()
    }

    pub fn custom(&self) -> CustomPageData {
        self.state.read().custom.clone()
    }

    pub fn admin_users(&self) -> Vec<AdminUser> {
        self.state.read().admin_users.clone()
    }

    /// All eight collections at once (one consistent read)
    pub fn snapshot(&self) -> Collections {
        self.state.read().clone()
    }

    /// JSON view of one collection
    pub fn collection_json(&self, collection: Collection) -> AppResult<Value> {
        Ok(self.state.read().to_value(collection)?)
    }

    /// Bytes currently used in durable storage
    pub fn usage_bytes(&self) -> AppResult<usize> {
        Ok(self.storage.usage_bytes()?)
    }

    // ========== Replace (total, not patch) ==========

    pub fn replace_hero_slides(&self, slides: Vec<HeroSlide>) -> PersistStatus {
        self.write(Collection::HeroSlides, |s| {
            s.hero_slides = slides;
            true
        })
    }

    pub fn replace_product_categories(&self, categories: Vec<ProductCategory>) -> PersistStatus {
        self.write(Collection::ProductCategories, |s| {
            s.product_categories = categories;
            true
        })
    }

    pub fn replace_scenarios(&self, scenarios: Vec<Scenario>) -> PersistStatus {
        self.write(Collection::Scenarios, |s| {
            s.scenarios = scenarios;
            true
        })
    }

    pub fn replace_site_config(&self, config: SiteConfig) -> PersistStatus {
        self.write(Collection::SiteConfig, |s| {
            s.site_config = config;
            true
        })
    }

    pub fn replace_leads(&self, leads: Vec<Lead>) -> PersistStatus {
        self.write(Collection::Leads, |s| {
            s.leads = leads;
            true
        })
    }

    pub fn replace_about(&self, about: AboutPageData) -> PersistStatus {
        self.write(Collection::About, |s| {
            s.about = about;
            true
        })
    }

    pub fn replace_custom(&self, custom: CustomPageData) -> PersistStatus {
        self.write(Collection::Custom, |s| {
            s.custom = custom;
            true
        })
    }

    pub fn replace_admin_users(&self, admins: Vec<AdminUser>) -> PersistStatus {
        self.write(Collection::AdminUsers, |s| {
            s.admin_users = admins;
            true
        })
    }

    // ========== Leads ==========

    /// Record a public form submission as a new lead (newest first).
    ///
    /// Name and phone are required by every public form. A storage failure
    /// does not fail the call: the lead is kept in memory and the observer
    /// decides how to tell the user.
    pub fn add_lead(&self, submission: LeadSubmission) -> AppResult<Lead> {
        validate_submission(&submission)?;

        let mut created = None;
        let status = self.write(Collection::Leads, |s| {
            let id = unique_prefixed_id("lead", |candidate| {
                s.leads.iter().any(|l| l.id == candidate)
            });
            let lead = submission.into_lead(id, now_utc());
            s.leads.insert(0, lead.clone());
            created = Some(lead);
            true
        });

        let lead = created.ok_or_else(|| AppError::internal("lead was not created"))?;
        tracing::info!(
            lead_id = %lead.id,
            source = %lead.source,
            persisted = ?status,
            "Lead recorded"
        );
        Ok(lead)
    }

    /// Set the status of one lead; unknown ids are a no-op.
    pub fn update_lead_status(&self, id: &str, status: LeadStatus) -> PersistStatus {
        self.write(Collection::Leads, |s| {
            match s.leads.iter_mut().find(|l| l.id == id) {
                Some(lead) => {
                    lead.status = status;
                    true
                }
                None => false,
            }
        })
    }

    /// Remove one lead, keeping the order of the rest; unknown ids are a no-op.
    pub fn delete_lead(&self, id: &str) -> PersistStatus {
        self.write(Collection::Leads, |s| {
            let before = s.leads.len();
            s.leads.retain(|l| l.id != id);
            s.leads.len() != before
        })
    }

    /// Look up one lead
    pub fn find_lead(&self, id: &str) -> AppResult<Lead> {
        self.state
            .read()
            .leads
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::LeadNotFound, format!("Lead {id} not found"))
                    .with_detail("id", id)
            })
    }

    // ========== Reset ==========

    /// Wipe all durable content (session included), go back to the seed data
    /// and ask the host to reload its view.
    pub fn reset_all(&self) -> AppResult<()> {
        {
            let mut state = self.state.write();
            self.storage.clear().map_err(|e| {
                tracing::error!(error = %e, "Failed to clear storage");
                AppError::from(e)
            })?;
            *state = Collections::seeded();
        }
        tracing::warn!("All content reset to defaults");
        self.observer.reload_requested();
        Ok(())
    }

    // ========== Internals ==========

    /// Mutate under the write lock and persist the touched collection before
    /// releasing it. `mutate` returns whether anything changed.
    fn write<F>(&self, collection: Collection, mutate: F) -> PersistStatus
    where
        F: FnOnce(&mut Collections) -> bool,
    {
        let mut state = self.state.write();
        if !mutate(&mut state) {
            return PersistStatus::Unchanged;
        }
        let result = state
            .to_json(collection)
            .map_err(StorageError::from)
            .and_then(|json| {
                self.storage
                    .set(collection.key(), &json)
                    .map(|()| json.len())
            });
        drop(state);

        // observer runs outside the lock so it may read the store
        self.report(collection, result)
    }

    fn report(&self, collection: Collection, result: Result<usize, StorageError>) -> PersistStatus {
        match result {
            Ok(bytes) => {
                tracing::debug!(collection = %collection, key = collection.key(), bytes, "Collection saved");
                PersistStatus::Saved
            }
            Err(StorageError::QuotaExceeded {
                required, limit, ..
            }) => {
                tracing::warn!(
                    collection = %collection,
                    key = collection.key(),
                    bytes = required,
                    limit,
                    "Storage quota exceeded, change kept in memory only"
                );
                let notice = PersistNotice::quota_exceeded(collection, required, limit);
                self.observer.persist_failed(&notice);
                PersistStatus::QuotaExceeded
            }
            Err(e) => {
                tracing::error!(collection = %collection, key = collection.key(), error = %e, "Failed to save collection");
                PersistStatus::Failed
            }
        }
    }
}

fn validate_submission(submission: &LeadSubmission) -> AppResult<()> {
    validate_required_text(&submission.name, "name", MAX_NAME_LEN)?;
    let phone = submission.phone.as_deref().unwrap_or_default();
    validate_required_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_text(&submission.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&submission.company, "company", MAX_NAME_LEN)?;
    validate_text(&submission.message, "message", MAX_NOTE_LEN)?;
    Ok(())
}

fn load_all(storage: &dyn DurableStorage) -> Collections {
    let mut state = Collections::seeded();

    if let Some(v) = load(storage, Collection::HeroSlides) {
        state.hero_slides = v;
    }
    if let Some(v) = load(storage, Collection::ProductCategories) {
        state.product_categories = v;
    }
    if let Some(v) = load(storage, Collection::Scenarios) {
        state.scenarios = v;
    }
    if let Some(v) = load(storage, Collection::SiteConfig) {
        state.site_config = v;
    }
    if let Some(v) = load(storage, Collection::Leads) {
        state.leads = v;
    }
    if let Some(v) = load_about(storage, &state.about) {
        state.about = v;
    }
    if let Some(v) = load(storage, Collection::Custom) {
        state.custom = v;
    }
    if let Some(v) = load(storage, Collection::AdminUsers) {
        state.admin_users = v;
    }

    state
}

fn read_raw(storage: &dyn DurableStorage, collection: Collection) -> Option<String> {
    match storage.get(collection.key()) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(collection = %collection, key = collection.key(), error = %e, "Failed to read collection, using default");
            None
        }
    }
}

fn load<T: DeserializeOwned>(storage: &dyn DurableStorage, collection: Collection) -> Option<T> {
    let raw = read_raw(storage, collection)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(collection = %collection, key = collection.key(), error = %e, "Malformed collection, using default");
            None
        }
    }
}

/// About page: stored copy overlaid onto the default
fn load_about(storage: &dyn DurableStorage, default: &AboutPageData) -> Option<AboutPageData> {
    let loaded: Value = load(storage, Collection::About)?;
    let merged = serde_json::to_value(default)
        .map(|base| overlay_fields(base, loaded))
        .and_then(serde_json::from_value);
    match merged {
        Ok(about) => Some(about),
        Err(e) => {
            tracing::warn!(collection = %Collection::About, error = %e, "Malformed about page, using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::observer::{NoopObserver, RecordingObserver};
    use crate::storage::MemoryStorage;
    use serde_json::json;
    use shared::models::LeadSource;

    fn open_with(storage: MemoryStorage) -> ContentStore {
        ContentStore::open(Arc::new(storage), Arc::new(NoopObserver))
    }

    #[test]
    fn test_overlay_fields_is_shallow() {
        let default = json!({ "a": 1, "nested": { "x": 1, "y": 2 } });
        let loaded = json!({ "nested": { "x": 9 }, "extra": true });
        let merged = overlay_fields(default, loaded);
        assert_eq!(merged, json!({ "a": 1, "nested": { "x": 9 }, "extra": true }));
    }

    #[test]
    fn test_overlay_fields_ignores_non_object() {
        let default = json!({ "a": 1 });
        assert_eq!(overlay_fields(default.clone(), json!([1, 2])), default);
        assert_eq!(overlay_fields(default.clone(), Value::Null), default);
    }

    #[test]
    fn test_open_does_not_write() {
        let storage = Arc::new(MemoryStorage::new());
        let _store = ContentStore::open(storage.clone(), Arc::new(NoopObserver));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_malformed_collection_falls_back_alone() {
        let storage = MemoryStorage::with_entries([
            ("qespace_hero", "{not json"),
            ("qespace_scenarios", "[]"),
        ]);
        let store = open_with(storage);
        assert_eq!(store.hero_slides(), seed::hero_slides());
        assert!(store.scenarios().is_empty());
    }

    #[test]
    fn test_about_missing_fields_come_from_default() {
        let storage = MemoryStorage::with_entries([(
            "qespace_about",
            r#"{ "timeline": [{ "year": "2030", "title": "t", "desc": "d" }] }"#,
        )]);
        let store = open_with(storage);
        let about = store.about();
        assert_eq!(about.timeline.len(), 1);
        assert_eq!(about.timeline[0].year, "2030");
        assert_eq!(about.locations, seed::about().locations);
        assert_eq!(about.hero_video_url, seed::about().hero_video_url);
    }

    #[test]
    fn test_about_null_overrides_default() {
        let storage = MemoryStorage::with_entries([(
            "qespace_about",
            r#"{ "heroVideoUrl": null, "vision": null }"#,
        )]);
        let about = open_with(storage).about();
        assert!(about.hero_video_url.is_none());
        assert!(about.vision.is_none());
        assert_eq!(about.mission, seed::about().mission);
    }

    #[test]
    fn test_add_lead_requires_phone() {
        let store = open_with(MemoryStorage::new());
        let mut submission = LeadSubmission::new("王女士", "", LeadSource::AboutPage);
        let err = store.add_lead(submission.clone()).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        submission.phone = None;
        assert!(store.add_lead(submission).is_err());
        assert_eq!(store.leads(), seed::leads());
    }

    #[test]
    fn test_lead_ids_unique_within_same_millisecond() {
        let store = open_with(MemoryStorage::new());
        let a = store
            .add_lead(LeadSubmission::new("A", "1", LeadSource::Footer))
            .unwrap();
        let b = store
            .add_lead(LeadSubmission::new("B", "2", LeadSource::Footer))
            .unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("lead-"));
        assert_eq!(store.leads()[0].id, b.id);
    }

    #[test]
    fn test_update_status_unknown_id_is_noop() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ContentStore::open(storage.clone(), Arc::new(NoopObserver));
        assert_eq!(
            store.update_lead_status("missing", LeadStatus::Closed),
            PersistStatus::Unchanged
        );
        assert!(storage.is_empty());

        assert_eq!(
            store.update_lead_status("1", LeadStatus::Closed),
            PersistStatus::Saved
        );
        assert_eq!(store.find_lead("1").unwrap().status, LeadStatus::Closed);
        assert_eq!(
            store.find_lead("nope").unwrap_err().code,
            ErrorCode::LeadNotFound
        );
    }

    #[test]
    fn test_quota_failure_keeps_memory_and_notifies() {
        let observer = Arc::new(RecordingObserver::new());
        let store = ContentStore::open(Arc::new(MemoryStorage::with_quota(64)), observer.clone());

        let mut slides = store.hero_slides();
        slides[0].image = "x".repeat(1024);
        let status = store.replace_hero_slides(slides.clone());

        assert_eq!(status, PersistStatus::QuotaExceeded);
        assert!(!status.is_durable());
        assert_eq!(store.hero_slides(), slides);
        let notices = observer.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].collection, Collection::HeroSlides);
    }
}
