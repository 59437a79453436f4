//! Admin session gate
//!
//! A local convenience gate in front of the admin operations, not a security
//! boundary: the remembered session holds the admin's phone and stored
//! credential in plain storage, and anyone with the storage file can edit the
//! admin collection directly.
//!
//! # 流程
//!
//! ```text
//! restore() ─► read qespace_admin_session ─► still matches an admin? ─┬─ yes: logged in
//!                                                                     └─ no: remove session
//! login()   ─► verifier.verify ─► lastLogin = now ─► save session
//! ```

use super::verifier::CredentialVerifier;
use crate::core::{ContentStore, PersistStatus, SESSION_KEY};
use crate::storage::DurableStorage;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{AdminRole, AdminUser, AdminUserDraft, MASTER_ADMIN_ID};
use shared::util::{now_utc, unique_prefixed_id};
use std::sync::Arc;

/// Remembered login (`{phone, password}`), password as stored in the admin record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredentials {
    pub phone: String,
    pub password: String,
}

impl SessionCredentials {
    fn of(user: &AdminUser) -> Self {
        Self {
            phone: user.phone.clone(),
            password: user.password.clone(),
        }
    }

    /// Still the same account with the same credential?
    fn matches(&self, user: &AdminUser) -> bool {
        user.phone == self.phone && user.password == self.password
    }
}

pub struct SessionGate {
    store: Arc<ContentStore>,
    storage: Arc<dyn DurableStorage>,
    verifier: Arc<dyn CredentialVerifier>,
    current: RwLock<Option<AdminUser>>,
}

impl std::fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGate")
            .field("verifier", &self.verifier.name())
            .field("current", &self.current.read().as_ref().map(|u| u.id.clone()))
            .finish()
    }
}

impl SessionGate {
    /// Build the gate and re-check any remembered session against the
    /// current admin collection. Stale or unreadable sessions are removed.
    pub fn restore(
        store: Arc<ContentStore>,
        storage: Arc<dyn DurableStorage>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        let gate = Self {
            store,
            storage,
            verifier,
            current: RwLock::new(None),
        };

        if let Some(credentials) = gate.load_session() {
            match gate.find_matching(&credentials) {
                Some(user) => {
                    tracing::info!(admin_id = %user.id, phone = %user.phone, "Admin session restored");
                    *gate.current.write() = Some(user);
                }
                None => {
                    tracing::info!(phone = %credentials.phone, "Remembered session no longer valid");
                    gate.forget_session();
                }
            }
        }
        gate
    }

    /// Currently logged-in admin
    pub fn current(&self) -> Option<AdminUser> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Log in by phone and password.
    ///
    /// Records `lastLogin` on the admin and remembers the session.
    pub fn login(&self, phone: &str, password: &str) -> AppResult<AdminUser> {
        let mut admins = self.store.admin_users();
        let Some(user) = admins
            .iter_mut()
            .find(|u| u.phone == phone && self.verifier.verify(password, &u.password))
        else {
            tracing::warn!(phone = %phone, "Admin login failed");
            return Err(AppError::invalid_credentials());
        };

        user.last_login = Some(now_utc());
        let user = user.clone();
        let status = self.store.replace_admin_users(admins);
        if !status.is_durable() {
            tracing::warn!(admin_id = %user.id, ?status, "Last login time not saved");
        }

        self.save_session(&SessionCredentials::of(&user));
        *self.current.write() = Some(user.clone());
        tracing::info!(admin_id = %user.id, phone = %user.phone, "Admin logged in");
        Ok(user)
    }

    /// Clear the session (memory and storage)
    pub fn logout(&self) {
        if let Some(user) = self.current.write().take() {
            tracing::info!(admin_id = %user.id, "Admin logged out");
        }
        self.forget_session();
    }

    /// Re-check the live session against the admin collection, e.g. after the
    /// collection was edited. Returns whether a session is still active.
    pub fn revalidate(&self) -> bool {
        let credentials = match self.current.read().as_ref() {
            Some(user) => SessionCredentials::of(user),
            None => return false,
        };
        match self.find_matching(&credentials) {
            Some(user) => {
                *self.current.write() = Some(user);
                true
            }
            None => {
                tracing::info!(phone = %credentials.phone, "Session invalidated");
                *self.current.write() = None;
                self.forget_session();
                false
            }
        }
    }

    /// Create an admin account (role `admin` only).
    pub fn add_admin(&self, draft: AdminUserDraft) -> AppResult<AdminUser> {
        self.require_session()?;

        validate_required_text(&draft.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&draft.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&draft.password, "password", MAX_PASSWORD_LEN)?;
        if draft.role == AdminRole::Master {
            return Err(AppError::with_message(
                ErrorCode::CannotModifyMaster,
                "Only one master account may exist",
            ));
        }

        let mut admins = self.store.admin_users();
        if admins.iter().any(|a| a.phone == draft.phone) {
            return Err(
                AppError::with_message(ErrorCode::AdminPhoneExists, "该手机号已存在")
                    .with_detail("phone", draft.phone),
            );
        }

        let id = unique_prefixed_id("admin", |candidate| admins.iter().any(|a| a.id == candidate));
        let user = AdminUser {
            id,
            name: draft.name,
            phone: draft.phone,
            password: self.verifier.prepare(&draft.password)?,
            role: AdminRole::Admin,
            created_at: now_utc(),
            last_login: None,
        };
        admins.push(user.clone());
        self.store.replace_admin_users(admins);

        tracing::info!(admin_id = %user.id, phone = %user.phone, "Admin account created");
        Ok(user)
    }

    /// Delete an admin account. The master account and the account of the
    /// current session are protected.
    pub fn delete_admin(&self, id: &str) -> AppResult<PersistStatus> {
        let current = self.require_session()?;

        if id == MASTER_ADMIN_ID {
            return Err(AppError::with_message(
                ErrorCode::CannotDeleteMaster,
                "超级管理员账号不可删除",
            ));
        }
        if id == current.id {
            return Err(AppError::with_message(
                ErrorCode::CannotDeleteSelf,
                "不能删除当前登录账号",
            ));
        }

        let mut admins = self.store.admin_users();
        let before = admins.len();
        admins.retain(|a| a.id != id);
        if admins.len() == before {
            return Err(AppError::with_message(
                ErrorCode::AdminNotFound,
                format!("Admin {id} not found"),
            )
            .with_detail("id", id));
        }

        let status = self.store.replace_admin_users(admins);
        tracing::info!(admin_id = %id, "Admin account deleted");
        Ok(status)
    }

    fn require_session(&self) -> AppResult<AdminUser> {
        self.current().ok_or_else(AppError::not_authenticated)
    }

    fn find_matching(&self, credentials: &SessionCredentials) -> Option<AdminUser> {
        self.store
            .admin_users()
            .into_iter()
            .find(|u| credentials.matches(u))
    }

    fn load_session(&self) -> Option<SessionCredentials> {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key = SESSION_KEY, error = %e, "Failed to read session");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(credentials) => Some(credentials),
            Err(e) => {
                tracing::warn!(key = SESSION_KEY, error = %e, "Malformed session, discarding");
                self.forget_session();
                None
            }
        }
    }

    // 会话持久化是尽力而为的，失败只记录日志
    fn save_session(&self, credentials: &SessionCredentials) {
        let result = serde_json::to_string(credentials)
            .map_err(crate::storage::StorageError::from)
            .and_then(|json| self.storage.set(SESSION_KEY, &json));
        if let Err(e) = result {
            tracing::warn!(key = SESSION_KEY, error = %e, "Failed to remember session");
        }
    }

    fn forget_session(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            tracing::warn!(key = SESSION_KEY, error = %e, "Failed to remove session");
        }
    }
}
