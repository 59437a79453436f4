//! Admin User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Id of the seeded super administrator. This record can never be deleted.
pub const MASTER_ADMIN_ID: &str = "master";

/// Admin account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Master,
    #[default]
    Admin,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Master => "master",
            AdminRole::Admin => "admin",
        }
    }
}

/// Admin panel account
///
/// `password` holds whatever the credential verifier understands: plaintext
/// for records written by the original site, or an argon2 PHC string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    /// Login name, unique across all admins
    pub phone: String,
    pub password: String,
    #[serde(default)]
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl AdminUser {
    pub fn is_master(&self) -> bool {
        self.id == MASTER_ADMIN_ID
    }
}

impl std::fmt::Debug for AdminUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("password", &"***")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .field("last_login", &self.last_login)
            .finish()
    }
}

/// Create admin payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserDraft {
    pub name: String,
    pub phone: String,
    pub password: String,
    #[serde(default)]
    pub role: AdminRole,
}
