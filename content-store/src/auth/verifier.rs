//! 凭证校验
//!
//! The session gate never compares passwords itself; it asks a
//! [`CredentialVerifier`]. Swapping plaintext for argon2 touches nothing else.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use shared::error::{AppError, AppResult};

pub trait CredentialVerifier: Send + Sync {
    /// Does `supplied` match the `stored` credential of an admin record?
    fn verify(&self, supplied: &str, stored: &str) -> bool;

    /// Turn a new password into the form kept in the admin record
    fn prepare(&self, password: &str) -> AppResult<String>;

    fn name(&self) -> &'static str;
}

/// 明文比对 (浏览器站点的原始行为，仅作本地便利门槛)
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        supplied == stored
    }

    fn prepare(&self, password: &str) -> AppResult<String> {
        Ok(password.to_string())
    }

    fn name(&self) -> &'static str {
        "plaintext"
    }
}

/// Argon2 PHC 哈希。未哈希的旧记录按明文比对，便于平滑迁移。
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Verifier;

impl Argon2Verifier {
    fn is_hash(stored: &str) -> bool {
        stored.starts_with("$argon2")
    }
}

impl CredentialVerifier for Argon2Verifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        if !Self::is_hash(stored) {
            return supplied == stored;
        }
        match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default()
                .verify_password(supplied.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is malformed");
                false
            }
        }
    }

    fn prepare(&self, password: &str) -> AppResult<String> {
        hash_password(password)
    }

    fn name(&self) -> &'static str {
        "argon2"
    }
}

/// 使用 Argon2 哈希密码
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext() {
        let v = PlaintextVerifier;
        assert!(v.verify("jxkj123456", "jxkj123456"));
        assert!(!v.verify("jxkj12345", "jxkj123456"));
        assert_eq!(v.prepare("abc").unwrap(), "abc");
    }

    #[test]
    fn test_argon2_hash_roundtrip() {
        let v = Argon2Verifier;
        let stored = v.prepare("s3cret").unwrap();
        assert!(stored.starts_with("$argon2"));
        assert_ne!(stored, "s3cret");
        assert!(v.verify("s3cret", &stored));
        assert!(!v.verify("wrong", &stored));
    }

    #[test]
    fn test_argon2_accepts_legacy_plaintext() {
        let v = Argon2Verifier;
        assert!(v.verify("jxkj123456", "jxkj123456"));
        assert!(!v.verify("x", "jxkj123456"));
        assert!(!v.verify("x", "$argon2id$garbage"));
    }
}
