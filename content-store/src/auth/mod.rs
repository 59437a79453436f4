//! 管理员认证 - 凭证校验与会话门槛

mod session;
mod verifier;

pub use session::{SessionCredentials, SessionGate};
pub use verifier::{Argon2Verifier, CredentialVerifier, PlaintextVerifier, hash_password};

use crate::core::AuthMode;
use std::sync::Arc;

/// Verifier for the configured auth mode
pub fn verifier_for(mode: AuthMode) -> Arc<dyn CredentialVerifier> {
    match mode {
        AuthMode::Plaintext => Arc::new(PlaintextVerifier),
        AuthMode::Argon2 => Arc::new(Argon2Verifier),
    }
}
