//! Process-wide holder for the SendPulse access token.
//!
//! One value is shared by every request: the status proxy overwrites it after
//! each successful exchange, and the bearer check compares client tokens
//! against it. Reads and writes are atomic; exchanges are not serialized, so
//! concurrent refreshes race and the last writer wins.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

/// Shared, cloneable handle to the cached access token.
///
/// Starts unset. There is no expiry tracking and no revocation.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached token.
    pub async fn store(&self, token: String) {
        *self.inner.write().await = Some(token);
    }

    /// Current token, if an exchange has ever succeeded.
    pub async fn current(&self) -> Option<String> {
        self.inner.read().await.clone()
    }

    /// Check a client-presented token against the cached one.
    ///
    /// An unset or empty cached token never matches. Both sides are hashed
    /// so the comparison runs in constant time regardless of length.
    pub async fn matches(&self, presented: &str) -> bool {
        let guard = self.inner.read().await;
        let Some(cached) = guard.as_deref().filter(|t| !t.is_empty()) else {
            return false;
        };

        let expected = Sha256::digest(cached.as_bytes());
        let provided = Sha256::digest(presented.as_bytes());
        expected.as_slice().ct_eq(provided.as_slice()).into()
    }
}

/// Short, non-reversible token label for log events.
pub fn fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    hex::encode(&digest[..4])
}
