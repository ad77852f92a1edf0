//! Credential ownership for the session subsystem.
//!
//! # Design
//! - Exactly one opaque bearer token is authoritative per browser session.
//! - Stores are injectable so tests substitute an in-memory fake for the
//!   browser-backed one.
//! - Clearing is the only mutation besides replacement and is idempotent.

use std::cell::RefCell;

/// Fixed persistent-storage key holding the bearer credential.
pub const CREDENTIAL_KEY: &str = "cuadre.auth.token";

/// Owner of the single bearer credential.
pub trait CredentialStore {
    /// Current credential, if one is stored and non-blank.
    fn get(&self) -> Option<String>;
    /// Replace the stored credential.
    fn set(&self, token: &str);
    /// Remove the stored credential. Idempotent.
    fn clear(&self);
}

/// Treat blank or whitespace-only stored values as absent.
#[must_use]
pub fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

/// In-memory credential store used by tests and native builds.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RefCell<Option<String>>,
}

impl MemoryCredentialStore {
    /// Empty store (no credential).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        normalize_token(self.token.borrow().clone())
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::{CredentialStore, MemoryCredentialStore, normalize_token};

    #[test]
    fn blank_tokens_read_as_absent() {
        assert_eq!(normalize_token(None), None);
        assert_eq!(normalize_token(Some(String::new())), None);
        assert_eq!(normalize_token(Some("   ".to_string())), None);
        assert_eq!(
            normalize_token(Some("tok".to_string())),
            Some("tok".to_string())
        );

        let store = MemoryCredentialStore::with_token("  ");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_then_clear_round_trip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(), None);
        store.set("bearer-token");
        assert_eq!(store.get(), Some("bearer-token".to_string()));
        store.clear();
        assert_eq!(store.get(), None);
        // Clearing twice is a no-op, not an error.
        store.clear();
        assert_eq!(store.get(), None);
    }
}
