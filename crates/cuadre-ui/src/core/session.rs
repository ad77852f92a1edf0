//! Identity resolution, 401 handling, and logout over an injected transport.
//!
//! # Design
//! - The transport is a closure returning a future, so every behavior here
//!   (short-circuits, clearing, ordering) tests natively without a browser.
//! - The resolver is a predicate, not a reporter: every failure collapses to
//!   `None` and the caller gets a binary answer.

use crate::core::credentials::CredentialStore;
use crate::core::gateway::ApiError;
use crate::core::guard::{NavTarget, is_login_path};
use cuadre_api_models::Identity;
use std::future::Future;

/// Resolve the stored credential into a verified identity.
///
/// Without a credential this returns `None` immediately and never invokes the
/// transport, so an unauthenticated probe cannot trigger a redirect loop. A
/// 401 clears the credential but does not navigate; redirection belongs to the
/// guard that asked.
pub async fn resolve_identity<F, Fut>(store: &dyn CredentialStore, fetch: F) -> Option<Identity>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Identity, ApiError>>,
{
    let token = store.get()?;
    match fetch(token).await {
        Ok(identity) => Some(identity),
        Err(ApiError::Unauthenticated) => {
            store.clear();
            None
        }
        Err(ApiError::Failed(_)) => None,
    }
}

/// React to a 401 observed by the gateway: clear the credential and decide
/// whether a whole-app redirect to login is required.
///
/// Already sitting on a login path means no redirect; clearing still happens.
pub fn handle_unauthenticated(
    store: &dyn CredentialStore,
    current_path: &str,
) -> Option<NavTarget> {
    store.clear();
    (!is_login_path(current_path)).then_some(NavTarget::Login)
}

/// Best-effort logout.
///
/// The remote invalidation is attempted first so it still carries the
/// credential; its outcome is discarded. Local clearing and the returned
/// navigation target are unconditional.
pub async fn perform_logout<F, Fut>(store: &dyn CredentialStore, invalidate: F) -> NavTarget
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if let Some(token) = store.get() {
        let _ = invalidate(token).await;
    }
    store.clear();
    NavTarget::Login
}

#[cfg(test)]
mod tests {
    use super::{handle_unauthenticated, perform_logout, resolve_identity};
    use crate::core::credentials::{CredentialStore, MemoryCredentialStore};
    use crate::core::gateway::ApiError;
    use crate::core::guard::NavTarget;
    use cuadre_api_models::Identity;
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Store wrapper counting `clear` calls.
    struct CountingStore {
        inner: MemoryCredentialStore,
        clears: Cell<u32>,
    }

    impl CountingStore {
        fn with_token(token: &str) -> Self {
            Self {
                inner: MemoryCredentialStore::with_token(token),
                clears: Cell::new(0),
            }
        }
    }

    impl CredentialStore for CountingStore {
        fn get(&self) -> Option<String> {
            self.inner.get()
        }

        fn set(&self, token: &str) {
            self.inner.set(token);
        }

        fn clear(&self) {
            self.clears.set(self.clears.get() + 1);
            self.inner.clear();
        }
    }

    fn sample_identity() -> Identity {
        Identity {
            user_id: 4,
            client_id: Some(2),
            profile_id: 1,
            email: "contadora@acme.co".to_string(),
            client: None,
        }
    }

    #[test]
    fn resolver_skips_network_without_credential() {
        let store = MemoryCredentialStore::new();
        let called = Cell::new(false);
        let resolved = block_on(resolve_identity(&store, |_token| {
            called.set(true);
            async { Ok(sample_identity()) }
        }));
        assert_eq!(resolved, None);
        assert!(!called.get(), "transport must not run without a credential");
    }

    #[test]
    fn resolver_returns_identity_and_passes_token() {
        let store = MemoryCredentialStore::with_token("tok-9");
        let seen = Cell::new(false);
        let resolved = block_on(resolve_identity(&store, |token| {
            assert_eq!(token, "tok-9");
            seen.set(true);
            async { Ok(sample_identity()) }
        }));
        assert_eq!(resolved, Some(sample_identity()));
        assert!(seen.get());
        assert_eq!(store.get(), Some("tok-9".to_string()));
    }

    #[test]
    fn resolver_clears_once_on_rejected_credential() {
        let store = CountingStore::with_token("stale");
        let resolved = block_on(resolve_identity(&store, |_token| async {
            Err(ApiError::Unauthenticated)
        }));
        assert_eq!(resolved, None);
        assert_eq!(store.clears.get(), 1);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn resolver_swallows_transport_failures_without_clearing() {
        let store = CountingStore::with_token("tok");
        let resolved = block_on(resolve_identity(&store, |_token| async {
            Err(ApiError::Failed("network unreachable".to_string()))
        }));
        assert_eq!(resolved, None);
        assert_eq!(store.clears.get(), 0);
        assert_eq!(store.get(), Some("tok".to_string()));
    }

    #[test]
    fn unauthenticated_clears_and_redirects_off_login() {
        let store = CountingStore::with_token("rejected");
        let redirect = handle_unauthenticated(&store, "/dashboard/admin/clients");
        assert_eq!(redirect, Some(NavTarget::Login));
        assert_eq!(store.clears.get(), 1);
    }

    #[test]
    fn unauthenticated_on_login_clears_without_redirect() {
        let store = CountingStore::with_token("rejected");
        let redirect = handle_unauthenticated(&store, "/login");
        assert_eq!(redirect, None);
        assert_eq!(store.clears.get(), 1);
    }

    #[test]
    fn logout_clears_even_when_invalidation_fails() {
        let store = MemoryCredentialStore::with_token("tok");
        let target = block_on(perform_logout(&store, |_token| async {
            Err(ApiError::Failed("network unreachable".to_string()))
        }));
        assert_eq!(target, NavTarget::Login);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn logout_invalidates_before_clearing() {
        let store = MemoryCredentialStore::with_token("tok-live");
        let carried = Cell::new(false);
        let target = block_on(perform_logout(&store, |token| {
            // The remote call must still carry the credential.
            assert_eq!(token, "tok-live");
            carried.set(true);
            async { Ok(()) }
        }));
        assert_eq!(target, NavTarget::Login);
        assert!(carried.get());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn logout_without_credential_still_lands_on_login() {
        let store = MemoryCredentialStore::new();
        let called = Cell::new(false);
        let target = block_on(perform_logout(&store, |_token| {
            called.set(true);
            async { Ok(()) }
        }));
        assert_eq!(target, NavTarget::Login);
        assert!(!called.get(), "nothing to invalidate without a credential");
    }
}
