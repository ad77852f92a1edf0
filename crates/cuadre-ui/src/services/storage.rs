//! Browser persistence and environment helpers.
//!
//! The single persisted value is the bearer credential under
//! [`CREDENTIAL_KEY`]; everything else is recomputed per mount.

use crate::core::credentials::{CREDENTIAL_KEY, CredentialStore, normalize_token};
use crate::core::guard::NavTarget;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// Credential store backed by the browser's localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserCredentialStore;

impl CredentialStore for BrowserCredentialStore {
    fn get(&self) -> Option<String> {
        normalize_token(LocalStorage::get::<String>(CREDENTIAL_KEY).ok())
    }

    fn set(&self, token: &str) {
        if let Err(err) = LocalStorage::set(CREDENTIAL_KEY, token) {
            console::error!("storage write failed", CREDENTIAL_KEY, err.to_string());
        }
    }

    fn clear(&self) {
        LocalStorage::delete(CREDENTIAL_KEY);
    }
}

/// API base address: compile-time environment override, else the local
/// development default.
pub(crate) fn api_base_url() -> String {
    option_env!("CUADRE_API_URL")
        .unwrap_or("http://localhost:8000")
        .trim_end_matches('/')
        .to_string()
}

/// Current window path, falling back to the root when unavailable.
pub(crate) fn current_path() -> String {
    window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

/// Force a whole-app navigation. Reserved for the gateway 401 path and
/// logout; guards navigate through the router instead.
pub(crate) fn force_navigation(target: NavTarget) {
    if window().location().set_href(target.path()).is_err() {
        console::error!("navigation failed", target.path());
    }
}
