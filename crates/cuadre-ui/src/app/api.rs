//! API client context for sharing a singleton gateway instance.
//!
//! # Design
//! - Create exactly one gateway per app boot; the credential store behind it
//!   is the single shared mutable resource of the session subsystem.

use crate::core::credentials::CredentialStore;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client context for UI components.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton gateway instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context with the configured base URL and store.
    pub(crate) fn new(base_url: impl Into<String>, store: Rc<dyn CredentialStore>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url, store)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
