//! HTTP gateway: the single path every authenticated call flows through.
//!
//! # Design
//! - The credential is read once per call through [`plan_request`]; responses
//!   are classified by the pure [`classify_status`] table.
//! - The 401 arm of [`ApiClient::send`] is the only code path allowed to
//!   clear the credential and force a whole-app navigation as a side effect
//!   of a read.
//! - Probe calls (`whoami`, `invalidate_session`) classify without side
//!   effects; their reactions live in [`crate::core::session`].

use crate::core::credentials::CredentialStore;
use crate::core::gateway::{ApiError, ResponseClass, classify_status, plan_request};
use crate::core::session::{self, handle_unauthenticated};
use crate::services::storage::{current_path, force_navigation};
use cuadre_api_models::{
    ClientRecord, Identity, NewUser, PermissionList, ProfileRecord, ReconciliationReport,
    UserRecord,
};
use gloo::console;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use web_sys::FormData;

/// Token-bearing HTTP client for the Cuadre backend.
pub(crate) struct ApiClient {
    base_url: String,
    store: Rc<dyn CredentialStore>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>, store: Rc<dyn CredentialStore>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        }
    }

    /// The credential store this gateway reads on every call.
    pub(crate) fn store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(request: Request, token: Option<&str>) -> Request {
        match token {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    /// Send and classify with no local side effects (probe path).
    async fn send_classified(request: Request) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|err| {
            console::error!("gateway transport failure", err.to_string());
            ApiError::Failed(err.to_string())
        })?;
        let status = response.status();
        if (200..300).contains(&status) {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        match classify_status(status, &body) {
            ResponseClass::Ok => Ok(response),
            ResponseClass::Unauthenticated => Err(ApiError::Unauthenticated),
            ResponseClass::Failed(message) => Err(ApiError::Failed(message)),
        }
    }

    /// Send through the full gateway contract, reacting to a 401 by clearing
    /// the credential and forcing navigation to login (unless already there).
    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let result = Self::send_classified(request).await;
        if matches!(result, Err(ApiError::Unauthenticated)) {
            if let Some(target) = handle_unauthenticated(self.store.as_ref(), &current_path()) {
                force_navigation(target);
            }
        }
        result
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let plan = plan_request(self.store.as_ref(), false);
        let request = Self::bearer(Request::get(&self.url(path)), plan.bearer.as_deref());
        decode(self.send(request).await?).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let plan = plan_request(self.store.as_ref(), false);
        let request = Self::bearer(Request::post(&self.url(path)), plan.bearer.as_deref())
            .json(body)
            .map_err(|err| ApiError::Failed(err.to_string()))?;
        decode(self.send(request).await?).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let plan = plan_request(self.store.as_ref(), true);
        // Content-type stays unset so the transport supplies the multipart
        // boundary itself.
        let request = Self::bearer(
            Request::post(&self.url(path)).body(form),
            plan.bearer.as_deref(),
        );
        decode(self.send(request).await?).await
    }

    /// Identity probe used by the resolver; classification only, no redirect.
    pub(crate) async fn whoami(&self, token: String) -> Result<Identity, ApiError> {
        let request = Self::bearer(Request::get(&self.url("/auth/whoami")), Some(token.as_str()));
        decode(Self::send_classified(request).await?).await
    }

    /// Session invalidation probe used by logout; the response is discarded.
    pub(crate) async fn invalidate_session(&self, token: String) -> Result<(), ApiError> {
        let request = Self::bearer(Request::post(&self.url("/auth/logout")), Some(token.as_str()));
        Self::send_classified(request).await.map(|_| ())
    }

    pub(crate) async fn fetch_permissions(&self) -> Result<PermissionList, ApiError> {
        self.get_json("/api/mis_permisos").await
    }

    pub(crate) async fn fetch_clients(&self) -> Result<Vec<ClientRecord>, ApiError> {
        self.get_json("/api/clientes").await
    }

    pub(crate) async fn fetch_profiles(&self) -> Result<Vec<ProfileRecord>, ApiError> {
        self.get_json("/api/perfiles").await
    }

    pub(crate) async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.get_json("/api/usuarios").await
    }

    pub(crate) async fn create_user(&self, user: &NewUser) -> Result<UserRecord, ApiError> {
        self.post_json("/api/usuarios", user).await
    }

    /// Upload an invoice file for Siigo reconciliation.
    pub(crate) async fn upload_reconciliation(
        &self,
        file: &web_sys::File,
    ) -> Result<ReconciliationReport, ApiError> {
        let form = FormData::new().map_err(|_| ApiError::Failed("form-data failed".to_string()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|err| ApiError::Failed(format!("attach file: {err:?}")))?;
        self.post_multipart("/api/siigo/conciliacion", form).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|err| {
        console::error!("gateway payload decode failure", err.to_string());
        ApiError::Failed(err.to_string())
    })
}

/// Resolve the stored credential through the identity endpoint.
pub(crate) async fn resolve_identity(client: &ApiClient) -> Option<Identity> {
    session::resolve_identity(client.store(), |token| client.whoami(token)).await
}

/// Best-effort logout, then a forced whole-app navigation to login.
pub(crate) async fn logout(client: &ApiClient) {
    let target =
        session::perform_logout(client.store(), |token| client.invalidate_session(token)).await;
    force_navigation(target);
}
