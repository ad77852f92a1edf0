//! Response classification and header planning for the request gateway.
//!
//! # Design
//! - Classification is pure and transport-free so it tests natively.
//! - Reacting to a 401 (clear credential, maybe navigate) is a separate step,
//!   [`crate::core::session::handle_unauthenticated`].
//! - Callers consume [`ApiError`], never raw status codes.

use crate::core::credentials::CredentialStore;
use cuadre_api_models::ApiMessage;
use thiserror::Error;

/// Outcome of one gateway call; the single taxonomy callers see.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseClass {
    /// 2xx: the caller may decode the payload.
    Ok,
    /// HTTP 401: the credential is absent, rejected, or expired.
    Unauthenticated,
    /// Any other non-success, carrying a human-readable message.
    Failed(String),
}

impl ResponseClass {
    /// Convert into a caller-facing result.
    ///
    /// # Errors
    /// Returns the matching [`ApiError`] for the non-success arms.
    pub fn into_result(self) -> Result<(), ApiError> {
        match self {
            Self::Ok => Ok(()),
            Self::Unauthenticated => Err(ApiError::Unauthenticated),
            Self::Failed(message) => Err(ApiError::Failed(message)),
        }
    }
}

/// Classify an HTTP status together with the raw response body text.
#[must_use]
pub fn classify_status(status: u16, body: &str) -> ResponseClass {
    if (200..300).contains(&status) {
        return ResponseClass::Ok;
    }
    if status == 401 {
        return ResponseClass::Unauthenticated;
    }
    ResponseClass::Failed(error_message(status, body))
}

/// Extract the backend's structured message, falling back to `HTTP <status>`.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .map(|msg| msg.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}

/// Classified gateway failure raised to callers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Credential missing, rejected, or expired; the 401 path has already
    /// cleared local state.
    #[error("sesión no válida")]
    Unauthenticated,
    /// Non-success beyond 401, or a transport-level fault.
    #[error("{0}")]
    Failed(String),
}

/// Header plan for one outbound call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestPlan {
    /// Bearer credential to attach, when one is stored.
    pub bearer: Option<String>,
    /// Whether to set a JSON content-type. False for multipart bodies, where
    /// the transport supplies the boundary-bearing header itself.
    pub json_body: bool,
}

/// Plan headers for a call: read the credential once, decide body encoding.
#[must_use]
pub fn plan_request(store: &dyn CredentialStore, multipart: bool) -> RequestPlan {
    RequestPlan {
        bearer: store.get(),
        json_body: !multipart,
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, ResponseClass, classify_status, plan_request};
    use crate::core::credentials::MemoryCredentialStore;

    #[test]
    fn success_statuses_classify_ok() {
        assert_eq!(classify_status(200, ""), ResponseClass::Ok);
        assert_eq!(classify_status(204, ""), ResponseClass::Ok);
    }

    #[test]
    fn unauthorized_classifies_unauthenticated() {
        assert_eq!(classify_status(401, ""), ResponseClass::Unauthenticated);
        // 403 is a generic failure: the session itself may still be valid.
        assert!(matches!(classify_status(403, ""), ResponseClass::Failed(_)));
    }

    #[test]
    fn failures_prefer_structured_message() {
        let class = classify_status(422, r#"{"message": "NIT duplicado"}"#);
        assert_eq!(class, ResponseClass::Failed("NIT duplicado".to_string()));
    }

    #[test]
    fn failures_fall_back_to_generic_message() {
        assert_eq!(
            classify_status(500, "<html>boom</html>"),
            ResponseClass::Failed("HTTP 500".to_string())
        );
        assert_eq!(
            classify_status(400, r#"{"message": "  "}"#),
            ResponseClass::Failed("HTTP 400".to_string())
        );
    }

    #[test]
    fn classification_converts_to_errors() {
        assert_eq!(ResponseClass::Ok.into_result(), Ok(()));
        assert_eq!(
            ResponseClass::Unauthenticated.into_result(),
            Err(ApiError::Unauthenticated)
        );
        assert_eq!(
            ResponseClass::Failed("x".to_string()).into_result(),
            Err(ApiError::Failed("x".to_string()))
        );
    }

    #[test]
    fn plan_attaches_bearer_and_picks_encoding() {
        let store = MemoryCredentialStore::with_token("tok-1");
        let json = plan_request(&store, false);
        assert_eq!(json.bearer.as_deref(), Some("tok-1"));
        assert!(json.json_body);

        let multipart = plan_request(&store, true);
        assert!(!multipart.json_body);

        let anonymous = plan_request(&MemoryCredentialStore::new(), false);
        assert_eq!(anonymous.bearer, None);
    }
}
