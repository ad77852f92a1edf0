#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Cuadre back-office API.
//!
//! The backend speaks camelCase JSON; these types are the single place where
//! that wire contract is encoded, so the UI crate never hand-parses payloads.

use serde::{Deserialize, Serialize};

/// Profile identifier of the superadmin role.
pub const SUPERADMIN_PROFILE: i64 = 0;

/// Resolved session identity returned by `GET /auth/whoami`.
///
/// `profile_id == 0` denotes the superadmin role; any other value denotes a
/// client-scoped role. `client_id` may only be absent for the superadmin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Authenticated user id.
    pub user_id: i64,
    /// Owning client id, absent only for the superadmin role.
    pub client_id: Option<i64>,
    /// Profile (role) identifier.
    pub profile_id: i64,
    /// Account email address.
    pub email: String,
    /// Owning client record, when the session is client-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientSummary>,
}

impl Identity {
    /// Whether this identity carries the superadmin role.
    #[must_use]
    pub const fn is_superadmin(&self) -> bool {
        self.profile_id == SUPERADMIN_PROFILE
    }
}

/// Client record embedded in an [`Identity`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    /// Client id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Logo image URL, when the client uploaded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Client row for the admin clients table (`GET /api/clientes`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Client id.
    pub id: i64,
    /// Legal/display name.
    pub name: String,
    /// Colombian tax id (NIT), when registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nit: Option<String>,
    /// Logo image URL, when uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Whether the client is active.
    pub active: bool,
}

/// Profile row for the admin profiles table (`GET /api/perfiles`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Profile (role) identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// User row for the admin users table (`GET /api/usuarios`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// User id.
    pub id: i64,
    /// Account email address.
    pub email: String,
    /// Assigned profile (role) identifier.
    pub profile_id: i64,
    /// Owning client id, absent for superadmin accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
}

/// Payload to create a back-office user (`POST /api/usuarios`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Account email address.
    pub email: String,
    /// Profile (role) identifier to assign.
    pub profile_id: i64,
    /// Owning client id, absent for superadmin accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
}

/// Permission list returned by `GET /api/mis_permisos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionList {
    /// Permission codes granted to the session.
    pub permisos: Vec<String>,
}

/// Per-invoice outcome inside a [`ReconciliationReport`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationRow {
    /// Invoice number from the uploaded file.
    pub invoice_number: String,
    /// Matching Siigo document id, when one was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siigo_id: Option<String>,
    /// Invoice total as reported by the backend.
    pub total: f64,
    /// Match status label (`conciliada`, `pendiente`, ...).
    pub status: String,
}

/// Result of a Siigo reconciliation upload
/// (`POST /api/siigo/conciliacion`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationReport {
    /// Number of invoices read from the uploaded file.
    pub processed: u32,
    /// Number matched against Siigo documents.
    pub matched: u32,
    /// Number left unmatched.
    pub unmatched: u32,
    /// Per-invoice detail rows.
    pub rows: Vec<ReconciliationRow>,
}

/// Structured error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    /// Human-readable error message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::{ApiMessage, Identity, ReconciliationReport};

    #[test]
    fn identity_decodes_camel_case_with_client() {
        let payload = r#"{
            "userId": 7,
            "clientId": 3,
            "profileId": 2,
            "email": "contadora@acme.co",
            "client": {"id": 3, "name": "Acme SAS", "logoUrl": "/logos/acme.png"}
        }"#;
        let identity: Identity = serde_json::from_str(payload).expect("identity decodes");
        assert_eq!(identity.user_id, 7);
        assert_eq!(identity.client_id, Some(3));
        assert!(!identity.is_superadmin());
        let client = identity.client.expect("client present");
        assert_eq!(client.name, "Acme SAS");
        assert_eq!(client.logo_url.as_deref(), Some("/logos/acme.png"));
    }

    #[test]
    fn identity_decodes_superadmin_without_client() {
        let payload = r#"{"userId": 1, "clientId": null, "profileId": 0, "email": "admin@cuadre.co"}"#;
        let identity: Identity = serde_json::from_str(payload).expect("identity decodes");
        assert_eq!(identity.client_id, None);
        assert!(identity.is_superadmin());
        assert!(identity.client.is_none());
    }

    #[test]
    fn reconciliation_report_decodes_rows() {
        let payload = r#"{
            "processed": 2,
            "matched": 1,
            "unmatched": 1,
            "rows": [
                {"invoiceNumber": "FV-001", "siigoId": "S-99", "total": 1190000.0, "status": "conciliada"},
                {"invoiceNumber": "FV-002", "total": 850000.0, "status": "pendiente"}
            ]
        }"#;
        let report: ReconciliationReport = serde_json::from_str(payload).expect("report decodes");
        assert_eq!(report.processed, 2);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[1].siigo_id, None);
    }

    #[test]
    fn api_message_round_trips() {
        let body = r#"{"message": "archivo no soportado"}"#;
        let msg: ApiMessage = serde_json::from_str(body).expect("message decodes");
        assert_eq!(msg.message, "archivo no soportado");
    }
}
