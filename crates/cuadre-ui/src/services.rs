//! Browser-side services: credential persistence and the HTTP gateway.
pub(crate) mod api;
pub(crate) mod storage;
