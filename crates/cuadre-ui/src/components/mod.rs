//! Yew components for the Cuadre UI.
pub(crate) mod clients;
pub(crate) mod dashboard;
pub(crate) mod guard;
pub(crate) mod invoices;
pub(crate) mod login;
pub(crate) mod profiles;
pub(crate) mod shell;
pub(crate) mod users;
