//! Core, DOM-free session logic for the Cuadre UI.
pub mod credentials;
pub mod gateway;
pub mod guard;
pub mod session;
