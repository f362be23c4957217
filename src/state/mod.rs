//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `order`) so pages depend on
//! small focused models. Each model is a plain struct wrapped in an
//! `RwSignal` by whichever component owns it.

pub mod auth;
pub mod order;
pub mod session;
