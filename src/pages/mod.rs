//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (queries, the order
//! subscription, mutations) and keeps its input parsing in small pure
//! functions next to it.

pub mod create_account;
pub mod home;
pub mod login;
pub mod not_found;
pub mod order;
