//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and UI policy from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod order_actions;
pub mod storage;
