//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome shared by several pages while reading/writing
//! session state from Leptos context providers.

pub mod header;
