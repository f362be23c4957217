//! Route trees for the two session states.
//!
//! ARCHITECTURE
//! ============
//! `App` mounts exactly one of these trees. Each tree owns its own `Router`
//! and `Routes` with a `NotFoundPage` fallback.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod logged_in;
pub mod logged_out;

/// Path of the order detail route for `order_id`.
pub fn order_path(order_id: i64) -> String {
    format!("/orders/{order_id}")
}
