//! Networking modules for the GraphQL API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs queries and mutations over HTTP, `order_subscription`
//! manages the live order websocket, `operations` holds the GraphQL documents
//! with their typed variables/data, and `types` defines the domain schema.

pub mod api;
pub mod operations;
pub mod order_subscription;
pub mod types;
