//! # nuber-eats-web
//!
//! Leptos + WASM web client for the Nuber Eats food-delivery marketplace.
//! Renders the authentication flows, order tracking and the role-gated order
//! controls for clients, restaurant owners and delivery drivers.
//!
//! This crate contains the route trees, pages, application state and the
//! GraphQL network layer. The shared wire envelopes and the `graphql-ws`
//! subscription codec live in the `gql` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routers;
pub mod state;
pub mod util;
