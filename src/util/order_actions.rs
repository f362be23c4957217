//! Role and status gated order controls.
//!
//! DESIGN
//! ======
//! A single static table maps `(UserRole, OrderStatus)` to the one button a
//! user may press on the order view and the status that button requests.
//! Any pair missing from the table renders a passive status label. The
//! server stays the authority on legality; this table only decides what is
//! offered.

#[cfg(test)]
#[path = "order_actions_test.rs"]
mod order_actions_test;

use crate::net::types::{OrderStatus, UserRole};

/// One button on the order view and the status it requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderAction {
    pub label: &'static str,
    pub next_status: OrderStatus,
}

/// What the order view renders below the order details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderControls {
    Action(OrderAction),
    StatusLabel(String),
}

const ACTIONS: &[(UserRole, OrderStatus, OrderAction)] = &[
    (
        UserRole::Owner,
        OrderStatus::Pending,
        OrderAction { label: "Accept Order", next_status: OrderStatus::Cooking },
    ),
    (
        UserRole::Owner,
        OrderStatus::Cooking,
        OrderAction { label: "Order COOKED", next_status: OrderStatus::Cooked },
    ),
    (
        UserRole::Delivery,
        OrderStatus::Cooked,
        OrderAction { label: "Picked Up", next_status: OrderStatus::PickedUp },
    ),
    (
        UserRole::Delivery,
        OrderStatus::PickedUp,
        OrderAction { label: "Order DELIVERED", next_status: OrderStatus::Delivered },
    ),
];

/// The action offered to `role` for an order in `status`, if any.
pub fn action_for(role: UserRole, status: OrderStatus) -> Option<OrderAction> {
    ACTIONS
        .iter()
        .find(|(r, s, _)| *r == role && *s == status)
        .map(|(_, _, action)| *action)
}

pub fn status_label(status: OrderStatus) -> String {
    format!("Status: {status}")
}

pub fn order_controls(role: UserRole, status: OrderStatus) -> OrderControls {
    action_for(role, status).map_or_else(|| OrderControls::StatusLabel(status_label(status)), OrderControls::Action)
}
