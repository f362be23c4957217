//! Domain DTOs shared by queries, mutations and subscription payloads.
//!
//! DESIGN
//! ======
//! These types mirror the GraphQL schema field names (camelCase on the wire)
//! and the enum spellings (`SCREAMING_SNAKE_CASE`) so serde stays lossless
//! against the server and the generated order fragment.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-authoritative lifecycle stage of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Cooking,
    Cooked,
    PickedUp,
    Delivered,
}

impl OrderStatus {
    /// Wire spelling, also used for the on-screen status label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Cooking => "COOKING",
            Self::Cooked => "COOKED",
            Self::PickedUp => "PICKED_UP",
            Self::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability class of the signed-in user. Only gates which controls render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Client,
    Owner,
    Delivery,
}

impl UserRole {
    pub const ALL: [Self; 3] = [Self::Client, Self::Owner, Self::Delivery];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "CLIENT",
            Self::Owner => "OWNER",
            Self::Delivery => "DELIVERY",
        }
    }

    /// Parse the wire spelling (as used by form `<select>` values).
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == raw)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restaurant reference embedded in an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRef {
    pub name: String,
}

/// Customer or driver contact embedded in an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
}

/// An order as selected by the `FullOrderParts` fragment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Numeric order identifier.
    pub id: i64,
    pub status: OrderStatus,
    /// Order total; the server may omit it while the order is being priced.
    pub total: Option<f64>,
    pub restaurant: Option<RestaurantRef>,
    pub customer: Option<Contact>,
    /// Assigned driver, `None` until a driver picks the order.
    pub driver: Option<Contact>,
}

/// The signed-in user as returned by the `me` query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub verified: bool,
}

/// The `{ ok error }` shape shared by every mutation output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationOutput {
    pub ok: bool,
    pub error: Option<String>,
}
