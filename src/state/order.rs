//! State model for the order detail view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `OrderPage` owns one `RwSignal<OrderState>`. The initial `getOrder` fetch
//! fills it, the `orderUpdates` subscription keeps replacing the order, and
//! the view renders straight from it.
//!
//! DESIGN
//! ======
//! Results are keyed by `order_id` so a late response for a previous route
//! parameter never overwrites the current one. The `subscribed` flag makes
//! the subscription a one-shot per successful fetch.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use crate::net::operations::GetOrderOutput;
use crate::net::types::{Contact, Order, OrderStatus};

pub const NO_DRIVER_LABEL: &str = "Not yet.";
pub const DELIVERED_MESSAGE: &str = "Thank you for using Nuber Eats";

/// Order detail state: the last query result plus subscription bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderState {
    pub order_id: Option<i64>,
    pub ok: bool,
    pub error: Option<String>,
    pub order: Option<Order>,
    pub subscribed: bool,
}

impl OrderState {
    /// Fresh state for a newly requested order id.
    pub fn for_order(order_id: i64) -> Self {
        Self { order_id: Some(order_id), ..Self::default() }
    }

    /// Store a `getOrder` result. Returns `false` for a stale id.
    pub fn apply_fetch(&mut self, order_id: i64, output: GetOrderOutput) -> bool {
        if self.order_id != Some(order_id) {
            return false;
        }
        self.ok = output.ok;
        self.error = output.error;
        self.order = output.order;
        true
    }

    pub fn should_subscribe(&self) -> bool {
        self.ok && !self.subscribed && self.order_id.is_some()
    }

    pub fn mark_subscribed(&mut self) {
        self.subscribed = true;
    }

    /// Replace the order with a pushed update; `ok` and `error` are kept.
    pub fn apply_update(&mut self, order: Order) -> bool {
        if self.order_id != Some(order.id) {
            return false;
        }
        self.order = Some(order);
        true
    }
}

/// `$<total>` as shown on the order card; an unknown total renders as `$`.
pub fn format_total(total: Option<f64>) -> String {
    total.map_or_else(|| "$".to_owned(), |t| format!("${t}"))
}

/// Driver email, or `Not yet.` while no driver (or a blank one) is assigned.
pub fn driver_label(driver: Option<&Contact>) -> &str {
    driver.map(|d| d.email.as_str()).filter(|email| !email.is_empty()).unwrap_or(NO_DRIVER_LABEL)
}

pub fn is_delivered(status: OrderStatus) -> bool {
    status == OrderStatus::Delivered
}
