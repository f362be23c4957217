//! Order detail page with live status updates and role-gated controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/orders/:id` in the logged-in route tree. Fetches the order
//! once, then follows it over the `orderUpdates` subscription while mounted.
//! Owners and drivers get the single control the action table allows for the
//! current status; everyone else sees a status label.
//!
//! ERROR HANDLING
//! ==============
//! Query, subscription and mutation failures are logged and otherwise
//! ignored. The view keeps whatever it last rendered.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::order_subscription::OrderSubscription;
use crate::net::types::{Order, OrderStatus};
use crate::state::auth::AuthState;
use crate::state::order::{DELIVERED_MESSAGE, OrderState, driver_label, format_total, is_delivered};
use crate::state::session::SessionState;
use crate::util::order_actions::{OrderControls, order_controls};

/// Parse the `:id` route parameter; anything but an integer yields `None`.
pub(crate) fn parse_order_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Send `editOrder` for `order_id`. The server pushes the confirmed order back
/// through the subscription; the result here is only logged.
fn request_status(order_id: i64, status: OrderStatus, token: Option<String>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::edit_order(order_id, status, token).await {
            Ok(output) if output.ok => leptos::logging::log!("editOrder {order_id} -> {status} accepted"),
            Ok(output) => leptos::logging::warn!(
                "editOrder {order_id} -> {status} rejected: {}",
                output.error.unwrap_or_default()
            ),
            Err(e) => leptos::logging::warn!("{e}"),
        }
    });
}

#[component]
pub fn OrderPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let state = RwSignal::new(OrderState::default());
    let subscription = StoredValue::new(None::<OrderSubscription>);

    let raw_id = move || params.read().get("id").unwrap_or_default();
    let order_id = Memo::new(move |_| parse_order_id(&raw_id()));

    // Fetch once per route id; a new id releases the previous subscription.
    Effect::new(move || {
        let id = order_id.get();
        subscription.set_value(None);
        let Some(id) = id else {
            state.set(OrderState::default());
            return;
        };
        state.set(OrderState::for_order(id));
        let token = session.with_untracked(SessionState::token);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_order(id, token).await {
                Ok(output) => state.update(|s| {
                    if !s.apply_fetch(id, output) {
                        leptos::logging::log!("dropped stale getOrder result for order {id}");
                    }
                }),
                Err(e) => leptos::logging::warn!("getOrder failed for order {id}: {e}"),
            }
        });
    });

    // Subscribe once after a successful fetch.
    Effect::new(move || {
        let Some(id) = state.with(|s| if s.should_subscribe() { s.order_id } else { None }) else {
            return;
        };
        state.update(OrderState::mark_subscribed);
        let token = session.with_untracked(SessionState::token);
        let handle = OrderSubscription::open(id, token, move |order: Order| {
            state.update(|s| {
                s.apply_update(order);
            });
        });
        leptos::logging::log!("orderUpdates opened for order {id} ({})", handle.operation_id());
        subscription.set_value(Some(handle));
    });

    on_cleanup(move || {
        subscription.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.close();
            }
        });
    });

    let order = move || state.with(|s| s.order.clone());

    let controls = move || {
        let status = state.with(|s| s.order.as_ref().map(|o| o.status))?;
        let role = auth.with(AuthState::role)?;
        let rendered = match order_controls(role, status) {
            OrderControls::Action(action) => view! {
                <button
                    class="btn"
                    on:click=move |_| {
                        if let Some(id) = order_id.get_untracked() {
                            request_status(id, action.next_status, session.with_untracked(SessionState::token));
                        }
                    }
                >
                    {action.label}
                </button>
            }
            .into_any(),
            OrderControls::StatusLabel(label) => view! { <span class="order-card__status">{label}</span> }.into_any(),
        };
        Some(rendered)
    };

    let delivered = move || state.with(|s| s.order.as_ref().is_some_and(|o| is_delivered(o.status)));

    view! {
        <div class="order-page">
            <div class="order-card">
                <h4 class="order-card__title">"Order #" {raw_id}</h4>
                <h5 class="order-card__total">{move || format_total(order().and_then(|o| o.total))}</h5>
                <div class="order-card__details">
                    <div class="order-card__row">
                        "Prepared By: "
                        <span class="order-card__value">
                            {move || order().and_then(|o| o.restaurant).map(|r| r.name).unwrap_or_default()}
                        </span>
                    </div>
                    <div class="order-card__row">
                        "Deliver To: "
                        <span class="order-card__value">
                            {move || order().and_then(|o| o.customer).map(|c| c.email).unwrap_or_default()}
                        </span>
                    </div>
                    <div class="order-card__row">
                        "Driver: "
                        <span class="order-card__value">
                            {move || state.with(|s| driver_label(s.order.as_ref().and_then(|o| o.driver.as_ref())).to_owned())}
                        </span>
                    </div>
                    {controls}
                    <Show when=delivered>
                        <span class="order-card__status">{DELIVERED_MESSAGE}</span>
                    </Show>
                </div>
            </div>
        </div>
    }
}
