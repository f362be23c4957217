//! Logged-in landing page: greets the user and looks up an order by number.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::order::parse_order_id;
use crate::routers::order_path;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let order_number = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match parse_order_id(&order_number.get()) {
            Some(id) => navigate(&order_path(id), NavigateOptions::default()),
            None => info.set("Enter an order number.".to_owned()),
        }
    };

    let greeting = move || {
        let state = auth.get();
        match (state.loading, state.user) {
            (true, _) => "Loading...".to_owned(),
            (false, Some(user)) => format!("Signed in as {} ({})", user.email, user.role),
            (false, None) => "Signed in".to_owned(),
        }
    };

    view! {
        <div class="home-page">
            <p class="home-page__greeting">{greeting}</p>
            <form class="order-lookup" on:submit=on_submit>
                <input
                    class="login-input"
                    type="text"
                    inputmode="numeric"
                    placeholder="Order number"
                    prop:value=move || order_number.get()
                    on:input=move |ev| {
                        info.set(String::new());
                        order_number.set(event_target_value(&ev));
                    }
                />
                <button class="login-button" type="submit">
                    "Track order"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message login-message--error">{move || info.get()}</p>
            </Show>
        </div>
    }
}
