//! Top bar for the logged-in route tree: brand link, user email, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every logged-in route. Logging out returns the browser to
//! `/` before the session flag flips, so the logged-out tree opens on the
//! login page instead of its 404 fallback.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::SessionState;
use crate::util::auth::sign_out;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = move || auth.with(|a| a.email().map(str::to_owned)).unwrap_or_default();

    let on_logout = move |_| {
        navigate("/", NavigateOptions::default());
        sign_out(session);
    };

    view! {
        <header class="header">
            <a href="/" class="header__brand">
                "Nuber Eats"
            </a>
            <span class="header__user">{email}</span>
            <button class="header__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
