//! Route tree shown while a session is active.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides `RwSignal<AuthState>` to every logged-in page and fills it from
//! the `me` query whenever the session token changes.

use leptos::prelude::*;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{home::HomePage, not_found::NotFoundPage, order::OrderPage};
use crate::state::auth::AuthState;
use crate::state::session::SessionState;

#[component]
pub fn LoggedInRouter() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = RwSignal::new(AuthState { user: None, loading: true });
    provide_context(auth);

    Effect::new(move || {
        let token = session.with(SessionState::token);
        if token.is_none() {
            auth.set(AuthState::default());
            return;
        }
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_me(token).await {
                Ok(user) => {
                    leptos::logging::log!("signed in as {} ({})", user.email, user.role);
                    auth.set(AuthState { user: Some(user), loading: false });
                }
                Err(e) => {
                    leptos::logging::warn!("me query failed: {e}");
                    auth.set(AuthState::default());
                }
            }
        });
    });

    view! {
        <Router>
            <Header/>
            <main class="main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("orders"), ParamSegment("id")) view=OrderPage/>
                </Routes>
            </main>
        </Router>
    }
}
