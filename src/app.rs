//! Root application component: session context and route-tree switch.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::routers::{logged_in::LoggedInRouter, logged_out::LoggedOutRouter};
use crate::state::session::SessionState;
use crate::util::storage;

/// Which route tree the root view mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTree {
    LoggedIn,
    LoggedOut,
}

pub fn route_tree_for(logged_in: bool) -> RouteTree {
    if logged_in { RouteTree::LoggedIn } else { RouteTree::LoggedOut }
}

/// Root application component.
///
/// Restores the session from the persisted token, provides it as context and
/// renders exactly one route tree for the current session flag.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore(storage::load_token()));
    provide_context(session);

    let tree = Memo::new(move |_| route_tree_for(session.with(|s| s.logged_in)));
    Effect::new(move || leptos::logging::log!("route tree: {:?}", tree.get()));

    view! {
        <Stylesheet id="nuber-eats" href="/style.css"/>
        <Title text="Nuber Eats"/>

        {move || match tree.get() {
            RouteTree::LoggedIn => view! { <LoggedInRouter/> }.into_any(),
            RouteTree::LoggedOut => view! { <LoggedOutRouter/> }.into_any(),
        }}
    }
}
