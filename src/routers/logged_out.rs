//! Route tree shown while no session is active.

#[cfg(all(test, feature = "ssr"))]
#[path = "logged_out_test.rs"]
mod logged_out_test;

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{create_account::CreateAccountPage, login::LoginPage, not_found::NotFoundPage};

#[component]
pub fn LoggedOutRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("create-account") view=CreateAccountPage/>
                <Route path=StaticSegment("") view=LoginPage/>
            </Routes>
        </Router>
    }
}
