//! Shared session entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page and the header must flip the session flag and the
//! persisted token together, so both go through these helpers.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::storage;

/// Persist `token` and mark the session as logged in.
pub fn sign_in(session: RwSignal<SessionState>, token: String) {
    storage::save_token(&token);
    session.update(|s| s.login(token));
    leptos::logging::log!("session started");
}

/// Forget the persisted token and mark the session as logged out.
pub fn sign_out(session: RwSignal<SessionState>) {
    storage::remove_token();
    session.update(SessionState::logout);
    leptos::logging::log!("session ended");
}
