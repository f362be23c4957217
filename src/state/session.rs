//! Session flag for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root view reads `logged_in` to pick a route tree; the login page and
//! the header write it. The model is provided as `RwSignal<SessionState>`
//! context by `App`, so there is no ambient global.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Whether a user is signed in, plus the token that proves it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub token: Option<String>,
}

impl SessionState {
    /// Rebuild the session from a previously persisted token.
    pub fn restore(token: Option<String>) -> Self {
        match token.filter(|t| !t.trim().is_empty()) {
            Some(token) => Self { logged_in: true, token: Some(token) },
            None => Self::default(),
        }
    }

    pub fn login(&mut self, token: String) {
        self.logged_in = true;
        self.token = Some(token);
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.token = None;
    }

    /// Token to attach to GraphQL requests, if signed in.
    pub fn token(&self) -> Option<String> {
        if self.logged_in { self.token.clone() } else { None }
    }
}
