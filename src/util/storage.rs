//! Browser localStorage persistence for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token survives reloads so the root view can restore the session flag
//! before the first render. Only `csr` builds touch `web_sys`; native builds
//! behave as an empty store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

pub const TOKEN_STORAGE_KEY: &str = "nuber-token";

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Keep only tokens worth sending; blank values count as absent.
fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

/// Read the persisted session token.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage()?;
        normalize_token(storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        normalize_token(None)
    }
}

pub fn save_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
            leptos::logging::warn!("could not persist session token");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

pub fn remove_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
