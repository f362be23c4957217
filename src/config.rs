//! Client configuration resolved at compile time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so endpoints are
//! baked in from build-time variables:
//!
//! - `NUBER_GRAPHQL_HTTP_URL`: queries and mutations (default `http://localhost:4000/graphql`)
//! - `NUBER_GRAPHQL_WS_URL`: subscriptions (default: derived from the HTTP URL)
//! - `NUBER_TOKEN_HEADER`: auth header / connection param name (default `x-jwt`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::LazyLock;

pub const DEFAULT_GRAPHQL_HTTP_URL: &str = "http://localhost:4000/graphql";
pub const DEFAULT_TOKEN_HEADER: &str = "x-jwt";

static CONFIG: LazyLock<ClientConfig> = LazyLock::new(ClientConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub graphql_http_url: String,
    pub graphql_ws_url: String,
    pub token_header: String,
}

impl ClientConfig {
    /// Build the config from the variables captured by `option_env!`.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("NUBER_GRAPHQL_HTTP_URL"),
            option_env!("NUBER_GRAPHQL_WS_URL"),
            option_env!("NUBER_TOKEN_HEADER"),
        )
    }

    fn from_values(http_url: Option<&str>, ws_url: Option<&str>, token_header: Option<&str>) -> Self {
        let graphql_http_url = non_empty(http_url)
            .unwrap_or(DEFAULT_GRAPHQL_HTTP_URL)
            .trim_end_matches('/')
            .to_owned();
        let graphql_ws_url = non_empty(ws_url)
            .map_or_else(|| ws_url_from_http(&graphql_http_url), |url| url.trim_end_matches('/').to_owned());
        let token_header = non_empty(token_header)
            .unwrap_or(DEFAULT_TOKEN_HEADER)
            .to_owned();
        Self { graphql_http_url, graphql_ws_url, token_header }
    }
}

/// Shared config instance.
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

/// Map an `http(s)` endpoint onto its `ws(s)` counterpart.
pub fn ws_url_from_http(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = url.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        url.to_owned()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
