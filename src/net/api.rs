//! GraphQL HTTP helpers for queries and mutations.
//!
//! Browser builds (`csr`): real `POST` requests via `gloo-net`.
//! Native builds (tests, tooling): stubs returning an error, since the
//! endpoint is only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics. Transport failures,
//! non-OK statuses and GraphQL `errors` all collapse into a message string;
//! no retries happen at this layer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use super::operations::{CreateAccountData, EditOrderData, GetOrderData, LoginData, MeData};
use super::operations::{GetOrderOutput, LoginOutput};
use super::types::{MutationOutput, OrderStatus, User, UserRole};

#[cfg(not(feature = "csr"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(operation: &str, status: u16) -> String {
    format!("{operation} request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn operation_failed_message(operation: &str, error: &str) -> String {
    format!("{operation} failed: {error}")
}

/// Header pair attached to authenticated requests, if a token is present.
#[cfg(any(test, feature = "csr"))]
fn auth_header<'a>(header: &'a str, token: Option<&'a str>) -> Option<(&'a str, &'a str)> {
    token.filter(|t| !t.is_empty()).map(|t| (header, t))
}

/// Post `request` to the GraphQL endpoint and decode its `data`.
#[cfg(feature = "csr")]
async fn post_graphql<V, D>(request: &gql::Request<V>, token: Option<&str>) -> Result<D, String>
where
    V: serde::Serialize,
    D: serde::de::DeserializeOwned,
{
    let cfg = crate::config::config();
    let mut builder = gloo_net::http::Request::post(&cfg.graphql_http_url);
    if let Some((name, value)) = auth_header(&cfg.token_header, token) {
        builder = builder.header(name, value);
    }
    let resp = builder
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(&request.operation_name, resp.status()));
    }
    let body: gql::Response<D> = resp.json().await.map_err(|e| e.to_string())?;
    body.into_result()
        .map_err(|e| operation_failed_message(&request.operation_name, &e.to_string()))
}

/// Fetch an order through `getOrder`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server reports GraphQL errors.
pub async fn fetch_order(id: i64, token: Option<String>) -> Result<GetOrderOutput, String> {
    #[cfg(feature = "csr")]
    {
        let request = super::operations::get_order_request(id);
        let data: GetOrderData = post_graphql(&request, token.as_deref()).await?;
        Ok(data.get_order)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, token);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Request an order status change through `editOrder`.
///
/// The server is the sole authority on whether the transition is legal; the
/// returned output carries its verdict.
///
/// # Errors
///
/// Returns an error string if the request fails or the server reports GraphQL errors.
pub async fn edit_order(id: i64, status: OrderStatus, token: Option<String>) -> Result<MutationOutput, String> {
    #[cfg(feature = "csr")]
    {
        let request = super::operations::edit_order_request(id, status);
        let data: EditOrderData = post_graphql(&request, token.as_deref()).await?;
        Ok(data.edit_order)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, status, token);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Fetch the signed-in user through `me`.
///
/// # Errors
///
/// Returns an error string if the request fails or the token is rejected.
pub async fn fetch_me(token: Option<String>) -> Result<User, String> {
    #[cfg(feature = "csr")]
    {
        let data: MeData = post_graphql(&super::operations::me_request(), token.as_deref()).await?;
        Ok(data.me)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Exchange credentials for a session token through `login`.
///
/// # Errors
///
/// Returns an error string if the request fails. A rejected login is reported
/// through `LoginOutput::ok` / `LoginOutput::error`, not as `Err`.
pub async fn login(email: &str, password: &str) -> Result<LoginOutput, String> {
    #[cfg(feature = "csr")]
    {
        let request = super::operations::login_request(email, password);
        let data: LoginData = post_graphql(&request, None).await?;
        Ok(data.login)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Register a new account through `createAccount`.
///
/// # Errors
///
/// Returns an error string if the request fails. A rejected registration is
/// reported through `MutationOutput::ok` / `MutationOutput::error`.
pub async fn create_account(email: &str, password: &str, role: UserRole) -> Result<MutationOutput, String> {
    #[cfg(feature = "csr")]
    {
        let request = super::operations::create_account_request(email, password, role);
        let data: CreateAccountData = post_graphql(&request, None).await?;
        Ok(data.create_account)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password, role);
        Err(NOT_IN_BROWSER.to_owned())
    }
}
