//! GraphQL operation documents with their typed variables and data.
//!
//! DESIGN
//! ======
//! Every document is a `&'static str` assembled at compile time, order
//! operations embed the shared `FullOrderParts` fragment so queries and
//! subscription payloads decode into the same [`Order`] type.

#[cfg(test)]
#[path = "operations_test.rs"]
mod operations_test;

use serde::{Deserialize, Serialize};

use super::types::{MutationOutput, Order, OrderStatus, User, UserRole};

macro_rules! full_order_fragment {
    () => {
        "fragment FullOrderParts on Order { id status total driver { email } customer { email } restaurant { name } }"
    };
}

pub const FULL_ORDER_FRAGMENT: &str = full_order_fragment!();

pub const GET_ORDER: &str = concat!(
    "query getOrder($input: GetOrderInput!) { getOrder(input: $input) { ok error order { ...FullOrderParts } } } ",
    full_order_fragment!()
);

pub const ORDER_UPDATES: &str = concat!(
    "subscription orderUpdates($input: OrderUpdatesInput!) { orderUpdates(input: $input) { ...FullOrderParts } } ",
    full_order_fragment!()
);

pub const EDIT_ORDER: &str =
    "mutation editOrder($input: EditOrderInput!) { editOrder(input: $input) { ok error } }";

pub const ME: &str = "query me { me { id email role verified } }";

pub const LOGIN: &str =
    "mutation loginMutation($loginInput: LoginInput!) { login(input: $loginInput) { ok token error } }";

pub const CREATE_ACCOUNT: &str = "mutation createAccountMutation($createAccountInput: CreateAccountInput!) { createAccount(input: $createAccountInput) { ok error } }";

/// `{ input: ... }` variables wrapper used by the order operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputVariables<T> {
    pub input: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIdInput {
    pub id: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOrderInput {
    pub id: i64,
    pub status: OrderStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginVariables {
    pub login_input: LoginInput,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountInput {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountVariables {
    pub create_account_input: CreateAccountInput,
}

/// Result of `getOrder`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetOrderOutput {
    pub ok: bool,
    pub error: Option<String>,
    pub order: Option<Order>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrderData {
    pub get_order: GetOrderOutput,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdatesData {
    pub order_updates: Order,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOrderData {
    pub edit_order: MutationOutput,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeData {
    pub me: User,
}

/// Result of `login`; `token` is only present when `ok` is true.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutput {
    pub ok: bool,
    pub token: Option<String>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub login: LoginOutput,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountData {
    pub create_account: MutationOutput,
}

pub fn get_order_request(id: i64) -> gql::Request<InputVariables<OrderIdInput>> {
    gql::Request::new(GET_ORDER, "getOrder", InputVariables { input: OrderIdInput { id } })
}

pub fn order_updates_request(id: i64) -> gql::Request<InputVariables<OrderIdInput>> {
    gql::Request::new(ORDER_UPDATES, "orderUpdates", InputVariables { input: OrderIdInput { id } })
}

pub fn edit_order_request(id: i64, status: OrderStatus) -> gql::Request<InputVariables<EditOrderInput>> {
    gql::Request::new(EDIT_ORDER, "editOrder", InputVariables { input: EditOrderInput { id, status } })
}

pub fn me_request() -> gql::Request<serde_json::Value> {
    gql::Request::new(ME, "me", serde_json::json!({}))
}

pub fn login_request(email: &str, password: &str) -> gql::Request<LoginVariables> {
    gql::Request::new(
        LOGIN,
        "loginMutation",
        LoginVariables {
            login_input: LoginInput { email: email.to_owned(), password: password.to_owned() },
        },
    )
}

pub fn create_account_request(
    email: &str,
    password: &str,
    role: UserRole,
) -> gql::Request<CreateAccountVariables> {
    gql::Request::new(
        CREATE_ACCOUNT,
        "createAccountMutation",
        CreateAccountVariables {
            create_account_input: CreateAccountInput {
                email: email.to_owned(),
                password: password.to_owned(),
                role,
            },
        },
    )
}
