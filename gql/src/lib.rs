//! Shared GraphQL envelopes and the `graphql-ws` subscription codec.
//!
//! This crate owns the wire representation used by the web client for both
//! transports: JSON-over-HTTP for queries/mutations and the
//! subscriptions-transport-ws protocol (`graphql-ws` subprotocol) for live
//! updates. Variables and data stay generic so every operation keeps its own
//! typed payloads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// WebSocket subprotocol negotiated with the GraphQL server.
pub const WS_SUBPROTOCOL: &str = "graphql-ws";

/// Error returned by the decoding helpers in this crate.
#[derive(Debug, thiserror::Error)]
pub enum GqlError {
    /// The payload was not valid JSON or did not match the expected shape.
    #[error("failed to decode graphql payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// The server answered with a non-empty `errors` list.
    #[error("graphql error: {}", join_messages(.0))]
    Graphql(Vec<GraphqlError>),
    /// The server answered without `data` and without `errors`.
    #[error("graphql response carried no data")]
    MissingData,
    /// The websocket handshake was refused by the server.
    #[error("graphql connection rejected: {0}")]
    Connection(String),
}

/// A single entry of a GraphQL `errors` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlError {
    /// Human readable error message.
    pub message: String,
    /// Response path of the failing field, if reported.
    #[serde(default)]
    pub path: Vec<Value>,
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Request envelope posted to the HTTP endpoint and carried by `start` messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request<V> {
    /// Full operation document, fragments included.
    pub query: String,
    /// Name of the operation inside `query` to execute.
    pub operation_name: String,
    /// Operation variables.
    pub variables: V,
}

impl<V> Request<V> {
    pub fn new(query: &str, operation_name: &str, variables: V) -> Self {
        Self { query: query.to_owned(), operation_name: operation_name.to_owned(), variables }
    }
}

/// Response envelope returned by the HTTP endpoint and carried by `data` messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response<D> {
    pub data: Option<D>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<GraphqlError>,
}

/// Servers may send `"errors": null`; treat it like a missing key.
fn null_as_empty<'de, T, De>(deserializer: De) -> Result<Vec<T>, De::Error>
where
    T: Deserialize<'de>,
    De: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl<D> Response<D> {
    /// Collapse the envelope into its data, surfacing GraphQL errors first.
    ///
    /// # Errors
    ///
    /// Returns [`GqlError::Graphql`] when `errors` is non-empty and
    /// [`GqlError::MissingData`] when `data` is absent.
    pub fn into_result(self) -> Result<D, GqlError> {
        if !self.errors.is_empty() {
            return Err(GqlError::Graphql(self.errors));
        }
        self.data.ok_or(GqlError::MissingData)
    }
}

/// Messages sent by the client on a `graphql-ws` connection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// First message on the socket; the payload carries connection params.
    ConnectionInit {
        #[serde(default)]
        payload: Value,
    },
    /// Start the operation `payload` under the client-chosen `id`.
    Start { id: String, payload: Value },
    /// Stop the operation registered under `id`.
    Stop { id: String },
    /// Ask the server to close the connection.
    ConnectionTerminate,
}

impl ClientMessage {
    /// Build a `connection_init` message carrying the auth token under `token_header`.
    #[must_use]
    pub fn connection_init(token_header: &str, token: Option<&str>) -> Self {
        let mut params = Map::new();
        if let Some(token) = token {
            params.insert(token_header.to_owned(), Value::String(token.to_owned()));
        }
        Self::ConnectionInit { payload: Value::Object(params) }
    }

    /// Build a `start` message for `request` under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GqlError::Decode`] if the variables cannot be represented as JSON.
    pub fn start<V: Serialize>(id: &str, request: &Request<V>) -> Result<Self, GqlError> {
        Ok(Self::Start { id: id.to_owned(), payload: serde_json::to_value(request)? })
    }
}

/// Messages received from the server on a `graphql-ws` connection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    ConnectionAck,
    ConnectionError {
        #[serde(default)]
        payload: Value,
    },
    /// Periodic keep-alive.
    #[serde(rename = "ka")]
    KeepAlive,
    /// One result of operation `id`; the payload is a [`Response`] envelope.
    Data { id: String, payload: Value },
    /// Operation `id` failed before producing results.
    Error {
        id: String,
        #[serde(default)]
        payload: Value,
    },
    /// Operation `id` finished; no further `data` follows.
    Complete { id: String },
}

/// Encode a client message as websocket text.
///
/// # Errors
///
/// Returns [`GqlError::Decode`] if the message cannot be serialized.
pub fn encode_client_message(message: &ClientMessage) -> Result<String, GqlError> {
    Ok(serde_json::to_string(message)?)
}

/// Decode websocket text into a server message.
///
/// # Errors
///
/// Returns [`GqlError::Decode`] for malformed JSON or unknown message types.
pub fn decode_server_message(text: &str) -> Result<ServerMessage, GqlError> {
    Ok(serde_json::from_str(text)?)
}

/// Decode the payload of a `data` message into the operation's typed data.
///
/// # Errors
///
/// Returns [`GqlError::Decode`] when the envelope does not match `D`, and the
/// errors of [`Response::into_result`] otherwise.
pub fn decode_data_payload<D: DeserializeOwned>(payload: Value) -> Result<D, GqlError> {
    let response: Response<D> = serde_json::from_value(payload)?;
    response.into_result()
}

/// Best-effort message extraction from `connection_error` / `error` payloads.
#[must_use]
pub fn payload_error_message(payload: &Value) -> String {
    if let Some(message) = payload.get("message").and_then(Value::as_str) {
        return message.to_owned();
    }
    if let Some(rows) = payload.as_array() {
        let errors: Vec<GraphqlError> = rows
            .iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect();
        if !errors.is_empty() {
            return join_messages(&errors);
        }
    }
    if let Some(text) = payload.as_str() {
        return text.to_owned();
    }
    "unknown error".to_owned()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
