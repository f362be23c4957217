//! Live order updates over the `graphql-ws` websocket.
//!
//! DESIGN
//! ======
//! [`OrderSubscription`] is an owned handle. Opening it spawns the connection
//! task for one order; dropping it is the only release path. On release the
//! task sends `stop` and `connection_terminate`, then closes the socket.
//!
//! ERROR HANDLING
//! ==============
//! There is no reconnect loop. Connection and operation errors end the task
//! with a logged warning; malformed payloads are logged and skipped.

#[cfg(test)]
#[path = "order_subscription_test.rs"]
mod order_subscription_test;

#[cfg(any(test, feature = "csr"))]
use gql::ServerMessage;

#[cfg(any(test, feature = "csr"))]
use super::operations::{OrderUpdatesData, order_updates_request};
use super::types::Order;

/// Outcome of interpreting one websocket text message.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, PartialEq)]
enum SubscriptionEvent {
    /// A pushed order for our operation.
    Update(Order),
    /// Handshake, keep-alive or traffic for another operation.
    Ignore,
    /// Payload could not be decoded; keep listening.
    Malformed(String),
    /// Server completed our operation.
    Finished,
    /// Connection or operation error; stop listening.
    Failed(String),
}

#[cfg(any(test, feature = "csr"))]
fn interpret_server_text(text: &str, operation_id: &str) -> SubscriptionEvent {
    let message = match gql::decode_server_message(text) {
        Ok(message) => message,
        Err(e) => return SubscriptionEvent::Malformed(e.to_string()),
    };
    match message {
        ServerMessage::ConnectionError { payload } => {
            let err = gql::GqlError::Connection(gql::payload_error_message(&payload));
            SubscriptionEvent::Failed(err.to_string())
        }
        ServerMessage::Data { id, payload } if id == operation_id => {
            match gql::decode_data_payload::<OrderUpdatesData>(payload) {
                Ok(data) => SubscriptionEvent::Update(data.order_updates),
                Err(e) => SubscriptionEvent::Malformed(e.to_string()),
            }
        }
        ServerMessage::Error { id, payload } if id == operation_id => {
            SubscriptionEvent::Failed(gql::payload_error_message(&payload))
        }
        ServerMessage::Complete { id } if id == operation_id => SubscriptionEvent::Finished,
        _ => SubscriptionEvent::Ignore,
    }
}

#[cfg(any(test, feature = "csr"))]
fn start_message(operation_id: &str, order_id: i64) -> Result<String, String> {
    let message = gql::ClientMessage::start(operation_id, &order_updates_request(order_id))
        .map_err(|e| e.to_string())?;
    gql::encode_client_message(&message).map_err(|e| e.to_string())
}

/// Messages sent when the handle is released, in order.
#[cfg(any(test, feature = "csr"))]
fn release_messages(operation_id: &str) -> Vec<String> {
    [
        gql::ClientMessage::Stop { id: operation_id.to_owned() },
        gql::ClientMessage::ConnectionTerminate,
    ]
    .iter()
    .filter_map(|message| gql::encode_client_message(message).ok())
    .collect()
}

/// Owned handle to one `orderUpdates` subscription.
pub struct OrderSubscription {
    operation_id: String,
    #[cfg(feature = "csr")]
    cancel: Option<futures::channel::oneshot::Sender<()>>,
}

impl OrderSubscription {
    /// Open the subscription for `order_id`; `on_update` receives every pushed order.
    pub fn open<F>(order_id: i64, token: Option<String>, on_update: F) -> Self
    where
        F: Fn(Order) + 'static,
    {
        let operation_id = uuid::Uuid::new_v4().to_string();

        #[cfg(feature = "csr")]
        {
            let (cancel_tx, cancel_rx) = futures::channel::oneshot::channel();
            let task_operation_id = operation_id.clone();
            leptos::task::spawn_local(async move {
                match run_subscription(order_id, &task_operation_id, token, on_update, cancel_rx).await {
                    Ok(()) => leptos::logging::log!("orderUpdates closed for order {order_id}"),
                    Err(e) => leptos::logging::warn!("orderUpdates failed for order {order_id}: {e}"),
                }
            });
            Self { operation_id, cancel: Some(cancel_tx) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (order_id, token, on_update);
            Self { operation_id }
        }
    }

    /// Client-chosen operation id used in `start` / `stop` messages.
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// Release the subscription now instead of at the end of the owner's scope.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for OrderSubscription {
    fn drop(&mut self) {
        #[cfg(feature = "csr")]
        {
            if let Some(cancel) = self.cancel.take() {
                let _ = cancel.send(());
            }
        }
    }
}

/// Connect, start the operation and forward updates until released or closed.
#[cfg(feature = "csr")]
async fn run_subscription<F>(
    order_id: i64,
    operation_id: &str,
    token: Option<String>,
    on_update: F,
    cancel: futures::channel::oneshot::Receiver<()>,
) -> Result<(), String>
where
    F: Fn(Order),
{
    use futures::future::{Either, select};
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let cfg = crate::config::config();
    let ws = WebSocket::open_with_protocol(&cfg.graphql_ws_url, gql::WS_SUBPROTOCOL).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    let init = gql::ClientMessage::connection_init(&cfg.token_header, token.as_deref());
    let init = gql::encode_client_message(&init).map_err(|e| e.to_string())?;
    ws_write.send(Message::Text(init)).await.map_err(|e| e.to_string())?;
    ws_write
        .send(Message::Text(start_message(operation_id, order_id)?))
        .await
        .map_err(|e| e.to_string())?;

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            let text = match msg {
                Ok(Message::Text(text)) => text,
                Ok(Message::Bytes(_)) => continue,
                Err(e) => return Err(e.to_string()),
            };
            match interpret_server_text(&text, operation_id) {
                SubscriptionEvent::Update(order) => on_update(order),
                SubscriptionEvent::Ignore => {}
                SubscriptionEvent::Malformed(e) => leptos::logging::warn!("orderUpdates payload skipped: {e}"),
                SubscriptionEvent::Finished => return Ok(()),
                SubscriptionEvent::Failed(e) => return Err(e),
            }
        }
        Ok::<(), String>(())
    };

    let outcome = match select(Box::pin(recv_task), cancel).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            for text in release_messages(operation_id) {
                if ws_write.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
            Ok(())
        }
    };
    let _ = ws_write.close().await;
    outcome
}
