use super::*;
use crate::net::types::OrderStatus;

// =============================================================================
// interpret_server_text
// =============================================================================

const OP: &str = "op-1";

#[test]
fn data_for_our_operation_yields_update() {
    let text = r#"{"type":"data","id":"op-1","payload":{"data":{"orderUpdates":{"id":7,"status":"COOKING","total":12.5}}}}"#;
    match interpret_server_text(text, OP) {
        SubscriptionEvent::Update(order) => {
            assert_eq!(order.id, 7);
            assert_eq!(order.status, OrderStatus::Cooking);
            assert_eq!(order.total, Some(12.5));
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn data_for_another_operation_is_ignored() {
    let text = r#"{"type":"data","id":"op-2","payload":{"data":{"orderUpdates":{"id":7,"status":"COOKING"}}}}"#;
    assert_eq!(interpret_server_text(text, OP), SubscriptionEvent::Ignore);
}

#[test]
fn handshake_and_keep_alive_are_ignored() {
    assert_eq!(interpret_server_text(r#"{"type":"connection_ack"}"#, OP), SubscriptionEvent::Ignore);
    assert_eq!(interpret_server_text(r#"{"type":"ka"}"#, OP), SubscriptionEvent::Ignore);
}

#[test]
fn data_with_graphql_errors_is_malformed_not_fatal() {
    let text = r#"{"type":"data","id":"op-1","payload":{"data":null,"errors":[{"message":"boom"}]}}"#;
    assert!(matches!(interpret_server_text(text, OP), SubscriptionEvent::Malformed(_)));
}

#[test]
fn unparseable_text_is_malformed() {
    assert!(matches!(interpret_server_text("not json", OP), SubscriptionEvent::Malformed(_)));
}

#[test]
fn complete_for_our_operation_finishes() {
    assert_eq!(interpret_server_text(r#"{"type":"complete","id":"op-1"}"#, OP), SubscriptionEvent::Finished);
    assert_eq!(interpret_server_text(r#"{"type":"complete","id":"op-9"}"#, OP), SubscriptionEvent::Ignore);
}

#[test]
fn operation_error_fails_with_server_message() {
    let text = r#"{"type":"error","id":"op-1","payload":{"message":"Forbidden resource"}}"#;
    assert_eq!(interpret_server_text(text, OP), SubscriptionEvent::Failed("Forbidden resource".into()));
}

#[test]
fn connection_error_fails() {
    let text = r#"{"type":"connection_error","payload":{"message":"invalid token"}}"#;
    match interpret_server_text(text, OP) {
        SubscriptionEvent::Failed(message) => assert!(message.contains("invalid token")),
        other => panic!("expected failure, got {other:?}"),
    }
}

// =============================================================================
// outgoing messages
// =============================================================================

#[test]
fn start_message_carries_operation_id_and_order_input() {
    let text = start_message(OP, 42).expect("start");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value["type"], "start");
    assert_eq!(value["id"], OP);
    assert_eq!(value["payload"]["operationName"], "orderUpdates");
    assert_eq!(value["payload"]["variables"]["input"]["id"], 42);
}

#[test]
fn release_sends_stop_then_terminate() {
    let messages = release_messages(OP);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], r#"{"type":"stop","id":"op-1"}"#);
    assert_eq!(messages[1], r#"{"type":"connection_terminate"}"#);
}

// =============================================================================
// handle
// =============================================================================

#[test]
fn each_handle_gets_a_distinct_operation_id() {
    let a = OrderSubscription::open(1, None, |_| {});
    let b = OrderSubscription::open(1, None, |_| {});
    assert_ne!(a.operation_id(), b.operation_id());
    a.close();
    drop(b);
}
