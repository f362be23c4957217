use super::*;

#[derive(Debug, PartialEq, Deserialize)]
struct Ping {
    pong: bool,
}

fn sample_request() -> Request<serde_json::Value> {
    Request::new(
        "query getOrder($input: GetOrderInput!) { getOrder(input: $input) { ok } }",
        "getOrder",
        serde_json::json!({ "input": { "id": 7 } }),
    )
}

// =============================================================
// Request / Response envelopes
// =============================================================

#[test]
fn request_serializes_operation_name_in_camel_case() {
    let value = serde_json::to_value(sample_request()).expect("serialize");
    assert_eq!(value["operationName"], "getOrder");
    assert_eq!(value["variables"]["input"]["id"], 7);
    assert!(value.get("operation_name").is_none());
}

#[test]
fn response_accepts_explicit_null_errors() {
    let response: Response<Ping> =
        serde_json::from_str(r#"{"data":{"pong":true},"errors":null}"#).expect("deserialize");
    assert!(response.errors.is_empty());
    assert_eq!(response.into_result().expect("data"), Ping { pong: true });
}

#[test]
fn response_into_result_returns_data() {
    let response: Response<Ping> =
        serde_json::from_str(r#"{"data":{"pong":true}}"#).expect("deserialize");
    assert_eq!(response.into_result().expect("data"), Ping { pong: true });
}

#[test]
fn response_into_result_prefers_errors_over_data() {
    let response: Response<Ping> = serde_json::from_str(
        r#"{"data":{"pong":true},"errors":[{"message":"Forbidden resource"}]}"#,
    )
    .expect("deserialize");
    let err = response.into_result().expect_err("errors should win");
    assert!(matches!(err, GqlError::Graphql(ref errors) if errors.len() == 1));
    assert_eq!(err.to_string(), "graphql error: Forbidden resource");
}

#[test]
fn response_into_result_without_data_is_missing_data() {
    let response: Response<Ping> = serde_json::from_str(r#"{"data":null}"#).expect("deserialize");
    assert!(matches!(response.into_result(), Err(GqlError::MissingData)));
}

#[test]
fn graphql_error_message_joins_multiple_errors() {
    let err = GqlError::Graphql(vec![
        GraphqlError { message: "a".to_owned(), path: Vec::new() },
        GraphqlError { message: "b".to_owned(), path: vec![serde_json::json!("getOrder")] },
    ]);
    assert_eq!(err.to_string(), "graphql error: a; b");
}

// =============================================================
// Client messages
// =============================================================

#[test]
fn connection_init_carries_token_under_header_name() {
    let msg = ClientMessage::connection_init("x-jwt", Some("tok"));
    let text = encode_client_message(&msg).expect("encode");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value, serde_json::json!({"type":"connection_init","payload":{"x-jwt":"tok"}}));
}

#[test]
fn connection_init_without_token_sends_empty_payload() {
    let msg = ClientMessage::connection_init("x-jwt", None);
    let value = serde_json::to_value(&msg).expect("json");
    assert_eq!(value, serde_json::json!({"type":"connection_init","payload":{}}));
}

#[test]
fn start_message_embeds_request_envelope() {
    let msg = ClientMessage::start("sub-1", &sample_request()).expect("start");
    let value = serde_json::to_value(&msg).expect("json");
    assert_eq!(value["type"], "start");
    assert_eq!(value["id"], "sub-1");
    assert_eq!(value["payload"]["operationName"], "getOrder");
    assert_eq!(value["payload"]["variables"]["input"]["id"], 7);
}

#[test]
fn stop_and_terminate_use_protocol_type_names() {
    let stop = encode_client_message(&ClientMessage::Stop { id: "sub-1".to_owned() }).expect("encode");
    assert_eq!(stop, r#"{"type":"stop","id":"sub-1"}"#);
    let terminate = encode_client_message(&ClientMessage::ConnectionTerminate).expect("encode");
    assert_eq!(terminate, r#"{"type":"connection_terminate"}"#);
}

// =============================================================
// Server messages
// =============================================================

#[test]
fn decode_connection_ack_and_keep_alive() {
    assert_eq!(
        decode_server_message(r#"{"type":"connection_ack"}"#).expect("decode"),
        ServerMessage::ConnectionAck
    );
    assert_eq!(decode_server_message(r#"{"type":"ka"}"#).expect("decode"), ServerMessage::KeepAlive);
}

#[test]
fn decode_data_message_and_typed_payload() {
    let msg = decode_server_message(r#"{"type":"data","id":"sub-1","payload":{"data":{"pong":true}}}"#)
        .expect("decode");
    let ServerMessage::Data { id, payload } = msg else {
        panic!("expected data message");
    };
    assert_eq!(id, "sub-1");
    let ping: Ping = decode_data_payload(payload).expect("payload");
    assert!(ping.pong);
}

#[test]
fn decode_data_payload_surfaces_graphql_errors() {
    let payload = serde_json::json!({"data": null, "errors": [{"message": "Order not found"}]});
    let err = decode_data_payload::<Ping>(payload).expect_err("should fail");
    assert!(matches!(err, GqlError::Graphql(_)));
}

#[test]
fn decode_complete_and_error_messages() {
    assert_eq!(
        decode_server_message(r#"{"type":"complete","id":"sub-1"}"#).expect("decode"),
        ServerMessage::Complete { id: "sub-1".to_owned() }
    );
    let msg = decode_server_message(r#"{"type":"error","id":"sub-1","payload":{"message":"boom"}}"#)
        .expect("decode");
    assert!(matches!(msg, ServerMessage::Error { ref id, .. } if id == "sub-1"));
}

#[test]
fn decode_server_message_rejects_unknown_type() {
    let err = decode_server_message(r#"{"type":"next","id":"1"}"#).expect_err("unknown type");
    assert!(matches!(err, GqlError::Decode(_)));
}

#[test]
fn decode_server_message_rejects_malformed_json() {
    assert!(matches!(decode_server_message("{not json"), Err(GqlError::Decode(_))));
}

#[test]
fn payload_error_message_reads_message_field_array_or_string() {
    assert_eq!(payload_error_message(&serde_json::json!({"message":"denied"})), "denied");
    assert_eq!(
        payload_error_message(&serde_json::json!([{"message":"a"},{"message":"b"}])),
        "a; b"
    );
    assert_eq!(payload_error_message(&serde_json::json!("plain")), "plain");
    assert_eq!(payload_error_message(&serde_json::json!(42)), "unknown error");
}
