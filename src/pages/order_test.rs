use super::*;

#[test]
fn parse_order_id_accepts_numeric_route_param() {
    assert_eq!(parse_order_id("42"), Some(42));
    assert_eq!(parse_order_id(" 7 "), Some(7));
}

#[test]
fn parse_order_id_rejects_non_numeric_values() {
    assert_eq!(parse_order_id("abc"), None);
    assert_eq!(parse_order_id(""), None);
    assert_eq!(parse_order_id("4.5"), None);
}
