use super::*;
use crate::pages::order::parse_order_id;

#[test]
fn order_path_points_at_order_route() {
    assert_eq!(order_path(12), "/orders/12");
}

#[test]
fn order_path_id_parses_back() {
    let path = order_path(31);
    let raw = path.rsplit('/').next().unwrap_or_default();
    assert_eq!(parse_order_id(raw), Some(31));
}
