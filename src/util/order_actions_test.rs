use super::*;

const ALL_STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Cooking,
    OrderStatus::Cooked,
    OrderStatus::PickedUp,
    OrderStatus::Delivered,
];

// =============================================================
// action_for
// =============================================================

#[test]
fn owner_accepts_pending_order_into_cooking() {
    let action = action_for(UserRole::Owner, OrderStatus::Pending).expect("action");
    assert_eq!(action.label, "Accept Order");
    assert_eq!(action.next_status, OrderStatus::Cooking);
}

#[test]
fn owner_marks_cooking_order_cooked() {
    let action = action_for(UserRole::Owner, OrderStatus::Cooking).expect("action");
    assert_eq!(action.label, "Order COOKED");
    assert_eq!(action.next_status, OrderStatus::Cooked);
}

#[test]
fn driver_picks_up_cooked_order() {
    let action = action_for(UserRole::Delivery, OrderStatus::Cooked).expect("action");
    assert_eq!(action.label, "Picked Up");
    assert_eq!(action.next_status, OrderStatus::PickedUp);
}

#[test]
fn driver_delivers_picked_up_order() {
    let action = action_for(UserRole::Delivery, OrderStatus::PickedUp).expect("action");
    assert_eq!(action.label, "Order DELIVERED");
    assert_eq!(action.next_status, OrderStatus::Delivered);
}

#[test]
fn client_never_gets_an_action() {
    for status in ALL_STATUSES {
        assert_eq!(action_for(UserRole::Client, status), None);
    }
}

#[test]
fn exactly_four_pairs_have_actions() {
    let count = UserRole::ALL
        .into_iter()
        .flat_map(|role| ALL_STATUSES.into_iter().map(move |status| (role, status)))
        .filter(|(role, status)| action_for(*role, *status).is_some())
        .count();
    assert_eq!(count, 4);
}

// =============================================================
// order_controls
// =============================================================

#[test]
fn pairs_without_action_render_status_label() {
    assert_eq!(
        order_controls(UserRole::Client, OrderStatus::Cooking),
        OrderControls::StatusLabel("Status: COOKING".to_owned())
    );
    assert_eq!(
        order_controls(UserRole::Owner, OrderStatus::Cooked),
        OrderControls::StatusLabel("Status: COOKED".to_owned())
    );
    assert_eq!(
        order_controls(UserRole::Delivery, OrderStatus::Delivered),
        OrderControls::StatusLabel("Status: DELIVERED".to_owned())
    );
}

#[test]
fn status_label_uses_wire_spelling() {
    assert_eq!(status_label(OrderStatus::PickedUp), "Status: PICKED_UP");
}

#[test]
fn order_controls_wraps_table_action() {
    match order_controls(UserRole::Owner, OrderStatus::Pending) {
        OrderControls::Action(action) => assert_eq!(action.next_status, OrderStatus::Cooking),
        OrderControls::StatusLabel(label) => panic!("unexpected label {label}"),
    }
}
