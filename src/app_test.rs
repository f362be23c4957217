use super::*;

#[test]
fn logged_in_flag_selects_logged_in_tree() {
    assert_eq!(route_tree_for(true), RouteTree::LoggedIn);
}

#[test]
fn logged_out_flag_selects_logged_out_tree() {
    assert_eq!(route_tree_for(false), RouteTree::LoggedOut);
}

#[test]
fn restored_session_picks_matching_tree() {
    let restored = SessionState::restore(Some("jwt".to_owned()));
    assert_eq!(route_tree_for(restored.logged_in), RouteTree::LoggedIn);
    let empty = SessionState::restore(None);
    assert_eq!(route_tree_for(empty.logged_in), RouteTree::LoggedOut);
}
