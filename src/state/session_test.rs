use super::*;

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_session_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.logged_in);
    assert_eq!(state.token(), None);
}

#[test]
fn restore_with_token_is_logged_in() {
    let state = SessionState::restore(Some("jwt".to_owned()));
    assert!(state.logged_in);
    assert_eq!(state.token().as_deref(), Some("jwt"));
}

#[test]
fn restore_ignores_missing_or_blank_token() {
    assert_eq!(SessionState::restore(None), SessionState::default());
    assert_eq!(SessionState::restore(Some("  ".to_owned())), SessionState::default());
}

#[test]
fn login_then_logout_flips_flag_and_clears_token() {
    let mut state = SessionState::default();
    state.login("jwt".to_owned());
    assert!(state.logged_in);
    assert_eq!(state.token().as_deref(), Some("jwt"));

    state.logout();
    assert!(!state.logged_in);
    assert_eq!(state.token, None);
}
