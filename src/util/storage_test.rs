use super::*;

#[test]
fn token_key_matches_persisted_name() {
    assert_eq!(TOKEN_STORAGE_KEY, "nuber-token");
}

#[test]
fn normalize_token_trims_and_drops_blank_values() {
    assert_eq!(normalize_token(Some("  jwt ".to_owned())).as_deref(), Some("jwt"));
    assert_eq!(normalize_token(Some("   ".to_owned())), None);
    assert_eq!(normalize_token(None), None);
}

#[test]
fn native_build_has_no_persisted_token() {
    save_token("jwt");
    assert_eq!(load_token(), None);
    remove_token();
}
