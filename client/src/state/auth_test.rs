use super::*;

#[test]
fn pending_has_no_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert_eq!(state.email(), None);
}

#[test]
fn resolve_clears_loading() {
    let mut state = AuthState::pending();
    state.resolve(Some(User { email: "admin".into() }));
    assert!(!state.loading);
    assert_eq!(state.email(), Some("admin"));

    state.resolve(None);
    assert_eq!(state, AuthState { user: None, loading: false });
}
