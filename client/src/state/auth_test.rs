use super::*;

fn signed_in(access: AccessLevel) -> AuthState {
    AuthState {
        user: Some(CurrentUser { name: "Anne Admin".to_owned(), access }),
        loading: false,
        msds_url: String::new(),
    }
}

#[test]
fn signed_out_has_no_access() {
    let state = AuthState::default();
    assert_eq!(state.access(), None);
    assert!(!state.can_edit());
    assert!(!state.is_full());
    assert_eq!(state.display_name(), "Guest");
}

#[test]
fn visitor_cannot_edit() {
    let state = signed_in(AccessLevel::Visitor);
    assert!(!state.can_edit());
    assert!(!state.is_full());
}

#[test]
fn editor_can_edit_but_is_not_full() {
    let state = signed_in(AccessLevel::Editor);
    assert!(state.can_edit());
    assert!(!state.is_full());
}

#[test]
fn full_access_can_do_everything() {
    let state = signed_in(AccessLevel::FullAccess);
    assert!(state.can_edit());
    assert!(state.is_full());
    assert_eq!(state.display_name(), "Anne Admin");
}
