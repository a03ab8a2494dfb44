use super::*;

#[test]
fn default_has_no_dialog() {
    let state = UiState::default();
    assert_eq!(state.modal, None);
    assert_eq!(state.refresh_seq, 0);
}

#[test]
fn open_replaces_current_dialog() {
    let mut state = UiState::default();
    state.open(Modal::Chemical(7));
    state.open(Modal::ChemicalEdit(7));
    assert!(state.is_open(Modal::ChemicalEdit(7)));
    assert!(!state.is_open(Modal::Chemical(7)));
}

#[test]
fn close_bumps_refresh() {
    let mut state = UiState::default();
    state.open(Modal::DeadBottles);
    state.close();
    assert_eq!(state.modal, None);
    assert_eq!(state.refresh_seq, 1);
    state.refresh();
    assert_eq!(state.refresh_seq, 2);
}

#[test]
fn access_requirements() {
    assert!(!Modal::Chemical(1).requires_editor());
    assert!(Modal::ChemicalEdit(1).requires_editor());
    assert!(Modal::AddChemical.requires_editor());
    assert!(Modal::ManageUsers.requires_full_access());
    assert!(!Modal::Locations.requires_full_access());
}
