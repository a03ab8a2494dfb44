use super::*;

// =============================================================
// debounce
// =============================================================

#[test]
fn latest_keystroke_commits() {
    let mut state = FilterState::default();
    let first = state.note_input("ace".to_owned());
    let second = state.note_input("acet".to_owned());
    assert!(!state.commit_input(first));
    assert_eq!(state.query, "");
    assert!(state.commit_input(second));
    assert_eq!(state.query, "acet");
}

#[test]
fn commit_without_change_is_a_no_op() {
    let mut state = FilterState::default();
    let ticket = state.note_input(String::new());
    assert!(!state.commit_input(ticket));
}

#[test]
fn submit_supersedes_pending_timer() {
    let mut state = FilterState::default();
    let ticket = state.note_input("acet".to_owned());
    state.submit("acetone".to_owned());
    assert!(!state.commit_input(ticket));
    assert_eq!(state.query, "acetone");
}

#[test]
fn new_query_clears_synonym_expansion() {
    let mut state = FilterState::default();
    state.submit("acetone".to_owned());
    state.expand_search();
    assert!(state.synonyms);
    let ticket = state.note_input("ethanol".to_owned());
    assert!(state.commit_input(ticket));
    assert!(!state.synonyms);
}

#[test]
fn expand_search_needs_a_query() {
    let mut state = FilterState::default();
    state.expand_search();
    assert!(!state.synonyms);
}

// =============================================================
// search sequence guard
// =============================================================

#[test]
fn stale_search_response_is_rejected() {
    let mut state = FilterState::default();
    let older = state.begin_search();
    let newer = state.begin_search();
    assert!(!state.is_current(older));
    assert!(state.is_current(newer));
}

// =============================================================
// filters
// =============================================================

#[test]
fn toggle_manufacturer_adds_then_removes() {
    let mut state = FilterState::default();
    state.toggle_manufacturer(3);
    state.toggle_manufacturer(1);
    assert_eq!(state.params().manufacturers, vec![1, 3]);
    state.toggle_manufacturer(3);
    assert_eq!(state.params().manufacturers, vec![1]);
}

#[test]
fn params_carry_every_filter() {
    let mut state = FilterState::default();
    state.submit("acetone".to_owned());
    state.expand_search();
    state.set_room(Some(4));
    let params = state.params();
    assert_eq!(params.query, "acetone");
    assert!(params.synonyms);
    assert_eq!(params.room, Some(4));
    assert!(params.manufacturers.is_empty());
}
