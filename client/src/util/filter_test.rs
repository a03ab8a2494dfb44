use super::*;
use records::Manufacturer;

#[test]
fn includes_ci_ignores_case() {
    assert!(includes_ci("Science Hall 101", "hall"));
    assert!(includes_ci("Science Hall 101", "SCIENCE"));
    assert!(!includes_ci("Science Hall 101", "lab"));
}

#[test]
fn empty_needle_matches_all() {
    assert!(includes_ci("anything", ""));
    assert!(includes_ci("", "   "));
}

#[test]
fn filter_items_keeps_order() {
    let items = vec![
        Manufacturer { id: 1, name: "Fisher Scientific".to_owned() },
        Manufacturer { id: 2, name: "Sigma-Aldrich".to_owned() },
        Manufacturer { id: 3, name: "Thermo Fisher".to_owned() },
    ];
    let kept = filter_items(&items, "fisher", |m| m.name.clone());
    assert_eq!(kept.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 3]);
}
