use super::*;
use records::SubLocation;

fn sub(id: i32, name: &str) -> SubLocation {
    SubLocation { sub_location_id: id, sub_location_name: name.to_owned() }
}

fn fixtures() -> Vec<Location> {
    vec![
        Location {
            location_id: 1,
            building: "Science Hall".to_owned(),
            room: "101".to_owned(),
            sub_locations: vec![sub(10, "Shelf A"), sub(11, "Shelf B")],
        },
        Location {
            location_id: 2,
            building: "Science Hall".to_owned(),
            room: "102".to_owned(),
            sub_locations: vec![sub(20, "Cabinet")],
        },
        Location { location_id: 3, building: "Annex".to_owned(), room: "1".to_owned(), sub_locations: vec![] },
    ]
}

#[test]
fn defaults_to_first_location_and_sub() {
    assert_eq!(reconcile(&fixtures(), None, None), (Some(1), Some(10)));
}

#[test]
fn empty_list_selects_nothing() {
    assert_eq!(reconcile(&[], Some(1), Some(10)), (None, None));
}

#[test]
fn changing_location_resets_foreign_sub() {
    assert_eq!(reconcile(&fixtures(), Some(2), Some(11)), (Some(2), Some(20)));
}

#[test]
fn matching_sub_is_kept() {
    assert_eq!(reconcile(&fixtures(), Some(1), Some(11)), (Some(1), Some(11)));
}

#[test]
fn location_inferred_from_sub() {
    assert_eq!(reconcile(&fixtures(), None, Some(20)), (Some(2), Some(20)));
}

#[test]
fn location_without_subs() {
    assert_eq!(reconcile(&fixtures(), Some(3), Some(10)), (Some(3), None));
}
