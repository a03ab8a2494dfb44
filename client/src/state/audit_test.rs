use super::*;

fn bottle(inventory_id: i32, sticker_number: i64) -> ShelfBottle {
    ShelfBottle { inventory_id, sticker_number, chemical_name: "Ethanol".to_owned() }
}

fn found(inventory_id: i32, sub_location_id: i32) -> StickerLookup {
    StickerLookup {
        inventory_id,
        sub_location_id,
        location_name: "Science 101".to_owned(),
        sub_location_name: "Shelf B".to_owned(),
    }
}

fn started() -> AuditState {
    let mut audit = AuditState::default();
    audit.start(7, vec![bottle(1, 1001), bottle(2, 1002), bottle(3, 1003)]);
    audit
}

#[test]
fn nothing_scanned_means_everything_is_unscanned() {
    assert_eq!(started().unscanned(), vec![1, 2, 3]);
}

#[test]
fn confirmed_bottles_drop_out_of_unscanned() {
    let mut audit = started();
    audit.record("1002", &found(2, 7), false);
    assert!(audit.is_scanned(2));
    assert_eq!(audit.unscanned(), vec![1, 3]);
    assert_eq!(audit.log, vec![Scan::Confirmed("1002".to_owned())]);
}

#[test]
fn bottle_from_another_shelf_needs_a_move() {
    let audit = started();
    assert!(audit.needs_move(&found(9, 4)));
    assert!(!audit.needs_move(&found(1, 7)));
}

#[test]
fn nothing_needs_a_move_before_a_shelf_is_chosen() {
    assert!(!AuditState::default().needs_move(&found(9, 4)));
}

#[test]
fn moved_bottle_is_logged_with_its_old_place() {
    let mut audit = started();
    audit.record(" 2001 ", &found(9, 4), true);
    assert_eq!(audit.log[0].message(), "2001: moved from Science 101 / Shelf B");
    assert_eq!(audit.unscanned(), vec![1, 2, 3]);
}

#[test]
fn unknown_sticker_is_logged_only() {
    let mut audit = started();
    audit.record_unknown("404");
    assert_eq!(audit.log[0].message(), "404: sticker not found");
    assert_eq!(audit.unscanned().len(), 3);
}

#[test]
fn start_forgets_earlier_progress() {
    let mut audit = started();
    audit.record("1001", &found(1, 7), false);
    audit.start(8, vec![bottle(5, 1005)]);
    assert_eq!(audit.sub_location_id, Some(8));
    assert!(audit.log.is_empty());
    assert!(!audit.is_scanned(1));
    assert_eq!(audit.unscanned(), vec![5]);
}
