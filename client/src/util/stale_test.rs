use super::*;
use time::macros::date;

fn bottle(id: i32, last_updated: Option<Date>) -> Bottle {
    Bottle {
        id,
        sticker: 1000 + i64::from(id),
        product_number: None,
        location: "Science Hall 101".to_owned(),
        sub_location: "Shelf A".to_owned(),
        sub_location_id: 1,
        manufacturer: "Fisher Scientific".to_owned(),
        manufacturer_id: 1,
        dead: true,
        last_updated,
        who_updated: None,
        msds: false,
    }
}

fn chemical(name: &str, inventory: Vec<Bottle>) -> Chemical {
    Chemical {
        id: 1,
        chemical_name: name.to_owned(),
        formula: None,
        storage_class: "Unknown".to_owned(),
        storage_class_id: 1,
        quantity: 0,
        inventory,
    }
}

// =============================================================
// cutoff
// =============================================================

#[test]
fn exactly_two_years_is_not_stale() {
    let today = date!(2026 - 10 - 16);
    assert!(!is_stale(Some(date!(2024 - 10 - 16)), today));
    assert!(is_stale(Some(date!(2024 - 10 - 15)), today));
}

#[test]
fn missing_date_is_never_stale() {
    assert!(!is_stale(None, date!(2026 - 10 - 16)));
}

#[test]
fn leap_day_rolls_forward() {
    assert_eq!(two_years_before(date!(2028 - 02 - 29)), date!(2026 - 03 - 01));
    assert_eq!(two_years_before(date!(2026 - 03 - 01)), date!(2024 - 03 - 01));
}

// =============================================================
// listing
// =============================================================

#[test]
fn stale_rows_sorted_oldest_first() {
    let today = date!(2026 - 10 - 16);
    let chemicals = vec![
        chemical("Acetone", vec![bottle(1, Some(date!(2023 - 05 - 01))), bottle(2, Some(date!(2026 - 01 - 01)))]),
        chemical("Toluene", vec![bottle(3, Some(date!(2020 - 02 - 10))), bottle(4, None)]),
    ];
    let rows = stale_dead_bottles(&chemicals, today);
    let ids: Vec<i32> = rows.iter().map(|r| r.bottle.id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(rows[0].chemical_name, "Toluene");
}

#[test]
fn live_bottles_are_skipped() {
    let today = date!(2026 - 10 - 16);
    let mut live = bottle(5, Some(date!(2019 - 01 - 01)));
    live.dead = false;
    let rows = stale_dead_bottles(&[chemical("Acetone", vec![live])], today);
    assert!(rows.is_empty());
}
