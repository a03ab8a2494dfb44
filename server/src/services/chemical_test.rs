use super::*;

fn bottle(id: i32, dead: bool) -> Bottle {
    Bottle {
        id,
        sticker: 1000 + i64::from(id),
        product_number: Some("A123".to_owned()),
        location: "Science Hall 101".to_owned(),
        sub_location: "Shelf A".to_owned(),
        sub_location_id: 1,
        manufacturer: "Fisher Scientific".to_owned(),
        manufacturer_id: 1,
        dead,
        last_updated: None,
        who_updated: None,
        msds: false,
    }
}

#[test]
fn partition_counts_live_and_shows_live_by_default() {
    let (quantity, shown) = partition_bottles(vec![bottle(1, false), bottle(2, true), bottle(3, false)], false);
    assert_eq!(quantity, 2);
    assert_eq!(shown.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn partition_dead_view_still_counts_live() {
    let (quantity, shown) = partition_bottles(vec![bottle(1, false), bottle(2, true)], true);
    assert_eq!(quantity, 1);
    assert_eq!(shown.len(), 1);
    assert!(shown[0].dead);
}

#[test]
fn partition_empty() {
    let (quantity, shown) = partition_bottles(Vec::new(), false);
    assert_eq!(quantity, 0);
    assert!(shown.is_empty());
}

#[test]
fn error_messages_match_api_contract() {
    assert_eq!(ChemicalError::NotFound(4).to_string(), "Chemical not found");
    assert_eq!(ChemicalError::MissingFields.to_string(), "Missing required fields");
    assert_eq!(ChemicalError::InvalidReference("storage_class_id").to_string(), "Invalid storage_class_id");
}

#[test]
fn bottle_query_fragments_compose() {
    let sql = format!("SELECT {BOTTLE_COLUMNS} {BOTTLE_JOINS}");
    assert!(sql.contains("FROM inventory i"));
    assert!(sql.contains("AS manufacturer_name"));
    assert!(sql.contains("JOIN locations l"));
}
