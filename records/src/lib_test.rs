use super::*;
use time::macros::date;

#[test]
fn access_level_serializes_with_wire_labels() {
    assert_eq!(serde_json::to_string(&AccessLevel::FullAccess).unwrap(), "\"Full Access\"");
    assert_eq!(serde_json::to_string(&AccessLevel::Editor).unwrap(), "\"Editor\"");
    let parsed: AccessLevel = serde_json::from_str("\"Visitor\"").unwrap();
    assert_eq!(parsed, AccessLevel::Visitor);
}

#[test]
fn access_level_parse_is_exact() {
    assert_eq!(AccessLevel::parse("Full Access").unwrap(), AccessLevel::FullAccess);
    assert!(AccessLevel::parse("full access").is_err());
    assert!(AccessLevel::parse("Admin").is_err());
    assert_eq!(AccessLevel::parse("Root").unwrap_err().to_string(), "invalid access level: Root");
}

#[test]
fn access_level_gates() {
    assert!(!AccessLevel::Visitor.can_edit());
    assert!(AccessLevel::Editor.can_edit());
    assert!(AccessLevel::FullAccess.can_edit());
    assert!(!AccessLevel::Editor.is_full());
    assert!(AccessLevel::FullAccess.is_full());
}

#[test]
fn date_format_and_parse_use_iso_days() {
    assert_eq!(format_date(date!(2025 - 03 - 06)).unwrap(), "2025-03-06");
    assert_eq!(parse_date(" 2023-11-30 ").unwrap(), date!(2023 - 11 - 30));
    assert!(parse_date("2023-13-01").is_err());
    assert!(parse_date("03/06/2025").is_err());
}

#[test]
fn bottle_dates_accept_null_and_empty() {
    let json = serde_json::json!({
        "id": 1, "sticker": 1001, "product_number": null, "location": "Science Hall 101",
        "sub_location": "Shelf A", "sub_location_id": 2, "manufacturer": "Fisher Scientific",
        "manufacturer_id": 3, "dead": false, "last_updated": "", "who_updated": null, "msds": true
    });
    let bottle: Bottle = serde_json::from_value(json).unwrap();
    assert_eq!(bottle.last_updated, None);

    let json = serde_json::json!({
        "id": 1, "sticker": 1001, "product_number": "A123", "location": "Science Hall 101",
        "sub_location": "Shelf A", "sub_location_id": 2, "manufacturer": "Fisher Scientific",
        "manufacturer_id": 3, "dead": true, "last_updated": "2022-01-15", "who_updated": "Anne", "msds": false
    });
    let bottle: Bottle = serde_json::from_value(json).unwrap();
    assert_eq!(bottle.last_updated, Some(date!(2022 - 01 - 15)));
    let back = serde_json::to_value(&bottle).unwrap();
    assert_eq!(back["last_updated"], "2022-01-15");
}

#[test]
fn sub_location_input_uses_camel_case_location_id() {
    let input: SubLocationInput = serde_json::from_str(r#"{"name":"Shelf A","locationId":4}"#).unwrap();
    assert_eq!(input.location_id, Some(4));
    let out = serde_json::to_value(&input).unwrap();
    assert_eq!(out["locationId"], 4);
}

#[test]
fn patches_omit_unset_fields() {
    let patch = InventoryPatch { msds: Some(true), ..InventoryPatch::default() };
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "msds": true }));
}

#[test]
fn id_from_value_accepts_numbers_and_numeric_strings() {
    assert_eq!(id_from_value(&serde_json::json!(7)), Some(7));
    assert_eq!(id_from_value(&serde_json::json!(" 12 ")), Some(12));
    assert_eq!(id_from_value(&serde_json::json!("abc")), None);
    assert_eq!(id_from_value(&serde_json::json!(1.5)), None);
    assert_eq!(id_from_value(&serde_json::json!(null)), None);
}

#[test]
fn location_label_joins_building_and_room() {
    let loc = Location { location_id: 1, building: "Science Hall".into(), room: "101".into(), sub_locations: vec![] };
    assert_eq!(loc.label(), "Science Hall 101");
}
