use super::*;

// =============================================================
// search query
// =============================================================

#[test]
fn search_params_default_sends_only_query() {
    let params = SearchParams::default();
    assert_eq!(params.query_pairs(), vec![("query", String::new())]);
}

#[test]
fn search_params_include_active_filters() {
    let params = SearchParams {
        query: " acetone ".to_owned(),
        synonyms: true,
        room: Some(4),
        manufacturers: vec![2, 9],
    };
    assert_eq!(
        params.query_pairs(),
        vec![
            ("query", "acetone".to_owned()),
            ("synonyms", "true".to_owned()),
            ("room", "4".to_owned()),
            ("manufacturers", "2,9".to_owned()),
        ]
    );
}

#[test]
fn list_queries() {
    assert_eq!(chemicals_query(true), vec![("dead", "true".to_owned())]);
    assert_eq!(manufacturers_query(false), vec![("active", "false".to_owned())]);
    assert_eq!(text_query("sticker_number", "1001"), vec![("sticker_number", "1001".to_owned())]);
}

// =============================================================
// endpoints
// =============================================================

#[test]
fn id_endpoints() {
    assert_eq!(update_chemical_endpoint(7), "/api/update_chemical/7");
    assert_eq!(delete_chemical_endpoint(7), "/api/delete_chemical/7");
    assert_eq!(update_inventory_endpoint(3), "/api/update_inventory/3");
    assert_eq!(location_endpoint(1), "/api/locations/1");
    assert_eq!(sublocation_endpoint(2), "/api/sublocations/2");
    assert_eq!(manufacturer_endpoint(5), "/api/manufacturers/5");
    assert_eq!(storage_class_endpoint(6), "/api/storage_classes/6");
}

// =============================================================
// failure messages
// =============================================================

#[test]
fn failure_message_prefers_error_field() {
    let body = serde_json::json!({ "error": "Sticker number already exists" });
    assert_eq!(failure_message(400, Some(&body)), "Sticker number already exists");
}

#[test]
fn failure_message_falls_back_to_message_field() {
    let body = serde_json::json!({ "errors": { "room": "Room is required" }, "message": "Validation errors" });
    assert_eq!(failure_message(400, Some(&body)), "Validation errors");
}

#[test]
fn failure_message_without_body_uses_status() {
    assert_eq!(failure_message(500, None), "request failed: 500");
    let empty = serde_json::json!({});
    assert_eq!(failure_message(404, Some(&empty)), "request failed: 404");
}
