use super::*;

#[test]
fn build_patch_sends_every_field() {
    let patch = build_patch("1001", " A18-4 ", Some(10), Some(2), true).unwrap();
    assert_eq!(patch.sticker_number, Some(1001));
    assert_eq!(patch.product_number.as_deref(), Some("A18-4"));
    assert_eq!(patch.sub_location_id, Some(10));
    assert_eq!(patch.manufacturer_id, Some(2));
    assert_eq!(patch.msds, Some(true));
}

#[test]
fn blank_product_number_clears_it() {
    let patch = build_patch("1001", "  ", Some(10), Some(2), false).unwrap();
    assert_eq!(patch.product_number.as_deref(), Some(""));
}

#[test]
fn build_patch_rejects_bad_input() {
    assert!(build_patch("abc", "", Some(10), Some(2), false).is_err());
    assert_eq!(build_patch("5", "", None, Some(2), false).unwrap_err(), "Sub-Location is required");
    assert_eq!(build_patch("5", "", Some(1), None, false).unwrap_err(), "Manufacturer is required");
}
