use super::*;

#[test]
fn required_trims() {
    assert_eq!(required("Name", "  Acetone ").unwrap(), "Acetone");
    assert_eq!(required("Name", "   ").unwrap_err(), "Name is required");
}

#[test]
fn required_id_names_the_field() {
    assert_eq!(required_id("Storage Class", Some(4)).unwrap(), 4);
    assert_eq!(required_id("Storage Class", None).unwrap_err(), "Storage Class is required");
}

#[test]
fn sticker_must_be_positive_integer() {
    assert_eq!(parse_sticker(" 1001 ").unwrap(), 1001);
    assert_eq!(parse_sticker("").unwrap_err(), "Sticker Number is required");
    assert!(parse_sticker("10a").is_err());
    assert!(parse_sticker("0").is_err());
    assert!(parse_sticker("-4").is_err());
}

#[test]
fn optional_text_drops_blank() {
    assert_eq!(optional_text(" "), None);
    assert_eq!(optional_text(" C3H6O "), Some("C3H6O".to_owned()));
}

#[test]
fn parse_id_handles_placeholder() {
    assert_eq!(parse_id(""), None);
    assert_eq!(parse_id("12"), Some(12));
}
