use super::*;
use time::macros::date;

fn acetone() -> ExportRow {
    ExportRow {
        sticker_number: 1001,
        chemical_name: "Acetone".into(),
        location: "Science Hall 101".into(),
        sub_location: "Shelf A".into(),
        msds: false,
        comment: None,
        storage_class: "Flammable".into(),
        alphabetical_name: "Acetone".into(),
        formula: Some("C3H6O".into()),
        last_updated: Some(date!(2025 - 03 - 06)),
        who_updated: Some("Anne".into()),
        quantity: 1.0,
        minimum_on_hand: Some(2.0),
        manufacturer: "Fisher Scientific".into(),
        product_number: Some("A123".into()),
        cas_number: Some("67-64-1".into()),
        barcode: None,
        dead: false,
    }
}

#[test]
fn empty_export_is_header_only() {
    let csv = encode_csv(&[]).unwrap();
    assert_eq!(
        csv,
        "Sticker Number,Chemical,Location,Sub-Location,MSDS,Comment,Storage Class,Alphabetized by,\
         Chemical Formula & Common Name,Last Updated,Who Updated,Quantity,Minimum Needed,Manufacturer,\
         Product Number,CAS Number,Barcode,Dead?\r\n"
    );
}

#[test]
fn row_matches_report_layout() {
    let csv = encode_csv(&[acetone()]).unwrap();
    let line = csv.lines().nth(1).unwrap();
    assert_eq!(
        line,
        "1001,Acetone,Science Hall 101,Shelf A,False,,Flammable,Acetone,C3H6O (Acetone),2025-03-06,Anne,1.0,2.0,\
         Fisher Scientific,A123,67-64-1,,False"
    );
}

#[test]
fn every_row_has_header_width() {
    let mut dead = acetone();
    dead.dead = true;
    dead.msds = true;
    dead.comment = Some("cap cracked, replace".into());
    let csv = encode_csv(&[acetone(), dead]).unwrap();
    assert!(csv.contains(",Shelf A,True,\"cap cracked, replace\","));
    assert!(csv.trim_end().ends_with(",True"));
}

#[test]
fn escape_field_quotes_when_needed() {
    assert_eq!(escape_field("plain"), "plain");
    assert_eq!(escape_field("a,b"), "\"a,b\"");
    assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
}

#[test]
fn floats_keep_a_decimal() {
    assert_eq!(format_float(1.0), "1.0");
    assert_eq!(format_float(2.5), "2.5");
    assert_eq!(format_float(0.0), "0.0");
}

#[test]
fn booleans_are_capitalized() {
    assert_eq!(format_bool(true), "True");
    assert_eq!(format_bool(false), "False");
}

#[test]
fn formula_column_falls_back_to_name() {
    assert_eq!(formula_common_name(Some("NaCl"), "Sodium chloride"), "NaCl (Sodium chloride)");
    assert_eq!(formula_common_name(Some("  "), "Mystery"), "Mystery");
    assert_eq!(formula_common_name(None, "Mystery"), "Mystery");
}

#[test]
fn missing_values_are_empty_fields() {
    let row = ExportRow { minimum_on_hand: None, last_updated: None, who_updated: None, ..acetone() };
    let csv = encode_csv(&[row]).unwrap();
    let line = csv.lines().nth(1).unwrap();
    assert!(line.contains("C3H6O (Acetone),,,1.0,,Fisher Scientific"));
}

#[test]
fn msds_column_is_a_boolean() {
    let with_sheet = ExportRow { msds: true, ..acetone() };
    let csv = encode_csv(&[acetone(), with_sheet]).unwrap();
    let msds: Vec<&str> = csv.lines().map(|line| line.split(',').nth(4).unwrap()).collect();
    assert_eq!(msds, ["MSDS", "False", "True"]);
}
