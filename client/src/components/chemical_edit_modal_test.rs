use super::*;

#[test]
fn build_patch_trims_fields() {
    let patch = build_patch(" Acetone ", " C3H6O ", Some(2)).unwrap();
    assert_eq!(patch.chemical_name.as_deref(), Some("Acetone"));
    assert_eq!(patch.chemical_formula.as_deref(), Some("C3H6O"));
    assert_eq!(patch.storage_class_id, Some(2));
}

#[test]
fn build_patch_requires_name_and_class() {
    assert_eq!(build_patch("", "", Some(1)).unwrap_err(), "Chemical Name is required");
    assert_eq!(build_patch("Acetone", "", None).unwrap_err(), "Storage Class is required");
}
