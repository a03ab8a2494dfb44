use super::*;

fn hit(name: &str, quantity: i64) -> SearchHit {
    SearchHit { chemical_name: name.to_owned(), formula: None, id: 0, quantity }
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn names(hits: &[SearchHit]) -> Vec<&str> {
    hits.iter().map(|h| h.chemical_name.as_str()).collect()
}

// =============================================================================
// query preparation
// =============================================================================

#[test]
fn clean_query_strips_slashes_and_whitespace() {
    assert_eq!(clean_query(" H2SO4/ "), "H2SO4");
    assert_eq!(clean_query("a/b/c"), "abc");
    assert_eq!(clean_query("   "), "");
}

#[test]
fn parse_id_list_skips_junk() {
    assert_eq!(parse_id_list("1, 2,,x,3"), vec![1, 2, 3]);
    assert!(parse_id_list("").is_empty());
}

#[test]
fn search_terms_keep_query_and_long_synonyms() {
    let synonyms = vec!["Acetone".to_owned(), "C3H6O".to_owned(), "Fe".to_owned(), "propanone".to_owned()];
    assert_eq!(search_terms("acetone", synonyms), vec!["acetone", "C3H6O", "propanone"]);
}

#[test]
fn search_terms_keep_short_query() {
    assert_eq!(search_terms("Fe", vec!["Fe".to_owned(), "Iron".to_owned()]), vec!["Fe", "Iron"]);
}

#[test]
fn search_terms_empty_query_matches_everything() {
    assert!(search_terms("", vec!["anything".to_owned()]).is_empty());
}

#[test]
fn filters_activity() {
    assert!(!SearchFilters::default().is_active());
    assert!(SearchFilters { room: Some(1), manufacturers: vec![] }.is_active());
    assert!(SearchFilters { room: None, manufacturers: vec![4] }.is_active());
}

// =============================================================================
// similarity
// =============================================================================

#[test]
fn longest_match_reports_offset_in_entry() {
    let block = longest_match(&chars("acetone"), &chars("2-acetone"));
    assert_eq!(block, Block { a: 0, b: 2, size: 7 });
}

#[test]
fn longest_match_empty_inputs() {
    assert_eq!(longest_match(&[], &chars("abc")).size, 0);
}

#[test]
fn ratio_matches_ratcliff_obershelp() {
    assert!((ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
    assert!((ratio("abcdef", "abXdef") - 10.0 / 12.0).abs() < 1e-9);
    assert!((ratio("", "") - 1.0).abs() < 1e-9);
    assert!(ratio("abc", "xyz").abs() < 1e-9);
}

#[test]
fn ratio_is_case_sensitive() {
    assert!(ratio("acetone", "acetone") > ratio("acetone", "Acetone"));
}

#[test]
fn similarity_lowercases_for_substring() {
    let s = similarity("acetone", "Acetone");
    assert_eq!(s.size, 7);
    assert_eq!(s.anchored, 7);
}

// =============================================================================
// ranking
// =============================================================================

#[test]
fn rank_prefers_exact_then_prefix_then_contained() {
    let mut hits = vec![hit("Diacetone alcohol", 9), hit("Acetone, HPLC grade", 1), hit("Acetone", 2)];
    rank("acetone", &mut hits);
    assert_eq!(names(&hits), vec!["Acetone", "Acetone, HPLC grade", "Diacetone alcohol"]);
}

#[test]
fn rank_longer_overlap_wins() {
    let mut hits = vec![hit("Sodium", 1), hit("Sodium chloride", 1)];
    rank("sodium chlor", &mut hits);
    assert_eq!(names(&hits), vec!["Sodium chloride", "Sodium"]);
}

#[test]
fn rank_without_query_orders_by_quantity_then_name() {
    let mut hits = vec![hit("Ethanol", 2), hit("Acetone", 5), hit("Benzene", 2)];
    rank("", &mut hits);
    assert_eq!(names(&hits), vec!["Acetone", "Benzene", "Ethanol"]);
}
