use super::*;

fn parse(raw: &str) -> ManufacturersQuery {
    let uri: axum::http::Uri = format!("/api/manufacturers?{raw}").parse().unwrap();
    Query::<ManufacturersQuery>::try_from_uri(&uri).unwrap().0
}

#[test]
fn active_defaults_to_true() {
    assert!(parse("").active);
    assert!(parse("active=true").active);
    assert!(!parse("active=false").active);
}

#[test]
fn unparseable_active_flag_is_rejected() {
    let uri: axum::http::Uri = "/api/manufacturers?active=maybe".parse().unwrap();
    assert!(Query::<ManufacturersQuery>::try_from_uri(&uri).is_err());
}
