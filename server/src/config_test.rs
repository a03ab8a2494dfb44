use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_requires_database_url() {
    let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

    let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/cheminv")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(cfg.session_ttl_hours, DEFAULT_SESSION_TTL_HOURS);
    assert_eq!(cfg.pubchem_base_url, DEFAULT_PUBCHEM_BASE_URL);
    assert!(cfg.oidc.is_none());
    assert!(!cfg.auth_bypass);
    assert!(!cfg.cookie_secure);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/cheminv"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", " 12 "),
        ("SESSION_TTL_HOURS", "24"),
        ("CHEMINV_AUTH_BYPASS", "yes"),
        ("PUBCHEM_BASE_URL", "http://pubchem.test/"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 12);
    assert_eq!(cfg.session_ttl_hours, 24);
    assert!(cfg.auth_bypass);
    assert_eq!(cfg.pubchem_base_url, "http://pubchem.test");
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() });
}

#[test]
fn oidc_requires_all_four_vars() {
    let partial = AppConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db"),
        ("CHEMINV_OIDC_CLIENT_ID", "id"),
        ("CHEMINV_OIDC_ISSUER", "https://idp.test"),
    ]))
    .unwrap();
    assert!(partial.oidc.is_none());

    let full = AppConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db"),
        ("CHEMINV_OIDC_CLIENT_ID", "id"),
        ("CHEMINV_OIDC_CLIENT_SECRET", "secret"),
        ("CHEMINV_OIDC_ISSUER", "https://idp.test/realms/lab/"),
        ("CHEMINV_OIDC_REDIRECT_URI", "https://inventory.test/auth/callback"),
    ]))
    .unwrap();
    let oidc = full.oidc.unwrap();
    assert_eq!(oidc.issuer, "https://idp.test/realms/lab");
    assert!(full.cookie_secure, "https redirect implies secure cookies");
}

#[test]
fn cookie_secure_explicit_value_wins() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db"),
        ("COOKIE_SECURE", "off"),
        ("CHEMINV_OIDC_CLIENT_ID", "id"),
        ("CHEMINV_OIDC_CLIENT_SECRET", "secret"),
        ("CHEMINV_OIDC_ISSUER", "https://idp.test"),
        ("CHEMINV_OIDC_REDIRECT_URI", "https://inventory.test/auth/callback"),
    ]))
    .unwrap();
    assert!(!cfg.cookie_secure);
}

#[test]
fn parse_bool_variants() {
    for val in ["1", "true", "YES", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
    for val in ["0", "false", "No", "OFF"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}
