use super::*;

#[test]
fn error_messages_match_api_contract() {
    assert_eq!(UserError::NotFound(3).to_string(), "User not found");
    assert_eq!(UserError::InvalidAccess("Boss".into()).to_string(), "Invalid access level");
}

#[test]
fn access_labels_are_exact() {
    assert!(AccessLevel::parse("Full Access").is_ok());
    assert!(AccessLevel::parse("full access").is_err());
}
