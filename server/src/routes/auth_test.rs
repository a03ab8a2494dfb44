use super::*;
use crate::state::test_helpers::test_app_state;

fn parts_with_cookie(cookie: Option<&str>) -> Parts {
    let mut builder = axum::http::Request::builder().uri("/api/user");
    if let Some(cookie) = cookie {
        builder = builder.header(axum::http::header::COOKIE, cookie);
    }
    builder.body(()).unwrap().into_parts().0
}

// =============================================================================
// access gates
// =============================================================================

#[test]
fn editor_gate() {
    assert!(ensure_access(AccessLevel::Visitor, AccessLevel::can_edit).is_err());
    assert!(ensure_access(AccessLevel::Editor, AccessLevel::can_edit).is_ok());
    assert!(ensure_access(AccessLevel::FullAccess, AccessLevel::can_edit).is_ok());
}

#[test]
fn full_access_gate() {
    assert!(matches!(ensure_access(AccessLevel::Editor, AccessLevel::is_full), Err(ApiError::Forbidden)));
    assert!(ensure_access(AccessLevel::FullAccess, AccessLevel::is_full).is_ok());
}

// =============================================================================
// extractors without a session
// =============================================================================

#[tokio::test]
async fn missing_cookie_is_unauthorized() {
    let state = test_app_state();
    let mut parts = parts_with_cookie(None);
    let result = AuthUser::from_request_parts(&mut parts, &state).await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn empty_cookie_is_unauthorized() {
    let state = test_app_state();
    let mut parts = parts_with_cookie(Some("session_token="));
    let result = Editor::from_request_parts(&mut parts, &state).await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn full_access_without_cookie_is_unauthorized() {
    let state = test_app_state();
    let mut parts = parts_with_cookie(Some("other=1"));
    let result = FullAccess::from_request_parts(&mut parts, &state).await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

// =============================================================================
// login / callback without a provider
// =============================================================================

#[tokio::test]
async fn login_without_provider_is_unavailable() {
    let response = login(State(test_app_state())).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn callback_without_provider_is_unavailable() {
    let params = CallbackQuery { code: Some("abc".into()), state: Some("xyz".into()), error: None };
    let response = callback(State(test_app_state()), CookieJar::new(), Query(params)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_attributes() {
    let c = cookie(COOKIE_NAME, "tok".into(), true);
    assert_eq!(c.name(), "session_token");
    assert_eq!(c.value(), "tok");
    assert_eq!(c.path(), Some("/"));
    assert_eq!(c.http_only(), Some(true));
    assert_eq!(c.secure(), Some(true));
    assert_eq!(c.same_site(), Some(SameSite::Lax));
}

#[test]
fn expired_cookie_clears_value() {
    let c = expired_cookie(COOKIE_NAME, false);
    assert_eq!(c.value(), "");
    assert_eq!(c.max_age(), Some(Duration::ZERO));
}

#[test]
fn oidc_state_cookie_expires_in_ten_minutes() {
    let c = expiring_cookie(OIDC_STATE_COOKIE_NAME, "st".into(), false, Duration::minutes(10));
    assert_eq!(c.name(), "oidc_state");
    assert_eq!(c.max_age(), Some(Duration::minutes(10)));
    assert_eq!(c.http_only(), Some(true));
}
