//! Auth routes: OIDC sign-in, logout, current user, and access extractors.
//!
//! DESIGN
//! ======
//! Handlers declare the access they need by extractor type: [`AuthUser`]
//! for any signed-in user, [`Editor`] for `Editor` or `Full Access`, and
//! [`FullAccess`] for user administration. A missing or expired session is
//! a 401; a valid session with too little access is a 403.

use axum::extract::{FromRef, FromRequestParts, Query, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use records::{AccessLevel, CurrentUser};
use serde::Deserialize;
use time::Duration;

use super::error::{ApiError, ApiResult};
use crate::services::{auth as auth_svc, session, user as user_svc};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const OIDC_STATE_COOKIE_NAME: &str = "oidc_state";

fn cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn expiring_cookie(name: &'static str, value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    let mut c = cookie(name, value, secure);
    c.set_max_age(max_age);
    c
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    expiring_cookie(name, String::new(), secure, Duration::ZERO)
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

pub(crate) fn ensure_access(access: AccessLevel, allowed: fn(AccessLevel) -> bool) -> ApiResult<()> {
    if allowed(access) { Ok(()) } else { Err(ApiError::Forbidden) }
}

/// Signed-in user with `Editor` or `Full Access`.
pub struct Editor(pub AuthUser);

impl<S> FromRequestParts<S> for Editor
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        ensure_access(auth.user.access, AccessLevel::can_edit)?;
        Ok(Self(auth))
    }
}

/// Signed-in user with `Full Access`.
pub struct FullAccess(pub AuthUser);

impl<S> FromRequestParts<S> for FullAccess
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        ensure_access(auth.user.access, AccessLevel::is_full)?;
        Ok(Self(auth))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn start_session(state: &AppState, jar: CookieJar, user_id: i32) -> ApiResult<Response> {
    let token = session::create_session(&state.pool, user_id, state.config.session_ttl_hours).await?;
    let secure = state.config.cookie_secure;
    let jar = jar
        .add(cookie(COOKIE_NAME, token, secure))
        .add(expired_cookie(OIDC_STATE_COOKIE_NAME, secure));
    Ok((jar, Redirect::temporary("/")).into_response())
}

/// Sign in the fixed testing profile without a provider.
async fn bypass_login(state: &AppState) -> ApiResult<Response> {
    let user_id = auth_svc::upsert_user(&state.pool, auth_svc::BYPASS_EMAIL, auth_svc::BYPASS_NAME, AccessLevel::FullAccess)
        .await
        .map_err(ApiError::internal)?;
    user_svc::update_access(&state.pool, user_id, AccessLevel::FullAccess.as_str()).await?;
    tracing::warn!(email = auth_svc::BYPASS_EMAIL, "auth bypass sign-in");
    start_session(state, CookieJar::new(), user_id).await
}

async fn endpoints(state: &AppState, issuer: &str) -> Result<auth_svc::OidcEndpoints, auth_svc::AuthError> {
    state
        .oidc_endpoints
        .get_or_try_init(|| auth_svc::discover(&state.http, issuer))
        .await
        .cloned()
}

/// `GET /auth/login`: redirect to the identity provider (or sign in directly under bypass).
pub async fn login(State(state): State<AppState>) -> ApiResult<Response> {
    if state.config.auth_bypass {
        return bypass_login(&state).await;
    }
    let Some(config) = &state.config.oidc else {
        return Ok((StatusCode::SERVICE_UNAVAILABLE, "Sign-in is not configured").into_response());
    };

    let endpoints = endpoints(&state, &config.issuer).await.map_err(ApiError::internal)?;
    let oidc_state = session::generate_token();
    let url = auth_svc::authorize_url(&endpoints, config, &oidc_state).map_err(ApiError::internal)?;

    let state_cookie =
        expiring_cookie(OIDC_STATE_COOKIE_NAME, oidc_state, state.config.cookie_secure, Duration::minutes(10));
    Ok((CookieJar::new().add(state_cookie), Redirect::temporary(&url)).into_response())
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

/// `GET /auth/callback`: verify state, exchange code, upsert user, set cookie, redirect to `/`.
pub async fn callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> ApiResult<Response> {
    let Some(config) = &state.config.oidc else {
        return Ok((StatusCode::SERVICE_UNAVAILABLE, "Sign-in is not configured").into_response());
    };
    if let Some(error) = params.error {
        tracing::warn!(%error, "identity provider returned an error");
        return Err(ApiError::Unauthorized);
    }

    let expected = jar.get(OIDC_STATE_COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    match params.state.as_deref() {
        Some(received) if !expected.is_empty() && received == expected => {}
        _ => return Err(ApiError::bad_request("invalid oidc state")),
    }
    let code = params.code.ok_or_else(|| ApiError::bad_request("missing authorization code"))?;

    let endpoints = endpoints(&state, &config.issuer).await.map_err(ApiError::internal)?;
    let access_token = auth_svc::exchange_code(&state.http, &endpoints, config, &code)
        .await
        .map_err(ApiError::internal)?;
    let info = auth_svc::fetch_userinfo(&state.http, &endpoints, &access_token)
        .await
        .map_err(ApiError::internal)?;

    let user_id = match auth_svc::upsert_user(&state.pool, &info.email, &info.display_name(), AccessLevel::Visitor).await {
        Ok(id) => id,
        Err(auth_svc::AuthError::Inactive) => return Err(ApiError::Forbidden),
        Err(e) => return Err(ApiError::internal(e)),
    };
    tracing::info!(user_id, email = %info.email, "user signed in");
    start_session(&state, jar, user_id).await
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed");
    }
    let jar = CookieJar::new().add(expired_cookie(COOKIE_NAME, state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /api/user`: name and access level of the signed-in user.
pub async fn current_user(auth: AuthUser) -> Json<CurrentUser> {
    Json(CurrentUser { name: auth.user.name, access: auth.user.access })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
