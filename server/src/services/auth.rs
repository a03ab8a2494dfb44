//! OIDC sign-in service: discovery, code exchange, userinfo, user upsert.
//!
//! DESIGN
//! ======
//! The server is a plain authorization-code client. Provider endpoints are
//! discovered once from `{issuer}/.well-known/openid-configuration` and cached
//! in `AppState`. Users are keyed by the email claim; first sign-in creates a
//! `Visitor` that a full-access user can promote later.

use records::AccessLevel;
use reqwest::Url;
use sqlx::{PgPool, Row};

use crate::config::OidcConfig;

pub const OIDC_SCOPES: &str = "openid email profile";

/// Fixed identity used when `CHEMINV_AUTH_BYPASS` is enabled.
pub const BYPASS_NAME: &str = "Anne Admin";
pub const BYPASS_EMAIL: &str = "anne-admin@example.com";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("oidc discovery failed: {0}")]
    Discovery(String),
    #[error("oidc token exchange failed: {0}")]
    TokenExchange(String),
    #[error("oidc userinfo failed: {0}")]
    UserInfo(String),
    #[error("account disabled")]
    Inactive,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Subset of the provider metadata document that the flow needs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct OidcEndpoints {
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Claims read from the userinfo endpoint.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub name: Option<String>,
    pub preferred_username: Option<String>,
}

impl UserInfo {
    /// Display name: `name`, else `preferred_username`, else the email local part.
    #[must_use]
    pub fn display_name(&self) -> String {
        fn claim(value: &Option<String>) -> Option<&str> {
            value.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }
        claim(&self.name)
            .or_else(|| claim(&self.preferred_username))
            .map_or_else(
                || self.email.split('@').next().unwrap_or_default().to_owned(),
                ToOwned::to_owned,
            )
    }
}

#[must_use]
pub fn discovery_url(issuer: &str) -> String {
    format!("{}/.well-known/openid-configuration", issuer.trim_end_matches('/'))
}

/// Fetch provider metadata.
pub async fn discover(http: &reqwest::Client, issuer: &str) -> Result<OidcEndpoints, AuthError> {
    let resp = http
        .get(discovery_url(issuer))
        .send()
        .await
        .map_err(|e| AuthError::Discovery(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(AuthError::Discovery(format!("status {}", resp.status())));
    }
    resp.json::<OidcEndpoints>()
        .await
        .map_err(|e| AuthError::Discovery(e.to_string()))
}

/// Build the provider authorization URL for a CSRF `state` value.
///
/// # Errors
///
/// Returns [`AuthError::Discovery`] if the advertised endpoint is not a URL.
pub fn authorize_url(endpoints: &OidcEndpoints, config: &OidcConfig, state: &str) -> Result<String, AuthError> {
    let url = Url::parse_with_params(
        &endpoints.authorization_endpoint,
        &[
            ("response_type", "code"),
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", OIDC_SCOPES),
            ("state", state),
        ],
    )
    .map_err(|e| AuthError::Discovery(e.to_string()))?;
    Ok(url.into())
}

/// Exchange an authorization code for an access token.
pub async fn exchange_code(
    http: &reqwest::Client,
    endpoints: &OidcEndpoints,
    config: &OidcConfig,
    code: &str,
) -> Result<String, AuthError> {
    let resp = http
        .post(&endpoints.token_endpoint)
        .header("Accept", "application/json")
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
    let token: TokenResponse =
        serde_json::from_str(&body).map_err(|_| AuthError::TokenExchange(format!("unexpected response: {body}")))?;
    Ok(token.access_token)
}

/// Fetch the signed-in user's claims.
pub async fn fetch_userinfo(
    http: &reqwest::Client,
    endpoints: &OidcEndpoints,
    access_token: &str,
) -> Result<UserInfo, AuthError> {
    let resp = http
        .get(&endpoints.userinfo_endpoint)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| AuthError::UserInfo(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::UserInfo(format!("{status}: {body}")));
    }

    resp.json::<UserInfo>()
        .await
        .map_err(|e| AuthError::UserInfo(e.to_string()))
}

/// Insert or refresh a user by email. New users start at `initial_access`.
/// Returns the user id, or [`AuthError::Inactive`] for disabled accounts.
pub async fn upsert_user(
    pool: &PgPool,
    email: &str,
    name: &str,
    initial_access: AccessLevel,
) -> Result<i32, AuthError> {
    let row = sqlx::query(
        r"INSERT INTO users (username, email, access)
          VALUES ($1, $2, $3)
          ON CONFLICT (email) DO UPDATE SET username = EXCLUDED.username
          RETURNING id, is_active",
    )
    .bind(name)
    .bind(email.to_ascii_lowercase())
    .bind(initial_access.as_str())
    .fetch_one(pool)
    .await?;

    if !row.get::<bool, _>("is_active") {
        return Err(AuthError::Inactive);
    }
    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
