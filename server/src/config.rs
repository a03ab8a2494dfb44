//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (if present) through `dotenvy`, then builds one
//! `AppConfig` that is shared read-only through `AppState`. Parsing goes
//! through a key lookup closure so tests can feed a map instead of mutating
//! the process environment.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 168;
pub const DEFAULT_PUBCHEM_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// OIDC client registration. Present only when all four variables are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OidcConfig {
    pub client_id: String,
    pub client_secret: String,
    pub issuer: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub oidc: Option<OidcConfig>,
    /// Sign every visitor in as the fixed testing profile.
    pub auth_bypass: bool,
    pub cookie_secure: bool,
    pub pubchem_base_url: String,
    pub session_ttl_hours: u64,
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a numeric var is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Required: `DATABASE_URL`.
    ///
    /// Optional:
    /// - `PORT` (3000), `DB_MAX_CONNECTIONS` (5), `SESSION_TTL_HOURS` (168)
    /// - `CHEMINV_OIDC_CLIENT_ID`, `CHEMINV_OIDC_CLIENT_SECRET`,
    ///   `CHEMINV_OIDC_ISSUER`, `CHEMINV_OIDC_REDIRECT_URI`
    /// - `CHEMINV_AUTH_BYPASS`, `COOKIE_SECURE` (booleans)
    /// - `PUBCHEM_BASE_URL`
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let session_ttl_hours = parse_or(&lookup, "SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?;

        let oidc = match (
            lookup("CHEMINV_OIDC_CLIENT_ID"),
            lookup("CHEMINV_OIDC_CLIENT_SECRET"),
            lookup("CHEMINV_OIDC_ISSUER"),
            lookup("CHEMINV_OIDC_REDIRECT_URI"),
        ) {
            (Some(client_id), Some(client_secret), Some(issuer), Some(redirect_uri)) => Some(OidcConfig {
                client_id,
                client_secret,
                issuer: issuer.trim_end_matches('/').to_owned(),
                redirect_uri,
            }),
            _ => None,
        };

        let auth_bypass = lookup("CHEMINV_AUTH_BYPASS")
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or(false);
        let cookie_secure = lookup("COOKIE_SECURE")
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or_else(|| {
                oidc.as_ref()
                    .is_some_and(|o| o.redirect_uri.starts_with("https://"))
            });

        let pubchem_base_url = lookup("PUBCHEM_BASE_URL")
            .unwrap_or_else(|| DEFAULT_PUBCHEM_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            database_url,
            port,
            db_max_connections,
            oidc,
            auth_bypass,
            cookie_secure,
            pubchem_base_url,
            session_ttl_hours,
        })
    }
}

/// Parse common boolean spellings; `None` for anything else.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
