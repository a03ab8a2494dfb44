//! User administration: listing, access changes, removal.

use records::{AccessLevel, UserSummary};
use sqlx::{PgPool, Row};

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound(i32),
    #[error("Invalid access level")]
    InvalidAccess(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// List every user ordered by username.
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserSummary>, UserError> {
    let rows = sqlx::query("SELECT id, username, access FROM users ORDER BY lower(username), id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|r| {
            let access: String = r.get("access");
            UserSummary {
                id: r.get("id"),
                username: r.get("username"),
                access: AccessLevel::parse(&access).unwrap_or_default(),
            }
        })
        .collect())
}

/// Change a user's access level. The label must be one of the three tiers.
pub async fn update_access(pool: &PgPool, user_id: i32, access: &str) -> Result<(), UserError> {
    let level = AccessLevel::parse(access).map_err(|e| UserError::InvalidAccess(e.0))?;
    let result = sqlx::query("UPDATE users SET access = $2 WHERE id = $1")
        .bind(user_id)
        .bind(level.as_str())
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(UserError::NotFound(user_id));
    }
    Ok(())
}

/// Delete a user and (by cascade) their sessions.
pub async fn delete_user(pool: &PgPool, user_id: i32) -> Result<(), UserError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(UserError::NotFound(user_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
