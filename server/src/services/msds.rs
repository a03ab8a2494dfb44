//! Material Safety Data Sheet bookkeeping: which bottles lack one, and the
//! shared MSDS log URL stored in `app_settings`.

use records::{MissingMsds, id_from_value};
use sqlx::{PgPool, Row};

const MSDS_URL_KEY: &str = "msds_url";

#[derive(Debug, thiserror::Error)]
pub enum MsdsError {
    #[error("Missing 'url' in request payload.")]
    MissingUrl,
    #[error("Invalid 'inventory_id'. Item not found.")]
    ItemNotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Live bottles with no MSDS on file, ordered by sticker number.
pub async fn missing_msds(pool: &PgPool) -> Result<Vec<MissingMsds>, MsdsError> {
    let rows = sqlx::query(
        r"SELECT i.id, i.sticker_number, c.name AS chemical_name, m.name AS manufacturer_name,
                 COALESCE(i.product_number, cm.product_number) AS product_number
          FROM inventory i
          JOIN chemical_manufacturers cm ON cm.id = i.chemical_manufacturer_id
          JOIN chemicals c ON c.id = cm.chemical_id
          JOIN manufacturers m ON m.id = cm.manufacturer_id
          WHERE NOT i.msds AND NOT i.is_dead
          ORDER BY i.sticker_number",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| MissingMsds {
            inventory_id: r.get("id"),
            sticker_number: r.get("sticker_number"),
            chemical_name: r.get("chemical_name"),
            manufacturer_name: r.get("manufacturer_name"),
            product_number: r.get("product_number"),
        })
        .collect())
}

/// Stored MSDS log URL, or an empty string when none has been set.
pub async fn msds_url(pool: &PgPool) -> Result<String, MsdsError> {
    let value: Option<String> = sqlx::query("SELECT value FROM app_settings WHERE key = $1")
        .bind(MSDS_URL_KEY)
        .fetch_optional(pool)
        .await?
        .map(|r| r.get("value"));
    Ok(value.unwrap_or_default())
}

pub async fn set_msds_url(pool: &PgPool, url: Option<&str>) -> Result<(), MsdsError> {
    let url = url.ok_or(MsdsError::MissingUrl)?.trim();
    sqlx::query(
        r"INSERT INTO app_settings (key, value) VALUES ($1, $2)
          ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
    )
    .bind(MSDS_URL_KEY)
    .bind(url)
    .execute(pool)
    .await?;
    tracing::info!(%url, "msds url updated");
    Ok(())
}

/// Record (or clear) the MSDS flag on a single bottle.
pub async fn set_msds_flag(pool: &PgPool, raw_id: Option<&serde_json::Value>, present: bool) -> Result<(), MsdsError> {
    let id = raw_id.and_then(id_from_value).ok_or(MsdsError::ItemNotFound)?;
    let result = sqlx::query("UPDATE inventory SET msds = $2 WHERE id = $1")
        .bind(id)
        .bind(present)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(MsdsError::ItemNotFound);
    }
    Ok(())
}

#[cfg(test)]
#[path = "msds_test.rs"]
mod tests;
