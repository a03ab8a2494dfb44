//! Manufacturer list maintenance.
//!
//! Names are unique case-insensitively (enforced by a `lower(name)` index);
//! the service checks first so callers get a readable message instead of a
//! constraint violation.

use records::Manufacturer;
use sqlx::{PgPool, Row};

#[derive(Debug, thiserror::Error)]
pub enum ManufacturerError {
    #[error("Manufacturer name is required")]
    NameRequired,
    #[error("Manufacturer already exists")]
    Duplicate,
    #[error("Manufacturer not found")]
    NotFound(i32),
    #[error("No manufacturer IDs provided.")]
    NoIds,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub(crate) fn normalize_name(raw: &str) -> Result<String, ManufacturerError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ManufacturerError::NameRequired);
    }
    Ok(name.to_owned())
}

/// List manufacturers sorted by name, ignoring case.
///
/// With `active_only`, only manufacturers that still have at least one live
/// bottle on a shelf are returned; this is what the sidebar filter shows.
pub async fn list_manufacturers(pool: &PgPool, active_only: bool) -> Result<Vec<Manufacturer>, ManufacturerError> {
    let rows = sqlx::query(
        r"SELECT m.id, m.name FROM manufacturers m
          WHERE NOT $1 OR EXISTS (
              SELECT 1 FROM chemical_manufacturers cm
              JOIN inventory i ON i.chemical_manufacturer_id = cm.id
              WHERE cm.manufacturer_id = m.id AND NOT i.is_dead)
          ORDER BY lower(m.name), m.id",
    )
    .bind(active_only)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| Manufacturer { id: r.get("id"), name: r.get("name") })
        .collect())
}

async fn name_taken(pool: &PgPool, name: &str, except: Option<i32>) -> Result<bool, sqlx::Error> {
    Ok(sqlx::query("SELECT 1 FROM manufacturers WHERE lower(name) = lower($1) AND ($2::int IS NULL OR id <> $2)")
        .bind(name)
        .bind(except)
        .fetch_optional(pool)
        .await?
        .is_some())
}

pub async fn add_manufacturer(pool: &PgPool, raw_name: &str) -> Result<i32, ManufacturerError> {
    let name = normalize_name(raw_name)?;
    if name_taken(pool, &name, None).await? {
        return Err(ManufacturerError::Duplicate);
    }
    let id: i32 = sqlx::query("INSERT INTO manufacturers (name) VALUES ($1) RETURNING id")
        .bind(&name)
        .fetch_one(pool)
        .await?
        .get("id");
    tracing::info!(manufacturer_id = id, %name, "manufacturer added");
    Ok(id)
}

pub async fn update_manufacturer(pool: &PgPool, id: i32, raw_name: &str) -> Result<(), ManufacturerError> {
    let name = normalize_name(raw_name)?;
    if name_taken(pool, &name, Some(id)).await? {
        return Err(ManufacturerError::Duplicate);
    }
    let result = sqlx::query("UPDATE manufacturers SET name = $2 WHERE id = $1")
        .bind(id)
        .bind(&name)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ManufacturerError::NotFound(id));
    }
    Ok(())
}

/// Delete the given manufacturers. Ids that no longer exist are ignored.
///
/// Product records and bottles tied to a removed manufacturer go with it.
pub async fn delete_manufacturers(pool: &PgPool, ids: &[i32]) -> Result<u64, ManufacturerError> {
    if ids.is_empty() {
        return Err(ManufacturerError::NoIds);
    }
    let mut tx = pool.begin().await?;
    let result = sqlx::query("DELETE FROM manufacturers WHERE id = ANY($1)")
        .bind(ids)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    tracing::info!(requested = ids.len(), deleted = result.rows_affected(), "manufacturers deleted");
    Ok(result.rows_affected())
}

#[cfg(test)]
#[path = "manufacturer_test.rs"]
mod tests;
