//! Storage classes (hazard groupings such as "Flammable").
//!
//! DESIGN
//! ======
//! Every chemical must carry a storage class. Deleting a class therefore
//! moves its chemicals to `Unknown` inside the same transaction, recreating
//! `Unknown` first if someone removed it from the database by hand.

use records::StorageClass;
use sqlx::{PgPool, Row};

pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, thiserror::Error)]
pub enum StorageClassError {
    #[error("Name is required")]
    NameRequired,
    #[error("Storage class already exists")]
    Duplicate,
    #[error("Storage class not found")]
    NotFound(i32),
    #[error("Cannot delete the Unknown storage class")]
    DeleteUnknown,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub(crate) fn normalize_name(raw: &str) -> Result<String, StorageClassError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(StorageClassError::NameRequired);
    }
    Ok(name.to_owned())
}

pub async fn list_storage_classes(pool: &PgPool) -> Result<Vec<StorageClass>, StorageClassError> {
    let rows = sqlx::query("SELECT id, name FROM storage_classes ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows
        .into_iter()
        .map(|r| StorageClass { id: r.get("id"), name: r.get("name") })
        .collect())
}

async fn name_taken(pool: &PgPool, name: &str, except: Option<i32>) -> Result<bool, sqlx::Error> {
    Ok(sqlx::query("SELECT 1 FROM storage_classes WHERE name = $1 AND ($2::int IS NULL OR id <> $2)")
        .bind(name)
        .bind(except)
        .fetch_optional(pool)
        .await?
        .is_some())
}

pub async fn create_storage_class(pool: &PgPool, raw_name: &str) -> Result<StorageClass, StorageClassError> {
    let name = normalize_name(raw_name)?;
    if name_taken(pool, &name, None).await? {
        return Err(StorageClassError::Duplicate);
    }
    let id: i32 = sqlx::query("INSERT INTO storage_classes (name) VALUES ($1) RETURNING id")
        .bind(&name)
        .fetch_one(pool)
        .await?
        .get("id");
    Ok(StorageClass { id, name })
}

pub async fn update_storage_class(pool: &PgPool, id: i32, raw_name: &str) -> Result<StorageClass, StorageClassError> {
    let name = normalize_name(raw_name)?;
    if name_taken(pool, &name, Some(id)).await? {
        return Err(StorageClassError::Duplicate);
    }
    let result = sqlx::query("UPDATE storage_classes SET name = $2 WHERE id = $1")
        .bind(id)
        .bind(&name)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StorageClassError::NotFound(id));
    }
    Ok(StorageClass { id, name })
}

/// Delete a storage class, reassigning its chemicals to `Unknown`.
pub async fn delete_storage_class(pool: &PgPool, id: i32) -> Result<(), StorageClassError> {
    let mut tx = pool.begin().await?;

    let name: Option<String> = sqlx::query("SELECT name FROM storage_classes WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .map(|r| r.get("name"));
    match name.as_deref() {
        None => return Err(StorageClassError::NotFound(id)),
        Some(UNKNOWN) => return Err(StorageClassError::DeleteUnknown),
        Some(_) => {}
    }

    let unknown_id: i32 = sqlx::query(
        r"INSERT INTO storage_classes (name) VALUES ($1)
          ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
          RETURNING id",
    )
    .bind(UNKNOWN)
    .fetch_one(&mut *tx)
    .await?
    .get("id");

    let moved = sqlx::query("UPDATE chemicals SET storage_class_id = $2 WHERE storage_class_id = $1")
        .bind(id)
        .bind(unknown_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM storage_classes WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(storage_class_id = id, reassigned = moved, "storage class deleted");
    Ok(())
}

#[cfg(test)]
#[path = "storage_class_test.rs"]
mod tests;
