//! Bottle lifecycle: add, edit, retire/revive, relocate, bulk cleanup.
//!
//! DESIGN
//! ======
//! Every mutation stamps `last_updated` with the caller-supplied `today` and
//! `who_updated` with the session user's name; the route layer supplies both
//! so the service stays clock-free and testable.
//!
//! Multi-row operations (`mark_many_dead`, `delete_dead`) run in a single
//! transaction and validate the whole batch before writing, so a request
//! either applies completely or not at all.

use records::{InventoryPatch, NewBottle, ShelfBottle, StickerLookup, id_from_value, location_label};
use sqlx::{PgPool, Postgres, Row, Transaction};
use time::Date;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Sticker number already exists")]
    DuplicateSticker(i64),
    #[error("Invalid {0}")]
    InvalidReference(&'static str),
    #[error("Inventory not found")]
    NotFound(i32),
    #[error("Missing inventory_id")]
    MissingId,
    #[error("Invalid inventory_id")]
    InvalidId,
    #[error("Bottle not found")]
    BottleNotFound(i32),
    #[error("Some inventory IDs are not in the specified sub-location")]
    NotInSubLocation,
    #[error("No bottles provided")]
    NoBottles,
    #[error("Invalid new_sub_location_id")]
    InvalidSubLocation,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Who and when to stamp onto a mutated bottle.
#[derive(Debug, Clone, Copy)]
pub struct Stamp<'a> {
    pub who: &'a str,
    pub today: Date,
}

/// Resolve a loosely typed `inventory_id` field.
pub(crate) fn parse_inventory_id(raw: Option<&serde_json::Value>) -> Result<i32, InventoryError> {
    match raw {
        None | Some(serde_json::Value::Null) => Err(InventoryError::MissingId),
        Some(value) => id_from_value(value).ok_or(InventoryError::InvalidId),
    }
}

/// Count of distinct ids in a batch.
pub(crate) fn distinct_count(ids: &[i32]) -> usize {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len()
}

async fn exists(tx: &mut Transaction<'_, Postgres>, sql: &str, id: i32) -> Result<bool, sqlx::Error> {
    Ok(sqlx::query(sql).bind(id).fetch_optional(&mut **tx).await?.is_some())
}

/// Find the join row for (chemical, manufacturer, product number), creating it if absent.
async fn find_or_create_join(
    tx: &mut Transaction<'_, Postgres>,
    chemical_id: i32,
    manufacturer_id: i32,
    product_number: Option<&str>,
) -> Result<i32, sqlx::Error> {
    let existing = sqlx::query(
        r"SELECT id FROM chemical_manufacturers
          WHERE chemical_id = $1 AND manufacturer_id = $2
            AND ($3::text IS NULL OR lower(product_number) = lower($3))
          ORDER BY (product_number IS NULL), id
          LIMIT 1",
    )
    .bind(chemical_id)
    .bind(manufacturer_id)
    .bind(product_number)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(row) = existing {
        return Ok(row.get("id"));
    }

    let row = sqlx::query(
        "INSERT INTO chemical_manufacturers (chemical_id, manufacturer_id, product_number) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(chemical_id)
    .bind(manufacturer_id)
    .bind(product_number)
    .fetch_one(&mut **tx)
    .await?;
    Ok(row.get("id"))
}

async fn sticker_taken(
    tx: &mut Transaction<'_, Postgres>,
    sticker_number: i64,
    except_id: Option<i32>,
) -> Result<bool, sqlx::Error> {
    Ok(sqlx::query("SELECT 1 FROM inventory WHERE sticker_number = $1 AND ($2::int IS NULL OR id <> $2)")
        .bind(sticker_number)
        .bind(except_id)
        .fetch_optional(&mut **tx)
        .await?
        .is_some())
}

fn clean(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// CREATE / UPDATE
// =============================================================================

/// Add a bottle, creating the chemical-manufacturer join if needed.
pub async fn add_bottle(pool: &PgPool, input: &NewBottle, stamp: Stamp<'_>) -> Result<i32, InventoryError> {
    let (Some(sticker_number), Some(chemical_id), Some(manufacturer_id), Some(sub_location_id)) =
        (input.sticker_number, input.chemical_id, input.manufacturer_id, input.sub_location_id)
    else {
        return Err(InventoryError::MissingFields);
    };
    if sticker_number <= 0 {
        return Err(InventoryError::InvalidReference("sticker_number"));
    }

    let mut tx = pool.begin().await?;

    if sticker_taken(&mut tx, sticker_number, None).await? {
        return Err(InventoryError::DuplicateSticker(sticker_number));
    }
    if !exists(&mut tx, "SELECT 1 FROM chemicals WHERE id = $1", chemical_id).await? {
        return Err(InventoryError::InvalidReference("chemical_id"));
    }
    if !exists(&mut tx, "SELECT 1 FROM manufacturers WHERE id = $1", manufacturer_id).await? {
        return Err(InventoryError::InvalidReference("manufacturer_id"));
    }
    if !exists(&mut tx, "SELECT 1 FROM sub_locations WHERE id = $1", sub_location_id).await? {
        return Err(InventoryError::InvalidReference("sub_location_id"));
    }

    let product_number = clean(input.product_number.as_deref());
    let join_id = find_or_create_join(&mut tx, chemical_id, manufacturer_id, product_number).await?;

    let inventory_id: i32 = sqlx::query(
        r"INSERT INTO inventory
              (sticker_number, chemical_manufacturer_id, sub_location_id, last_updated, who_updated, msds, product_number)
          VALUES ($1, $2, $3, $4, $5, $6, $7)
          RETURNING id",
    )
    .bind(sticker_number)
    .bind(join_id)
    .bind(sub_location_id)
    .bind(stamp.today)
    .bind(stamp.who)
    .bind(input.msds)
    .bind(product_number)
    .fetch_one(&mut *tx)
    .await?
    .get("id");

    tx.commit().await?;
    tracing::info!(inventory_id, sticker_number, chemical_id, "bottle added");
    Ok(inventory_id)
}

/// Apply a partial update to one bottle.
pub async fn update_inventory(
    pool: &PgPool,
    id: i32,
    patch: &InventoryPatch,
    stamp: Stamp<'_>,
) -> Result<(), InventoryError> {
    let mut tx = pool.begin().await?;

    let current = sqlx::query(
        r"SELECT i.chemical_manufacturer_id, cm.chemical_id, cm.manufacturer_id,
                 COALESCE(i.product_number, cm.product_number) AS product_number
          FROM inventory i
          JOIN chemical_manufacturers cm ON cm.id = i.chemical_manufacturer_id
          WHERE i.id = $1
          FOR UPDATE OF i",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(InventoryError::NotFound(id))?;

    if let Some(sticker_number) = patch.sticker_number {
        if sticker_number <= 0 {
            return Err(InventoryError::InvalidReference("sticker_number"));
        }
        if sticker_taken(&mut tx, sticker_number, Some(id)).await? {
            return Err(InventoryError::DuplicateSticker(sticker_number));
        }
    }
    if let Some(sub_location_id) = patch.sub_location_id {
        if !exists(&mut tx, "SELECT 1 FROM sub_locations WHERE id = $1", sub_location_id).await? {
            return Err(InventoryError::InvalidReference("sub_location_id"));
        }
    }

    let current_join: i32 = current.get("chemical_manufacturer_id");
    let current_manufacturer: i32 = current.get("manufacturer_id");
    let current_product: Option<String> = current.get("product_number");
    let product_number = match patch.product_number.as_deref() {
        Some(p) => clean(Some(p)).map(ToOwned::to_owned),
        None => current_product,
    };

    let join_id = match patch.manufacturer_id {
        Some(manufacturer_id) if manufacturer_id != current_manufacturer => {
            if !exists(&mut tx, "SELECT 1 FROM manufacturers WHERE id = $1", manufacturer_id).await? {
                return Err(InventoryError::InvalidReference("manufacturer_id"));
            }
            find_or_create_join(&mut tx, current.get("chemical_id"), manufacturer_id, product_number.as_deref()).await?
        }
        _ => current_join,
    };

    sqlx::query(
        r"UPDATE inventory SET
              sticker_number = COALESCE($2, sticker_number),
              product_number = $3,
              sub_location_id = COALESCE($4, sub_location_id),
              chemical_manufacturer_id = $5,
              msds = COALESCE($6, msds),
              last_updated = $7,
              who_updated = $8
          WHERE id = $1",
    )
    .bind(id)
    .bind(patch.sticker_number)
    .bind(product_number.as_deref())
    .bind(patch.sub_location_id)
    .bind(join_id)
    .bind(patch.msds)
    .bind(stamp.today)
    .bind(stamp.who)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Mark a bottle dead or alive. Repeating the call is a no-op success.
pub async fn set_dead(
    pool: &PgPool,
    raw_id: Option<&serde_json::Value>,
    dead: bool,
    stamp: Stamp<'_>,
) -> Result<i32, InventoryError> {
    let id = parse_inventory_id(raw_id)?;
    let result = sqlx::query("UPDATE inventory SET is_dead = $2, last_updated = $3, who_updated = $4 WHERE id = $1")
        .bind(id)
        .bind(dead)
        .bind(stamp.today)
        .bind(stamp.who)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(InventoryError::BottleNotFound(id));
    }
    tracing::info!(inventory_id = id, dead, "bottle status changed");
    Ok(id)
}

/// Mark a batch of bottles in one sub-location dead. All-or-nothing.
pub async fn mark_many_dead(
    pool: &PgPool,
    sub_location_id: i32,
    ids: &[i32],
    stamp: Stamp<'_>,
) -> Result<u64, InventoryError> {
    if ids.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let in_place: i64 = sqlx::query("SELECT count(*) AS n FROM inventory WHERE id = ANY($1) AND sub_location_id = $2")
        .bind(ids)
        .bind(sub_location_id)
        .fetch_one(&mut *tx)
        .await?
        .get("n");

    if usize::try_from(in_place).unwrap_or(0) != distinct_count(ids) {
        return Err(InventoryError::NotInSubLocation);
    }

    let result = sqlx::query(
        "UPDATE inventory SET is_dead = TRUE, last_updated = $2, who_updated = $3 WHERE id = ANY($1)",
    )
    .bind(ids)
    .bind(stamp.today)
    .bind(stamp.who)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(sub_location_id, count = result.rows_affected(), "bottles marked dead");
    Ok(result.rows_affected())
}

/// Permanently delete dead bottles. Live bottles in the list are left alone.
pub async fn delete_dead(pool: &PgPool, ids: &[i32]) -> Result<u64, InventoryError> {
    if ids.is_empty() {
        return Err(InventoryError::NoBottles);
    }
    let mut tx = pool.begin().await?;
    let result = sqlx::query("DELETE FROM inventory WHERE id = ANY($1) AND is_dead")
        .bind(ids)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    tracing::info!(count = result.rows_affected(), "dead bottles deleted");
    Ok(result.rows_affected())
}

/// Move a bottle to another sub-location. A relocated bottle is alive by definition.
pub async fn relocate(
    pool: &PgPool,
    raw_inventory_id: Option<&serde_json::Value>,
    raw_sub_location_id: Option<&serde_json::Value>,
    stamp: Stamp<'_>,
) -> Result<(), InventoryError> {
    let inventory_id = raw_inventory_id
        .and_then(id_from_value)
        .ok_or(InventoryError::InvalidId)?;
    let sub_location_id = raw_sub_location_id
        .and_then(id_from_value)
        .ok_or(InventoryError::InvalidSubLocation)?;

    let mut tx = pool.begin().await?;
    if !exists(&mut tx, "SELECT 1 FROM inventory WHERE id = $1", inventory_id).await? {
        return Err(InventoryError::InvalidId);
    }
    if !exists(&mut tx, "SELECT 1 FROM sub_locations WHERE id = $1", sub_location_id).await? {
        return Err(InventoryError::InvalidSubLocation);
    }

    sqlx::query(
        r"UPDATE inventory
          SET sub_location_id = $2, is_dead = FALSE, last_updated = $3, who_updated = $4
          WHERE id = $1",
    )
    .bind(inventory_id)
    .bind(sub_location_id)
    .bind(stamp.today)
    .bind(stamp.who)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;
    Ok(())
}

// =============================================================================
// LOOKUPS
// =============================================================================

/// Find a bottle by sticker. Non-numeric stickers simply do not match.
pub async fn sticker_lookup(pool: &PgPool, sticker: &str) -> Result<Option<StickerLookup>, InventoryError> {
    let Ok(sticker_number) = sticker.trim().parse::<i64>() else {
        return Ok(None);
    };
    let row = sqlx::query(
        r"SELECT i.id, s.id AS sub_location_id, s.name AS sub_location_name, l.building, l.room
          FROM inventory i
          JOIN sub_locations s ON s.id = i.sub_location_id
          JOIN locations l ON l.id = s.location_id
          WHERE i.sticker_number = $1",
    )
    .bind(sticker_number)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| {
        let building: String = r.get("building");
        let room: String = r.get("room");
        StickerLookup {
            inventory_id: r.get("id"),
            sub_location_id: r.get("sub_location_id"),
            location_name: location_label(&building, &room),
            sub_location_name: r.get("sub_location_name"),
        }
    }))
}

/// Live bottles currently shelved in a sub-location.
pub async fn by_sublocation(pool: &PgPool, sub_location_id: i32) -> Result<Vec<ShelfBottle>, InventoryError> {
    let rows = sqlx::query(
        r"SELECT i.id, i.sticker_number, c.name
          FROM inventory i
          JOIN chemical_manufacturers cm ON cm.id = i.chemical_manufacturer_id
          JOIN chemicals c ON c.id = cm.chemical_id
          WHERE i.sub_location_id = $1 AND NOT i.is_dead
          ORDER BY i.sticker_number",
    )
    .bind(sub_location_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| ShelfBottle {
            inventory_id: r.get("id"),
            sticker_number: r.get("sticker_number"),
            chemical_name: r.get("name"),
        })
        .collect())
}

#[cfg(test)]
#[path = "inventory_test.rs"]
mod tests;
