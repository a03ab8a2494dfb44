//! Chemical catalogue service: listing with bottles, CRUD, and lookups used
//! by the add-chemical wizard.
//!
//! DESIGN
//! ======
//! A chemical owns bottles only indirectly: `inventory` rows point at a
//! `chemical_manufacturers` join row, which names the chemical and the
//! manufacturer. Listing therefore loads chemicals and bottles in two flat
//! queries and stitches them together in memory.
//!
//! ERROR HANDLING
//! ==============
//! Variant `Display` strings are the user-facing API messages; the route
//! layer forwards them verbatim except for `Database`, which is logged and
//! masked.

use std::collections::HashMap;

use records::{Bottle, Chemical, ChemicalLookup, ChemicalPatch, Manufacturer, NewChemical, ProductLookup, location_label};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChemicalError {
    #[error("Chemical not found")]
    NotFound(i32),
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid {0}")]
    InvalidReference(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Column list shared by every query that yields [`Bottle`] rows.
pub(crate) const BOTTLE_COLUMNS: &str = r"
    i.id, i.sticker_number, COALESCE(i.product_number, cm.product_number) AS product_number,
    i.is_dead, i.last_updated, i.who_updated, i.msds, cm.chemical_id,
    m.id AS manufacturer_id, m.name AS manufacturer_name,
    s.id AS sub_location_id, s.name AS sub_location_name, l.building, l.room";

/// Join chain from `inventory i` to its manufacturer and location.
pub(crate) const BOTTLE_JOINS: &str = r"
    FROM inventory i
    JOIN chemical_manufacturers cm ON cm.id = i.chemical_manufacturer_id
    JOIN manufacturers m ON m.id = cm.manufacturer_id
    JOIN sub_locations s ON s.id = i.sub_location_id
    JOIN locations l ON l.id = s.location_id";

pub(crate) fn bottle_from_row(r: &PgRow) -> Bottle {
    let building: String = r.get("building");
    let room: String = r.get("room");
    Bottle {
        id: r.get("id"),
        sticker: r.get("sticker_number"),
        product_number: r.get("product_number"),
        location: location_label(&building, &room),
        sub_location: r.get("sub_location_name"),
        sub_location_id: r.get("sub_location_id"),
        manufacturer: r.get("manufacturer_name"),
        manufacturer_id: r.get("manufacturer_id"),
        dead: r.get("is_dead"),
        last_updated: r.get("last_updated"),
        who_updated: r.get("who_updated"),
        msds: r.get("msds"),
    }
}

/// Split bottles into the live count and the list to display.
pub(crate) fn partition_bottles(bottles: Vec<Bottle>, dead: bool) -> (i64, Vec<Bottle>) {
    let live = bottles.iter().filter(|b| !b.dead).count();
    let shown = bottles.into_iter().filter(|b| b.dead == dead).collect();
    (i64::try_from(live).unwrap_or(i64::MAX), shown)
}

// =============================================================================
// LISTING
// =============================================================================

/// List every chemical with either its live bottles or (when `dead`) its dead ones.
/// `quantity` always counts live bottles.
pub async fn list_chemicals(pool: &PgPool, dead: bool) -> Result<Vec<Chemical>, ChemicalError> {
    let chemicals = sqlx::query(
        r"SELECT c.id, c.name, c.formula, c.storage_class_id, sc.name AS storage_class
          FROM chemicals c
          JOIN storage_classes sc ON sc.id = c.storage_class_id
          ORDER BY c.name, c.id",
    )
    .fetch_all(pool)
    .await?;

    let bottle_rows = sqlx::query(&format!("SELECT {BOTTLE_COLUMNS} {BOTTLE_JOINS} ORDER BY i.sticker_number"))
        .fetch_all(pool)
        .await?;

    let mut by_chemical: HashMap<i32, Vec<Bottle>> = HashMap::new();
    for row in &bottle_rows {
        by_chemical
            .entry(row.get("chemical_id"))
            .or_default()
            .push(bottle_from_row(row));
    }

    Ok(chemicals
        .into_iter()
        .map(|r| {
            let id: i32 = r.get("id");
            let (quantity, inventory) = partition_bottles(by_chemical.remove(&id).unwrap_or_default(), dead);
            Chemical {
                id,
                chemical_name: r.get("name"),
                formula: r.get("formula"),
                storage_class: r.get("storage_class"),
                storage_class_id: r.get("storage_class_id"),
                quantity,
                inventory,
            }
        })
        .collect())
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a chemical, plus its manufacturer join when a manufacturer is given.
pub async fn add_chemical(pool: &PgPool, input: &NewChemical) -> Result<i32, ChemicalError> {
    if input.chemical_name.trim().is_empty() {
        return Err(ChemicalError::MissingFields);
    }
    let Some(storage_class_id) = input.storage_class_id else {
        return Err(ChemicalError::MissingFields);
    };

    let mut tx = pool.begin().await?;

    let class_exists = sqlx::query("SELECT 1 FROM storage_classes WHERE id = $1")
        .bind(storage_class_id)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();
    if !class_exists {
        return Err(ChemicalError::InvalidReference("storage_class_id"));
    }

    let name = input.chemical_name.trim();
    let formula = input
        .chemical_formula
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty());
    let chemical_id: i32 = sqlx::query(
        "INSERT INTO chemicals (name, formula, storage_class_id, alphabetical_name)
         VALUES ($1, $2, $3, $1) RETURNING id",
    )
    .bind(name)
    .bind(formula)
    .bind(storage_class_id)
    .fetch_one(&mut *tx)
    .await?
    .get("id");

    if let Some(manufacturer_id) = input.manufacturer_id {
        let manufacturer_exists = sqlx::query("SELECT 1 FROM manufacturers WHERE id = $1")
            .bind(manufacturer_id)
            .fetch_optional(&mut *tx)
            .await?
            .is_some();
        if !manufacturer_exists {
            return Err(ChemicalError::InvalidReference("manufacturer_id"));
        }
        let product_number = input
            .product_number
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());
        sqlx::query(
            "INSERT INTO chemical_manufacturers (chemical_id, manufacturer_id, product_number) VALUES ($1, $2, $3)",
        )
        .bind(chemical_id)
        .bind(manufacturer_id)
        .bind(product_number)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(chemical_id, name, "chemical added");
    Ok(chemical_id)
}

/// Apply a partial update. Renaming also refreshes the alphabetical name.
pub async fn update_chemical(pool: &PgPool, id: i32, patch: &ChemicalPatch) -> Result<(), ChemicalError> {
    if patch.chemical_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ChemicalError::MissingFields);
    }

    if let Some(storage_class_id) = patch.storage_class_id {
        let class_exists = sqlx::query("SELECT 1 FROM storage_classes WHERE id = $1")
            .bind(storage_class_id)
            .fetch_optional(pool)
            .await?
            .is_some();
        if !class_exists {
            return Err(ChemicalError::InvalidReference("storage_class_id"));
        }
    }

    let formula = patch.chemical_formula.as_deref().map(str::trim);
    let result = sqlx::query(
        r"UPDATE chemicals SET
              name = COALESCE($2, name),
              alphabetical_name = COALESCE($2, alphabetical_name),
              formula = CASE WHEN $3::text IS NULL THEN formula ELSE NULLIF($3, '') END,
              storage_class_id = COALESCE($4, storage_class_id)
          WHERE id = $1",
    )
    .bind(id)
    .bind(patch.chemical_name.as_deref().map(str::trim))
    .bind(formula)
    .bind(patch.storage_class_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ChemicalError::NotFound(id));
    }
    Ok(())
}

/// Delete a chemical together with its manufacturer joins and bottles.
pub async fn delete_chemical(pool: &PgPool, id: i32) -> Result<(), ChemicalError> {
    let result = sqlx::query("DELETE FROM chemicals WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ChemicalError::NotFound(id));
    }
    tracing::info!(chemical_id = id, "chemical deleted");
    Ok(())
}

// =============================================================================
// LOOKUPS
// =============================================================================

/// Exact, case-insensitive product number match. The input is not trimmed.
pub async fn product_number_lookup(pool: &PgPool, product_number: &str) -> Result<Option<ProductLookup>, ChemicalError> {
    let row = sqlx::query(
        r"SELECT cm.chemical_id, cm.product_number, m.id AS manufacturer_id, m.name AS manufacturer_name
          FROM chemical_manufacturers cm
          JOIN manufacturers m ON m.id = cm.manufacturer_id
          WHERE lower(cm.product_number) = lower($1)
          ORDER BY cm.id
          LIMIT 1",
    )
    .bind(product_number)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| ProductLookup {
        chemical_id: r.get("chemical_id"),
        manufacturer: Manufacturer { id: r.get("manufacturer_id"), name: r.get("manufacturer_name") },
        product_number: r.get("product_number"),
    }))
}

/// Exact, case-sensitive name match after trimming the input.
pub async fn chemical_name_lookup(pool: &PgPool, chemical_name: &str) -> Result<Option<ChemicalLookup>, ChemicalError> {
    let row = sqlx::query(
        r"SELECT c.id, c.name, c.formula, sc.name AS storage_class
          FROM chemicals c
          JOIN storage_classes sc ON sc.id = c.storage_class_id
          WHERE c.name = $1
          ORDER BY c.id
          LIMIT 1",
    )
    .bind(chemical_name.trim())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| ChemicalLookup {
        chemical_id: r.get("id"),
        chemical_name: r.get("name"),
        chemical_formula: r.get("formula"),
        storage_class: r.get("storage_class"),
    }))
}

/// Distinct product numbers containing `query` (case-insensitive), sorted.
pub async fn product_search(pool: &PgPool, query: &str) -> Result<Vec<String>, ChemicalError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let rows = sqlx::query(
        r"SELECT DISTINCT product_number FROM (
              SELECT product_number FROM chemical_manufacturers
              UNION
              SELECT product_number FROM inventory
          ) p
          WHERE product_number IS NOT NULL AND strpos(lower(product_number), lower($1)) > 0
          ORDER BY product_number",
    )
    .bind(query)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.get("product_number")).collect())
}

#[cfg(test)]
#[path = "chemical_test.rs"]
mod tests;
