//! Rooms (`locations`) and shelves/cabinets (`sub_locations`).
//!
//! ERROR HANDLING
//! ==============
//! Field validation failures are collected into a map keyed by field name so
//! the route layer can answer with `{"errors": {...}, "message": ...}`.
//! Deleting a location cascades to its sub-locations and their bottles at the
//! schema level.

use std::collections::{BTreeMap, HashMap};

use records::{Location, LocationInput, SubLocation, SubLocationDetail, SubLocationInput};
use sqlx::{PgPool, Row};

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Validation errors")]
    Validation(BTreeMap<&'static str, String>),
    #[error("Location with the same building and room already exists.")]
    Duplicate,
    #[error("Location not found")]
    NotFound(i32),
    #[error("Sublocation with the same name already exists for this location.")]
    SubDuplicate,
    #[error("Sublocation not found")]
    SubNotFound(i32),
    #[error("No sublocation IDs provided.")]
    NoIds,
    #[error("Invalid input for sublocation IDs.")]
    BadIds,
    #[error("Some sublocation IDs do not exist.")]
    UnknownIds(Vec<i32>),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub(crate) fn validate_location(input: &LocationInput) -> Result<(String, String), LocationError> {
    let building = input.building.trim();
    let room = input.room.trim();
    let mut errors = BTreeMap::new();
    if building.is_empty() {
        errors.insert("building", "Building is required.".to_owned());
    }
    if room.is_empty() {
        errors.insert("room", "Room is required.".to_owned());
    }
    if errors.is_empty() { Ok((building.to_owned(), room.to_owned())) } else { Err(LocationError::Validation(errors)) }
}

pub(crate) fn validate_sublocation_name(name: &str) -> Result<String, LocationError> {
    let name = name.trim();
    if name.is_empty() {
        let mut errors = BTreeMap::new();
        errors.insert("name", "Name is required.".to_owned());
        return Err(LocationError::Validation(errors));
    }
    Ok(name.to_owned())
}

/// Decode the `sublocation_ids` field: it must be a non-empty array of integers.
pub(crate) fn parse_sublocation_ids(raw: Option<&serde_json::Value>) -> Result<Vec<i32>, LocationError> {
    let Some(value) = raw else {
        return Err(LocationError::NoIds);
    };
    let serde_json::Value::Array(items) = value else {
        return Err(LocationError::BadIds);
    };
    if items.is_empty() {
        return Err(LocationError::NoIds);
    }
    items
        .iter()
        .map(|item| {
            item.as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or(LocationError::BadIds)
        })
        .collect()
}

fn like_filter(query: Option<&str>) -> Option<String> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

// =============================================================================
// LOCATIONS
// =============================================================================

/// List locations (optionally filtered by building/room substring) with their sub-locations.
pub async fn list_locations(pool: &PgPool, query: Option<&str>) -> Result<Vec<Location>, LocationError> {
    let filter = like_filter(query);
    let rows = sqlx::query(
        r"SELECT id, building, room FROM locations
          WHERE $1::text IS NULL
             OR strpos(lower(building), $1) > 0
             OR strpos(lower(room), $1) > 0
          ORDER BY building, room",
    )
    .bind(filter.as_deref())
    .fetch_all(pool)
    .await?;

    let subs = sqlx::query("SELECT id, name, location_id FROM sub_locations ORDER BY name, id")
        .fetch_all(pool)
        .await?;
    let mut by_location: HashMap<i32, Vec<SubLocation>> = HashMap::new();
    for r in subs {
        by_location
            .entry(r.get("location_id"))
            .or_default()
            .push(SubLocation { sub_location_id: r.get("id"), sub_location_name: r.get("name") });
    }

    Ok(rows
        .into_iter()
        .map(|r| {
            let location_id: i32 = r.get("id");
            Location {
                location_id,
                building: r.get("building"),
                room: r.get("room"),
                sub_locations: by_location.remove(&location_id).unwrap_or_default(),
            }
        })
        .collect())
}

async fn location_taken(pool: &PgPool, building: &str, room: &str, except: Option<i32>) -> Result<bool, sqlx::Error> {
    Ok(sqlx::query(
        "SELECT 1 FROM locations WHERE building = $1 AND room = $2 AND ($3::int IS NULL OR id <> $3)",
    )
    .bind(building)
    .bind(room)
    .bind(except)
    .fetch_optional(pool)
    .await?
    .is_some())
}

pub async fn create_location(pool: &PgPool, input: &LocationInput) -> Result<i32, LocationError> {
    let (building, room) = validate_location(input)?;
    if location_taken(pool, &building, &room, None).await? {
        return Err(LocationError::Duplicate);
    }
    let id: i32 = sqlx::query("INSERT INTO locations (building, room) VALUES ($1, $2) RETURNING id")
        .bind(&building)
        .bind(&room)
        .fetch_one(pool)
        .await?
        .get("id");
    tracing::info!(location_id = id, %building, %room, "location created");
    Ok(id)
}

pub async fn update_location(pool: &PgPool, id: i32, input: &LocationInput) -> Result<(), LocationError> {
    let (building, room) = validate_location(input)?;
    if location_taken(pool, &building, &room, Some(id)).await? {
        return Err(LocationError::Duplicate);
    }
    let result = sqlx::query("UPDATE locations SET building = $2, room = $3 WHERE id = $1")
        .bind(id)
        .bind(&building)
        .bind(&room)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(LocationError::NotFound(id));
    }
    Ok(())
}

/// Delete a location with its sub-locations and every bottle shelved there.
pub async fn delete_location(pool: &PgPool, id: i32) -> Result<(), LocationError> {
    let result = sqlx::query("DELETE FROM locations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(LocationError::NotFound(id));
    }
    tracing::info!(location_id = id, "location deleted");
    Ok(())
}

// =============================================================================
// SUB-LOCATIONS
// =============================================================================

pub async fn list_sublocations(pool: &PgPool, query: Option<&str>) -> Result<Vec<SubLocationDetail>, LocationError> {
    let filter = like_filter(query);
    let rows = sqlx::query(
        r"SELECT s.id, s.name, s.location_id, l.building, l.room
          FROM sub_locations s
          JOIN locations l ON l.id = s.location_id
          WHERE $1::text IS NULL
             OR strpos(lower(s.name), $1) > 0
             OR strpos(lower(l.building), $1) > 0
             OR strpos(lower(l.room), $1) > 0
          ORDER BY l.building, l.room, s.name",
    )
    .bind(filter.as_deref())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| SubLocationDetail {
            sub_location_id: r.get("id"),
            sub_location_name: r.get("name"),
            location_id: r.get("location_id"),
            building: r.get("building"),
            room: r.get("room"),
        })
        .collect())
}

async fn sublocation_taken(pool: &PgPool, location_id: i32, name: &str, except: Option<i32>) -> Result<bool, sqlx::Error> {
    Ok(sqlx::query(
        "SELECT 1 FROM sub_locations WHERE location_id = $1 AND name = $2 AND ($3::int IS NULL OR id <> $3)",
    )
    .bind(location_id)
    .bind(name)
    .bind(except)
    .fetch_optional(pool)
    .await?
    .is_some())
}

async fn location_exists(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    Ok(sqlx::query("SELECT 1 FROM locations WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .is_some())
}

pub async fn create_sublocation(pool: &PgPool, input: &SubLocationInput) -> Result<i32, LocationError> {
    let name = validate_sublocation_name(&input.name)?;
    let Some(location_id) = input.location_id else {
        let mut errors = BTreeMap::new();
        errors.insert("locationId", "Location is required.".to_owned());
        return Err(LocationError::Validation(errors));
    };
    if !location_exists(pool, location_id).await? {
        return Err(LocationError::NotFound(location_id));
    }
    if sublocation_taken(pool, location_id, &name, None).await? {
        return Err(LocationError::SubDuplicate);
    }
    let id: i32 = sqlx::query("INSERT INTO sub_locations (name, location_id) VALUES ($1, $2) RETURNING id")
        .bind(&name)
        .bind(location_id)
        .fetch_one(pool)
        .await?
        .get("id");
    tracing::info!(sub_location_id = id, location_id, "sublocation created");
    Ok(id)
}

/// Rename a sub-location, optionally moving it to another location.
pub async fn update_sublocation(pool: &PgPool, id: i32, input: &SubLocationInput) -> Result<(), LocationError> {
    let name = validate_sublocation_name(&input.name)?;
    let current: Option<i32> = sqlx::query("SELECT location_id FROM sub_locations WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .map(|r| r.get("location_id"));
    let Some(current_location) = current else {
        return Err(LocationError::SubNotFound(id));
    };

    let location_id = input.location_id.unwrap_or(current_location);
    if location_id != current_location && !location_exists(pool, location_id).await? {
        return Err(LocationError::NotFound(location_id));
    }
    if sublocation_taken(pool, location_id, &name, Some(id)).await? {
        return Err(LocationError::SubDuplicate);
    }

    sqlx::query("UPDATE sub_locations SET name = $2, location_id = $3 WHERE id = $1")
        .bind(id)
        .bind(&name)
        .bind(location_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete several sub-locations at once. Unknown ids abort the whole batch.
pub async fn delete_sublocations(pool: &PgPool, raw_ids: Option<&serde_json::Value>) -> Result<u64, LocationError> {
    let ids = parse_sublocation_ids(raw_ids)?;

    let mut tx = pool.begin().await?;
    let found: Vec<i32> = sqlx::query("SELECT id FROM sub_locations WHERE id = ANY($1)")
        .bind(&ids)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(|r| r.get("id"))
        .collect();

    let mut missing: Vec<i32> = ids.iter().copied().filter(|id| !found.contains(id)).collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        missing.dedup();
        return Err(LocationError::UnknownIds(missing));
    }

    let result = sqlx::query("DELETE FROM sub_locations WHERE id = ANY($1)")
        .bind(&ids)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    tracing::info!(count = result.rows_affected(), "sublocations deleted");
    Ok(result.rows_affected())
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
