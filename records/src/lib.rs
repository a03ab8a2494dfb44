//! Shared wire records for the chemical inventory REST API.
//!
//! This crate owns the JSON shapes exchanged between `server` and `client`.
//! Field names follow the HTTP contract exactly (including the few camelCase
//! holdouts such as `locationId`), so both sides serialize through the same
//! structs instead of ad-hoc `serde_json::Value` maps.

use serde::{Deserialize, Serialize};
use time::Date;

// =============================================================================
// ACCESS LEVELS
// =============================================================================

/// Error returned when parsing an [`AccessLevel`] from an unknown label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid access level: {0}")]
pub struct InvalidAccessLevel(pub String);

/// Permission tier stored on every user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccessLevel {
    /// Read-only: can search and view chemicals.
    #[default]
    Visitor,
    /// Can add, edit and retire inventory.
    Editor,
    /// Everything an editor can do, plus user and MSDS-URL administration.
    #[serde(rename = "Full Access")]
    FullAccess,
}

impl AccessLevel {
    pub const ALL: [Self; 3] = [Self::Visitor, Self::Editor, Self::FullAccess];

    /// Human/wire label (`"Visitor"`, `"Editor"`, `"Full Access"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visitor => "Visitor",
            Self::Editor => "Editor",
            Self::FullAccess => "Full Access",
        }
    }

    /// Parse a wire label. Matching is exact.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAccessLevel`] for any other string.
    pub fn parse(raw: &str) -> Result<Self, InvalidAccessLevel> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == raw)
            .ok_or_else(|| InvalidAccessLevel(raw.to_owned()))
    }

    /// Editors and full-access users may mutate inventory.
    #[must_use]
    pub fn can_edit(self) -> bool {
        matches!(self, Self::Editor | Self::FullAccess)
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self == Self::FullAccess
    }
}

// =============================================================================
// DATES
// =============================================================================

/// Error returned by [`parse_date`] and [`format_date`].
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("invalid date: {0}")]
    Parse(#[from] time::error::Parse),
    #[error("unformattable date: {0}")]
    Format(#[from] time::error::Format),
}

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Render a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`DateError::Format`] if the year cannot be rendered in four digits.
pub fn format_date(date: Date) -> Result<String, DateError> {
    Ok(date.format(DATE_FORMAT)?)
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`DateError::Parse`] if the input is not a calendar date.
pub fn parse_date(raw: &str) -> Result<Date, DateError> {
    Ok(Date::parse(raw.trim(), DATE_FORMAT)?)
}

/// Serde adapter for `Option<Date>` rendered as `YYYY-MM-DD` or `null`.
pub mod optional_date {
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// # Errors
    ///
    /// Fails if the date cannot be formatted.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => {
                let text = super::format_date(*date).map_err(S::Error::custom)?;
                serializer.serialize_some(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    /// # Errors
    ///
    /// Fails if a present value is not a `YYYY-MM-DD` date. Empty strings map to `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => super::parse_date(text).map(Some).map_err(D::Error::custom),
        }
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageClass {
    pub id: i32,
    pub name: String,
}

/// Sub-location as nested inside a [`Location`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubLocation {
    pub sub_location_id: i32,
    pub sub_location_name: String,
}

/// Sub-location listing row, flattened with its parent location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubLocationDetail {
    pub sub_location_id: i32,
    pub sub_location_name: String,
    pub location_id: i32,
    pub building: String,
    pub room: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: i32,
    pub building: String,
    pub room: String,
    #[serde(default)]
    pub sub_locations: Vec<SubLocation>,
}

/// Display label used throughout the UI and CSV export: `"building room"`.
#[must_use]
pub fn location_label(building: &str, room: &str) -> String {
    format!("{building} {room}")
}

impl Location {
    #[must_use]
    pub fn label(&self) -> String {
        location_label(&self.building, &self.room)
    }
}

/// One physical bottle as listed under a chemical.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bottle {
    pub id: i32,
    pub sticker: i64,
    pub product_number: Option<String>,
    pub location: String,
    pub sub_location: String,
    pub sub_location_id: i32,
    pub manufacturer: String,
    pub manufacturer_id: i32,
    pub dead: bool,
    #[serde(default, with = "optional_date")]
    pub last_updated: Option<Date>,
    pub who_updated: Option<String>,
    pub msds: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chemical {
    pub id: i32,
    pub chemical_name: String,
    pub formula: Option<String>,
    pub storage_class: String,
    pub storage_class_id: i32,
    /// Count of live bottles.
    pub quantity: i64,
    #[serde(default)]
    pub inventory: Vec<Bottle>,
}

/// Row of the main chemical list returned by `/api/search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub chemical_name: String,
    pub formula: Option<String>,
    pub id: i32,
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingMsds {
    pub inventory_id: i32,
    pub sticker_number: i64,
    pub chemical_name: String,
    pub manufacturer_name: String,
    pub product_number: Option<String>,
}

/// Signed-in user as reported by `GET /api/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub access: AccessLevel,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub access: AccessLevel,
}

// =============================================================================
// LOOKUPS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLookup {
    pub chemical_id: i32,
    pub manufacturer: Manufacturer,
    pub product_number: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalLookup {
    pub chemical_id: i32,
    pub chemical_name: String,
    pub chemical_formula: Option<String>,
    pub storage_class: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerLookup {
    pub inventory_id: i32,
    pub sub_location_id: i32,
    pub location_name: String,
    pub sub_location_name: String,
}

/// Live bottle inside a sub-location, used by the inventory walkthrough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfBottle {
    pub inventory_id: i32,
    pub sticker_number: i64,
    pub chemical_name: String,
}

// =============================================================================
// REQUEST PAYLOADS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChemical {
    pub chemical_name: String,
    #[serde(default)]
    pub chemical_formula: Option<String>,
    pub storage_class_id: Option<i32>,
    #[serde(default)]
    pub manufacturer_id: Option<i32>,
    #[serde(default)]
    pub product_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBottle {
    pub sticker_number: Option<i64>,
    pub chemical_id: Option<i32>,
    pub manufacturer_id: Option<i32>,
    pub sub_location_id: Option<i32>,
    #[serde(default)]
    pub product_number: Option<String>,
    #[serde(default)]
    pub msds: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class_id: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_location_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msds: Option<bool>,
}

/// `{inventory_id}` body. The id stays a raw JSON value so handlers can tell
/// "missing" apart from "not an integer".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryRef {
    #[serde(default)]
    pub inventory_id: Option<serde_json::Value>,
}

impl InventoryRef {
    #[must_use]
    pub fn new(inventory_id: i32) -> Self {
        Self { inventory_id: Some(inventory_id.into()) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkManyDead {
    pub sub_location_id: i32,
    pub inventory_id: Vec<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDead {
    #[serde(default)]
    pub dead_bottles: Vec<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Relocate {
    #[serde(default)]
    pub inventory_id: Option<serde_json::Value>,
    #[serde(default)]
    pub new_sub_location_id: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInput {
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub room: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubLocationInput {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "locationId", default)]
    pub location_id: Option<i32>,
}

/// `{sublocation_ids}` body; ids stay raw so bad element types yield a 400.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubLocationIds {
    #[serde(default)]
    pub sublocation_ids: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameInput {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdList {
    #[serde(default)]
    pub ids: Vec<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessUpdate {
    pub user_id: i32,
    pub access: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub user_id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsdsUrl {
    #[serde(default)]
    pub url: Option<String>,
}

// =============================================================================
// RESPONSE ENVELOPES
// =============================================================================

/// `{"message": ...}` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// `{"error": ...}` failure body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Parse an integer id out of a loosely typed JSON value (`3` or `"3"`).
#[must_use]
pub fn id_from_value(value: &serde_json::Value) -> Option<i32> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
