//! Full inventory export as CSV, one row per bottle (live and dead).
//!
//! Fields follow RFC 4180: a field containing a comma, quote or line break is
//! wrapped in double quotes with inner quotes doubled; records end in CRLF.
//! Floats always carry a decimal point and booleans read `True` / `False`,
//! which is what the spreadsheets downstream of this report already expect.

use records::{DateError, format_date, location_label};
use sqlx::{PgPool, Row};
use time::Date;

pub const FILENAME: &str = "inventory_report.csv";

pub const HEADER: [&str; 18] = [
    "Sticker Number",
    "Chemical",
    "Location",
    "Sub-Location",
    "MSDS",
    "Comment",
    "Storage Class",
    "Alphabetized by",
    "Chemical Formula & Common Name",
    "Last Updated",
    "Who Updated",
    "Quantity",
    "Minimum Needed",
    "Manufacturer",
    "Product Number",
    "CAS Number",
    "Barcode",
    "Dead?",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One exported bottle, already joined with its chemical and location.
#[derive(Debug, Clone, Default)]
pub struct ExportRow {
    pub sticker_number: i64,
    pub chemical_name: String,
    pub location: String,
    pub sub_location: String,
    pub msds: bool,
    pub comment: Option<String>,
    pub storage_class: String,
    pub alphabetical_name: String,
    pub formula: Option<String>,
    pub last_updated: Option<Date>,
    pub who_updated: Option<String>,
    pub quantity: f64,
    pub minimum_on_hand: Option<f64>,
    pub manufacturer: String,
    pub product_number: Option<String>,
    pub cas_number: Option<String>,
    pub barcode: Option<String>,
    pub dead: bool,
}

// =============================================================================
// ENCODING
// =============================================================================

pub(crate) fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

pub(crate) fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

pub(crate) fn format_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// `"C3H6O (Acetone)"`, or just the name when no formula is recorded.
pub(crate) fn formula_common_name(formula: Option<&str>, name: &str) -> String {
    match formula.map(str::trim).filter(|f| !f.is_empty()) {
        Some(formula) => format!("{formula} ({name})"),
        None => name.to_owned(),
    }
}

fn push_record(out: &mut String, fields: &[String]) {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    out.push_str(&line.join(","));
    out.push_str("\r\n");
}

impl ExportRow {
    fn fields(&self) -> Result<Vec<String>, DateError> {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Ok(vec![
            self.sticker_number.to_string(),
            self.chemical_name.clone(),
            self.location.clone(),
            self.sub_location.clone(),
            format_bool(self.msds).to_owned(),
            text(&self.comment),
            self.storage_class.clone(),
            self.alphabetical_name.clone(),
            formula_common_name(self.formula.as_deref(), &self.chemical_name),
            self.last_updated.map(format_date).transpose()?.unwrap_or_default(),
            text(&self.who_updated),
            format_float(self.quantity),
            self.minimum_on_hand.map(format_float).unwrap_or_default(),
            self.manufacturer.clone(),
            text(&self.product_number),
            text(&self.cas_number),
            text(&self.barcode),
            format_bool(self.dead).to_owned(),
        ])
    }
}

/// Render the header and every row as a CSV document.
pub fn encode_csv(rows: &[ExportRow]) -> Result<String, DateError> {
    let mut out = String::new();
    let header: Vec<String> = HEADER.iter().map(|h| (*h).to_owned()).collect();
    push_record(&mut out, &header);
    for row in rows {
        push_record(&mut out, &row.fields()?);
    }
    Ok(out)
}

// =============================================================================
// QUERY
// =============================================================================

pub async fn load_rows(pool: &PgPool) -> Result<Vec<ExportRow>, ExportError> {
    let rows = sqlx::query(
        r"SELECT i.sticker_number, c.name AS chemical_name, l.building, l.room, s.name AS sub_location_name,
                 i.msds, COALESCE(i.comment, cm.comment) AS comment, sc.name AS storage_class,
                 c.alphabetical_name, c.formula, i.last_updated, i.who_updated, i.quantity,
                 c.minimum_on_hand, m.name AS manufacturer_name,
                 COALESCE(i.product_number, cm.product_number) AS product_number,
                 cm.cas_number, COALESCE(i.barcode, cm.barcode) AS barcode, i.is_dead
          FROM inventory i
          JOIN chemical_manufacturers cm ON cm.id = i.chemical_manufacturer_id
          JOIN chemicals c ON c.id = cm.chemical_id
          JOIN storage_classes sc ON sc.id = c.storage_class_id
          JOIN manufacturers m ON m.id = cm.manufacturer_id
          JOIN sub_locations s ON s.id = i.sub_location_id
          JOIN locations l ON l.id = s.location_id
          ORDER BY i.sticker_number",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| {
            let building: String = r.get("building");
            let room: String = r.get("room");
            ExportRow {
                sticker_number: r.get("sticker_number"),
                chemical_name: r.get("chemical_name"),
                location: location_label(&building, &room),
                sub_location: r.get("sub_location_name"),
                msds: r.get("msds"),
                comment: r.get("comment"),
                storage_class: r.get("storage_class"),
                alphabetical_name: r.get("alphabetical_name"),
                formula: r.get("formula"),
                last_updated: r.get("last_updated"),
                who_updated: r.get("who_updated"),
                quantity: r.get("quantity"),
                minimum_on_hand: r.get("minimum_on_hand"),
                manufacturer: r.get("manufacturer_name"),
                product_number: r.get("product_number"),
                cas_number: r.get("cas_number"),
                barcode: r.get("barcode"),
                dead: r.get("is_dead"),
            }
        })
        .collect())
}

/// Load every bottle and encode the report.
pub async fn export_inventory(pool: &PgPool) -> Result<String, ExportError> {
    let rows = load_rows(pool).await?;
    let csv = encode_csv(&rows)?;
    tracing::info!(rows = rows.len(), "inventory exported");
    Ok(csv)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
