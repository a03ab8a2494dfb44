//! Required-field checks shared by the wizard and the CRUD dialogs.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Trimmed value of a required text field.
///
/// # Errors
///
/// Returns `"<label> is required"` when the value is blank.
pub fn required<'a>(label: &str, value: &'a str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(format!("{label} is required")) } else { Ok(trimmed) }
}

/// # Errors
///
/// Returns `"<label> is required"` when nothing is selected.
pub fn required_id(label: &str, value: Option<i32>) -> Result<i32, String> {
    value.ok_or_else(|| format!("{label} is required"))
}

/// Sticker numbers are positive integers.
///
/// # Errors
///
/// Returns a message when the field is blank or not a positive whole number.
pub fn parse_sticker(raw: &str) -> Result<i64, String> {
    let text = required("Sticker Number", raw)?;
    match text.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("Sticker Number must be a positive whole number".to_owned()),
    }
}

/// `None` for blank input, otherwise the trimmed text.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Parse a `<select>` value holding an id; the empty placeholder yields `None`.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
