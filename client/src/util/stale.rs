//! The dead-bottle cleanup rule: a bottle is stale once its last update is
//! strictly more than two years old.

#[cfg(test)]
#[path = "stale_test.rs"]
mod stale_test;

use records::{Bottle, Chemical};
use time::{Date, Month, OffsetDateTime};

/// Today's date in UTC.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// The same calendar day two years earlier. February 29 rolls forward to
/// March 1 when the earlier year has no leap day.
pub fn two_years_before(today: Date) -> Date {
    let year = today.year() - 2;
    today.replace_year(year).unwrap_or_else(|_| {
        Date::from_calendar_date(year, Month::March, 1).unwrap_or(today)
    })
}

/// A bottle without a date is never stale.
pub fn is_stale(last_updated: Option<Date>, today: Date) -> bool {
    last_updated.is_some_and(|date| date < two_years_before(today))
}

/// Dead bottle listed in the cleanup dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct DeadRow {
    pub chemical_name: String,
    pub bottle: Bottle,
}

/// Flatten the dead inventory, keep only stale bottles, oldest first.
pub fn stale_dead_bottles(chemicals: &[Chemical], today: Date) -> Vec<DeadRow> {
    let mut rows: Vec<DeadRow> = chemicals
        .iter()
        .flat_map(|chemical| {
            chemical
                .inventory
                .iter()
                .filter(|bottle| bottle.dead && is_stale(bottle.last_updated, today))
                .map(|bottle| DeadRow { chemical_name: chemical.chemical_name.clone(), bottle: bottle.clone() })
        })
        .collect();
    rows.sort_by_key(|row| row.bottle.last_updated);
    rows
}
