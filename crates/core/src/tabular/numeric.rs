//! Locale-tolerant scalar parsing for imported files.
//!
//! Every function either yields a valid value or `None` — callers decide
//! whether "unparseable" means skip-the-row or use-a-default. Nothing
//! here silently turns garbage into zero.

use chrono::{DateTime, NaiveDate};

use super::sheet::Cell;

/// Offset between the 1900 spreadsheet epoch (including its leap-year
/// quirk) and the Unix epoch, in days.
const SERIAL_UNIX_OFFSET_DAYS: f64 = 25569.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a decimal that may use a decimal comma ("1234,56").
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert a spreadsheet date serial (days since the 1900 epoch) to a
/// calendar day.
pub fn date_from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let secs = ((serial - SERIAL_UNIX_OFFSET_DAYS) * SECONDS_PER_DAY) as i64;
    DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}

/// Parse a date string, keeping only the day part of values like
/// "2024-01-05 14:30:00". Accepts ISO and the common European orderings.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let day_part = raw.trim().split([' ', 'T']).next()?;
    for format in ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(day_part, format) {
            return Some(date);
        }
    }
    None
}

/// Decimal value of a cell: numbers pass through, text goes through
/// decimal-comma normalization.
pub fn cell_decimal(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(n) if n.is_finite() => Some(*n),
        Cell::Text(s) => parse_decimal(s),
        _ => None,
    }
}

/// Calendar day of a cell: numeric cells are spreadsheet serials.
pub fn cell_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Number(n) => date_from_serial(*n),
        Cell::Text(s) => parse_date(s),
        Cell::Empty => None,
    }
}
