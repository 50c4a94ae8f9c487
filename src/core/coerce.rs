//! Cell coercion: raw heterogeneous cells into typed values.
//!
//! Two deliberately distinct paths live here. The tag-driven path trusts
//! externally inferred column kinds; the loose path services replayed
//! analyses whose rows arrive with no tags and probes numeric before
//! date. The paths disagree on inputs like `"2024"` and must stay
//! separate.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::core::types::{CellValue, ColumnKind, ColumnType, ProcessedRow};

const TRUTHY: [&str; 4] = ["true", "yes", "1", "y"];
const FALSY: [&str; 4] = ["false", "no", "0", "n"];

/// Coerces raw rows under their column tags. Missing trailing cells and
/// null cells both land as null; unparseable values are retained rather
/// than dropped.
#[must_use]
pub fn process_rows(columns: &[ColumnType], rows: &[Vec<CellValue>]) -> Vec<ProcessedRow> {
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    let raw = row.get(index).unwrap_or(&CellValue::Null);
                    (column.name.clone(), coerce_cell(column.kind, raw))
                })
                .collect()
        })
        .collect()
}

/// Coerces raw rows with no column tags, keyed by header position.
#[must_use]
pub fn process_rows_loose(headers: &[String], rows: &[Vec<CellValue>]) -> Vec<ProcessedRow> {
    rows.iter()
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    let raw = row.get(index).unwrap_or(&CellValue::Null);
                    (header.clone(), coerce_cell_loose(raw))
                })
                .collect()
        })
        .collect()
}

/// Tag-driven coercion for a single cell. Null short-circuits before the
/// kind switch.
#[must_use]
pub fn coerce_cell(kind: ColumnKind, raw: &CellValue) -> CellValue {
    if raw.is_null() {
        return CellValue::Null;
    }

    match kind {
        ColumnKind::Numeric => coerce_numeric(raw),
        ColumnKind::Boolean => coerce_boolean(raw),
        ColumnKind::Date => coerce_date(raw),
        ColumnKind::String => coerce_string(raw),
    }
}

/// Tagless coercion: finite numeric parse first (never for booleans),
/// then date, else the cell is kept as-is.
#[must_use]
pub fn coerce_cell_loose(raw: &CellValue) -> CellValue {
    match raw {
        CellValue::Null => CellValue::Null,
        CellValue::Bool(value) => CellValue::Bool(*value),
        CellValue::Number(value) => CellValue::Number(*value),
        CellValue::Date(value) => CellValue::Date(*value),
        CellValue::Text(text) => {
            if let Ok(parsed) = text.trim().parse::<f64>() {
                if parsed.is_finite() {
                    return CellValue::Number(parsed);
                }
            }
            match parse_date_str(text) {
                Some(parsed) => CellValue::Date(parsed),
                None => CellValue::Text(text.clone()),
            }
        }
    }
}

fn coerce_numeric(raw: &CellValue) -> CellValue {
    match raw {
        CellValue::Text(text) if text.is_empty() => CellValue::Null,
        CellValue::Text(text) => match text.trim().parse::<f64>() {
            Ok(parsed) => CellValue::Number(parsed),
            Err(_) => CellValue::Text(text.clone()),
        },
        other => other.clone(),
    }
}

fn coerce_boolean(raw: &CellValue) -> CellValue {
    match raw {
        CellValue::Bool(value) => CellValue::Bool(*value),
        CellValue::Text(text) => {
            let lowered = text.trim().to_ascii_lowercase();
            if TRUTHY.contains(&lowered.as_str()) {
                CellValue::Bool(true)
            } else if FALSY.contains(&lowered.as_str()) {
                CellValue::Bool(false)
            } else {
                CellValue::Null
            }
        }
        CellValue::Number(value) => CellValue::Bool(*value != 0.0),
        _ => CellValue::Null,
    }
}

fn coerce_date(raw: &CellValue) -> CellValue {
    match raw {
        CellValue::Date(value) => CellValue::Date(*value),
        CellValue::Text(text) if !text.is_empty() => match parse_date_str(text) {
            Some(parsed) => CellValue::Date(parsed),
            None => CellValue::Text(text.clone()),
        },
        other => other.clone(),
    }
}

fn coerce_string(raw: &CellValue) -> CellValue {
    match raw {
        CellValue::Text(text) => CellValue::Text(text.clone()),
        CellValue::Number(value) => CellValue::Text(format!("{value}")),
        CellValue::Bool(value) => CellValue::Text(value.to_string()),
        CellValue::Date(value) => CellValue::Text(value.to_rfc3339()),
        CellValue::Null => CellValue::Null,
    }
}

/// Best-effort date parsing: RFC 3339 first, then common spreadsheet
/// formats interpreted as UTC.
#[must_use]
pub fn parse_date_str(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&parsed));
        }
    }

    for format in ["%Y-%m-%d", "%m/%d/%Y", "%d %b %Y"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&parsed.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}
