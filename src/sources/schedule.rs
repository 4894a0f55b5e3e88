use calamine::{Data, Range};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde_json::{Number, Value};
use std::path::Path;

use crate::error::WorkbookError;
use crate::models::ScheduleRow;
use crate::sources::workbook;

pub const START_DATE_COLUMN: &str = "StartDate";

/// Output format of the StartDate column: DD/MM/YYYY
pub const START_DATE_FORMAT: &str = "%d/%m/%Y";

// Accepted StartDate text. Year-first only, so day/month order is never guessed.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Read the first worksheet of the workbook at `path` into row objects,
/// with StartDate rewritten as DD/MM/YYYY.
///
/// Blocking: call it from `spawn_blocking` inside async code.
pub fn read_schedule(path: &Path) -> Result<Vec<ScheduleRow>, WorkbookError> {
    let range = workbook::first_worksheet(path)?;
    rows_from_range(&range)
}

/// Convert a worksheet range to row objects. The first row holds the headers.
///
/// Fails on the first StartDate that is not date-like; no partial result is returned.
pub fn rows_from_range(range: &Range<Data>) -> Result<Vec<ScheduleRow>, WorkbookError> {
    let mut rows = range.rows();
    let header = rows.next().ok_or(WorkbookError::Empty)?;
    let columns = workbook::column_names(header);
    let date_column = workbook::column_index(&columns, START_DATE_COLUMN)?;
    let first_data_row = workbook::first_data_row(range);

    let mut schedule = Vec::new();

    for (offset, cells) in rows.enumerate() {
        if workbook::is_blank_row(cells) {
            continue;
        }

        let mut row = ScheduleRow::new();

        for (idx, name) in columns.iter().enumerate() {
            let cell = cells.get(idx).unwrap_or(&Data::Empty);

            let value = if idx == date_column {
                let date = parse_start_date(cell).ok_or_else(|| WorkbookError::InvalidDate {
                    row: first_data_row + offset,
                    value: cell.to_string(),
                })?;
                Value::String(date.format(START_DATE_FORMAT).to_string())
            } else {
                cell_to_json(cell)
            };

            row.insert(name.clone(), value);
        }

        schedule.push(row);
    }

    Ok(schedule)
}

fn parse_start_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) if !dt.is_duration() => dt.as_datetime().map(|d| d.date()),
        Data::DateTimeIso(text) | Data::String(text) => parse_date_text(text),
        _ => None,
    }
}

/// Parse StartDate text in one of the accepted year-first layouts.
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(|dt| dt.date())
        })
}

fn cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => float_to_json(*f),
        Data::DateTime(dt) if dt.is_duration() => float_to_json(dt.as_f64()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| Value::String(datetime_to_iso(d)))
            .unwrap_or(Value::Null),
    }
}

// Spreadsheets store every number as a float; whole numbers come back as integers.
fn float_to_json(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        Value::from(f as i64)
    } else {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}

fn datetime_to_iso(dt: NaiveDateTime) -> String {
    if dt.num_seconds_from_midnight() == 0 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}
