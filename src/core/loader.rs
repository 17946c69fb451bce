//! Record loader: turns the StempelUhr backup into typed `TimeRecord`s.
//!
//! Rows are consumed in file order and loading stops at the first row whose
//! start lies at or after `now`; the remaining tail is not yet worked time.

use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Column layout of the backup file
const START: usize = 0;
const END: usize = 1;
const BREAK: usize = 3;
const TIME: usize = 4;
const REQUIRED_HOURS: usize = 9;

/// Load every already-started record from the file at `path`.
pub fn load_records(path: &Path, delimiter: u8, now: NaiveDateTime) -> AppResult<Vec<TimeRecord>> {
    if !path.is_file() {
        return Err(AppError::SourceMissing(path.to_path_buf()));
    }

    let file = File::open(path)?;
    read_records(file, delimiter, now)
}

/// Same as [`load_records`] over any reader. The first row is the header.
pub fn read_records<R: Read>(
    reader: R,
    delimiter: u8,
    now: NaiveDateTime,
) -> AppResult<Vec<TimeRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();

    for row in rdr.records() {
        let row = row?;
        let record = parse_row(&row)?;

        if record.start >= now {
            debug!(
                "stopping at line {}: {} is not in the past",
                line_of(&row),
                record.start
            );
            break;
        }

        records.push(record);
    }

    debug!("loaded {} time-clock records", records.len());
    Ok(records)
}

fn parse_row(row: &StringRecord) -> AppResult<TimeRecord> {
    Ok(TimeRecord {
        start: timestamp_field(row, START)?,
        end: timestamp_field(row, END)?,
        break_duration: hours_field(row, BREAK)?,
        raw_time: hours_field(row, TIME)?,
        required_hours: hours_field(row, REQUIRED_HOURS)?,
    })
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map_or(0, |p| p.line())
}

fn field<'r>(row: &'r StringRecord, column: usize) -> AppResult<&'r str> {
    row.get(column).ok_or(AppError::MissingField {
        line: line_of(row),
        column,
    })
}

fn timestamp_field(row: &StringRecord, column: usize) -> AppResult<NaiveDateTime> {
    let value = field(row, column)?;
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
        AppError::InvalidTimestamp {
            line: line_of(row),
            column,
            value: value.to_string(),
        }
    })
}

fn hours_field(row: &StringRecord, column: usize) -> AppResult<f64> {
    let value = field(row, column)?;
    value.parse::<f64>().map_err(|_| AppError::InvalidNumber {
        line: line_of(row),
        column,
        value: value.to_string(),
    })
}
