//! Accrual pass: sums each record's overtime into its (year, month) bucket.

use crate::models::{Overview, TimeRecord};
use chrono::Datelike;

/// Build the uncapped overview from records in chronological order.
///
/// Only months that received at least one record exist afterwards; the
/// compensation pass fills the calendar gaps.
pub fn accrue(records: &[TimeRecord]) -> Overview {
    let mut overview = Overview::default();
    let mut last: Option<&TimeRecord> = None;

    for record in records {
        let date = record.start_date();
        overview.include_year(date.year());

        let time = record.offset_time(last);
        overview.year_mut(date.year()).month_mut(date.month()).overtime += time;

        last = Some(record);
    }

    overview
}
