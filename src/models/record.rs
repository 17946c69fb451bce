use chrono::{NaiveDate, NaiveDateTime};

/// One row of the time-clock backup.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRecord {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub break_duration: f64, // hours, not part of the overtime formula
    pub raw_time: f64,       // signed hours before the daily offset
    pub required_hours: f64, // hours scheduled for the day
}

impl TimeRecord {
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Contribution of this record to its month.
    ///
    /// The first record of a calendar day absorbs the day's required hours;
    /// any later record of the same day counts with its raw time only.
    pub fn offset_time(&self, previous: Option<&TimeRecord>) -> f64 {
        match previous {
            Some(prev) if prev.start_date() == self.start_date() => self.raw_time,
            _ => self.raw_time - self.required_hours,
        }
    }
}
