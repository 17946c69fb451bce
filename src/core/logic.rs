use crate::config::Config;
use crate::core::calculator::{accrual, compensation};
use crate::core::loader;
use crate::errors::AppResult;
use crate::models::{Overview, TimeRecord, YearAggregate};
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

/// Result of asking for a single year.
#[derive(Debug)]
pub enum YearLookup<'a> {
    Year(i32, &'a YearAggregate),
    /// Unknown or unparsable year: every known year, newest first.
    Listing(Vec<(i32, &'a YearAggregate)>),
}

pub struct Core;

impl Core {
    /// Accrue and cap already loaded records.
    pub fn build_overview(records: &[TimeRecord], cap: f64, today: NaiveDate) -> Overview {
        let mut overview = accrual::accrue(records);
        compensation::apply_cap(&mut overview, cap, today);
        overview
    }

    /// Full pipeline: read the configured backup file and compute the overview.
    pub fn overview_for(cfg: &Config, now: NaiveDateTime) -> AppResult<Overview> {
        let path = cfg.source_path();
        debug!("reading time-clock backup {}", path.display());

        let records = loader::load_records(&path, cfg.delimiter_byte()?, now)?;
        let overview = Self::build_overview(&records, cfg.monthly_compensated, now.date());

        debug!("overview={overview:?}");
        Ok(overview)
    }

    pub fn lookup_year<'a>(overview: &'a Overview, query: Option<&str>) -> YearLookup<'a> {
        let found = query
            .and_then(|q| q.trim().parse::<i32>().ok())
            .and_then(|y| overview.year(y).map(|agg| (y, agg)));

        match found {
            Some((year, agg)) => YearLookup::Year(year, agg),
            None => YearLookup::Listing(overview.years_desc().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::{TIMESTAMP_FORMAT, read_records};

    const DATA: &str = "\
Start;End;Location;Break;Time;Comment;AbsenceName;AbsenceStart;AbsenceEnd;RequiredHours
2023-11-06 08:00:00;2023-11-06 18:00:00;Office;0.5;9.5;;;;;8
2023-11-07 08:00:00;2023-11-07 15:00:00;Office;0.5;6.5;;;;;8
2024-01-08 08:00:00;2024-01-08 12:00:00;Office;0;4;;;;;8
2024-01-08 13:00:00;2024-01-08 20:00:00;Office;0;7;;;;;8
2024-09-02 08:00:00;2024-09-02 18:00:00;Office;0;10;;;;;8
";

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-03-10 09:00:00", TIMESTAMP_FORMAT).unwrap()
    }

    fn run(cap: f64) -> Overview {
        let records = read_records(DATA.as_bytes(), b';', now()).unwrap();
        Core::build_overview(&records, cap, now().date())
    }

    #[test]
    fn pipeline_totals() {
        let ov = run(1.0);

        // Nov 2023: 1.5 - 1.5 = 0 -> branch A, below cap: nothing lost
        // Jan 2024: 4 - 8 + 7 = 3 -> 2 banked, 1 lost
        assert_eq!(ov.start_year, Some(2023));
        assert_eq!(ov.end_year, Some(2024));
        assert_eq!(ov.total_overtime, 2.0);
        assert_eq!(ov.total_lost, 1.0);
        assert!(ov.year(2024).unwrap().month(9).is_none());
    }

    #[test]
    fn rerun_is_identical() {
        assert_eq!(run(2.5), run(2.5));
    }

    #[test]
    fn known_year_is_returned() {
        let ov = run(0.0);
        match Core::lookup_year(&ov, Some("2023")) {
            YearLookup::Year(year, agg) => {
                assert_eq!(year, 2023);
                assert_eq!(agg.months.len(), 12);
            }
            other => panic!("expected a year, got {other:?}"),
        }
    }

    #[test]
    fn unknown_year_falls_back_to_listing() {
        let ov = run(0.0);
        for query in [Some("1999"), Some("abc"), Some(""), None] {
            match Core::lookup_year(&ov, query) {
                YearLookup::Listing(years) => {
                    let ids: Vec<i32> = years.iter().map(|(y, _)| *y).collect();
                    assert_eq!(ids, vec![2024, 2023]);
                }
                other => panic!("expected listing for {query:?}, got {other:?}"),
            }
        }
    }
}
