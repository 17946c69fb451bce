//! Aggregates produced by the overtime pipeline.
//!
//! The tree is `Overview → YearAggregate → MonthAggregate`. Both levels are
//! `BTreeMap`s so years and months iterate in ascending order, which the
//! compensation cap relies on.

use serde::Serialize;
use std::collections::BTreeMap;

/// Calendar month names, index 0 = January.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a month given its number (1..=12).
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTHS[month as usize - 1],
        _ => "Unknown",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthAggregate {
    pub overtime: f64,
    pub lost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YearAggregate {
    pub months: BTreeMap<u32, MonthAggregate>,
    pub total_overtime: f64,
    pub total_lost: f64,
}

impl YearAggregate {
    pub fn month(&self, month: u32) -> Option<&MonthAggregate> {
        self.months.get(&month)
    }

    /// Month bucket, created with zero overtime on first touch.
    pub fn month_mut(&mut self, month: u32) -> &mut MonthAggregate {
        self.months.entry(month).or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overview {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub years: BTreeMap<i32, YearAggregate>,
    pub total_overtime: f64,
    pub total_lost: f64,
}

impl Overview {
    pub fn is_empty(&self) -> bool {
        self.start_year.is_none()
    }

    pub fn year(&self, year: i32) -> Option<&YearAggregate> {
        self.years.get(&year)
    }

    pub fn year_mut(&mut self, year: i32) -> &mut YearAggregate {
        self.years.entry(year).or_default()
    }

    /// Widen `start_year..=end_year` so it covers `year`.
    pub fn include_year(&mut self, year: i32) {
        self.start_year = Some(self.start_year.map_or(year, |s| s.min(year)));
        self.end_year = Some(self.end_year.map_or(year, |e| e.max(year)));
    }

    /// Years newest first, as shown by the year listing.
    pub fn years_desc(&self) -> impl Iterator<Item = (i32, &YearAggregate)> {
        self.years.iter().rev().map(|(y, agg)| (*y, agg))
    }
}
