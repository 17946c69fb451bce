//! Monthly compensation cap.
//!
//! Every month may bank at most `overtime - cap` hours; the capped part is
//! recorded as lost. A single running bank spans all years, and while it is
//! negative any recovered overtime first repays the debt before the cap
//! applies again.

use crate::models::{MonthAggregate, Overview};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Totals {
    overtime: f64,
    lost: f64,
}

/// Apply `cap` to every month of `overview` up to `today`.
///
/// Years run ascending from `start_year` to `end_year`, months January to
/// December. Missing months that have already started are filled with zero
/// so each year shows a contiguous calendar.
pub fn apply_cap(overview: &mut Overview, cap: f64, today: NaiveDate) {
    let mut bank = Totals::default();

    if let (Some(start), Some(end)) = (overview.start_year, overview.end_year) {
        for year in start..=end {
            let agg = overview.years.entry(year).or_default();
            let mut year_totals = Totals::default();

            for month in 1..=12 {
                match agg.months.get_mut(&month) {
                    Some(m) => cap_month(m, cap, &mut bank, &mut year_totals),
                    None if month_started(year, month, today) => {
                        agg.months.insert(month, MonthAggregate::default());
                    }
                    None => {}
                }
            }

            agg.total_overtime = year_totals.overtime;
            agg.total_lost = year_totals.lost;
        }
    }

    overview.total_overtime = bank.overtime;
    overview.total_lost = bank.lost;
}

/// True when `year`/`month` is the current month or lies before it.
pub fn month_started(year: i32, month: u32, today: NaiveDate) -> bool {
    year < today.year() || (year == today.year() && month <= today.month())
}

fn cap_month(month: &mut MonthAggregate, cap: f64, bank: &mut Totals, year: &mut Totals) {
    if bank.overtime >= 0.0 {
        if month.overtime >= cap {
            month.overtime -= cap;
            month.lost = cap;
            bank.overtime += month.overtime;
            year.overtime += month.overtime;
            bank.lost += cap;
            year.lost += cap;
        } else if month.overtime > 0.0 {
            bank.lost += month.overtime;
            year.lost += month.overtime;
            month.lost = month.overtime;
            month.overtime = 0.0;
        } else {
            bank.overtime += month.overtime;
            year.overtime += month.overtime;
            month.lost = 0.0;
        }
        return;
    }

    // In debt: repay first, then cap what is left over.
    bank.overtime += month.overtime;
    year.overtime += month.overtime;
    month.lost = 0.0;

    if bank.overtime >= cap {
        bank.overtime -= cap;
        year.overtime -= cap;
        bank.lost += cap;
        year.lost += cap;
        month.lost = cap;
    } else if bank.overtime > 0.0 {
        let rest = bank.overtime;
        bank.lost += rest;
        year.lost += rest;
        month.lost = rest;
        year.overtime -= rest;
        bank.overtime = 0.0;
    }
}
