// src/export/model.rs

use crate::models::Overview;
use crate::models::overview::month_name;
use serde::Serialize;

/// One flat row per capped month, ready for CSV.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MonthExport {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub overtime: f64,
    pub lost: f64,
}

/// Flatten the overview, oldest month first.
pub fn month_rows(overview: &Overview) -> Vec<MonthExport> {
    overview
        .years
        .iter()
        .flat_map(|(year, agg)| {
            agg.months.iter().map(move |(month, m)| MonthExport {
                year: *year,
                month: *month,
                month_name: month_name(*month),
                overtime: m.overtime,
                lost: m.lost,
            })
        })
        .collect()
}
