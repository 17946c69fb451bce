use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compensation::month_started;
use crate::core::logic::{Core, YearLookup};
use crate::errors::AppResult;
use crate::models::YearAggregate;
use crate::models::overview::month_name;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{paint_lost, paint_overtime};
use crate::utils::table::{Column, Table};
use crate::utils::{date, hours2readable};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Year { query } = cmd {
        let now = date::now();
        let overview = Core::overview_for(cfg, now)?;

        if overview.is_empty() {
            warning("No time-clock records found.");
            return Ok(());
        }

        match Core::lookup_year(&overview, query.as_deref()) {
            YearLookup::Year(year, agg) => print_year(year, agg, now.date()),
            YearLookup::Listing(years) => print_years(&years),
        }
    }

    Ok(())
}

/// Months of one year, newest first, skipping months not yet started.
fn print_year(year: i32, agg: &YearAggregate, today: NaiveDate) {
    header(format!("{year}"));

    let mut table = Table::new(vec![
        Column::new("Month", 10),
        Column::new("Overtime", 12),
        Column::new("Lost", 12),
    ]);

    for (month, m) in agg.months.iter().rev() {
        if !month_started(year, *month, today) {
            continue;
        }
        table.add_row(vec![
            month_name(*month).to_string(),
            paint_overtime(m.overtime, &hours2readable(m.overtime)),
            paint_lost(m.lost, &hours2readable(m.lost)),
        ]);
    }

    print!("{}", table.render());
}

/// Every captured year, newest first, with its totals.
fn print_years(years: &[(i32, &YearAggregate)]) {
    header("Captured years");

    let mut table = Table::new(vec![
        Column::new("Year", 6),
        Column::new("Overtime", 12),
        Column::new("Lost", 12),
    ]);

    for (year, agg) in years {
        table.add_row(vec![
            year.to_string(),
            paint_overtime(agg.total_overtime, &hours2readable(agg.total_overtime)),
            paint_lost(agg.total_lost, &hours2readable(agg.total_lost)),
        ]);
    }

    print!("{}", table.render());
}
