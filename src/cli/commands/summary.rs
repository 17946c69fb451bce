use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::utils::colors::{paint_lost, paint_overtime};
use crate::utils::{date, hours2readable};

/// Handle `summary`, the default command: global overtime and lost hours.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let overview = Core::overview_for(cfg, date::now())?;

    let overtime = hours2readable(overview.total_overtime);
    let lost = hours2readable(overview.total_lost);

    println!(
        "Total Overtime : {}",
        paint_overtime(overview.total_overtime, &overtime)
    );
    println!("Total Lost     : {}", paint_lost(overview.total_lost, &lost));
    println!();
    println!("Use `rovertime year [YYYY]` to show results per captured year...");

    Ok(())
}
