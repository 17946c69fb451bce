use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates `~/.rovertime/rovertime.conf` with default values unless it
/// already exists. In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.test)?;
    let cfg = Config::load()?;

    info("Initializing rOvertime…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Backup file : {}", cfg.source_path().display());

    success("rOvertime initialization completed!");
    Ok(())
}
