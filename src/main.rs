//! rOvertime main entrypoint.

use rovertime::ui::messages::{error, info};
use rovertime::{hint_for, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        error(&e);
        if let Some(hint) = hint_for(&e) {
            info(hint);
        }
        std::process::exit(1);
    }
}
