use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{yaml}");
        }

        if *edit_config {
            edit(editor.as_deref());
        }
    }

    Ok(())
}

fn edit(requested: Option<&str>) {
    let path = Config::config_file();

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor}'"));
        }
        _ if editor != default_editor => {
            warning(format!(
                "Editor '{editor}' not available, falling back to '{default_editor}'"
            ));
            match Command::new(&default_editor).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{default_editor}'"));
                }
                _ => error(format!(
                    "Failed to edit configuration file using '{default_editor}'"
                )),
            }
        }
        _ => error(format!("Failed to edit configuration file using '{editor}'")),
    }
}
