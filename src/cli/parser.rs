use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rOvertime
/// CLI application to compute banked and lost overtime from a StempelUhr backup
#[derive(Parser)]
#[command(
    name = "rovertime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calculate overtime and lost hours from a StempelUhr time-clock backup",
    long_about = None
)]
pub struct Cli {
    /// Override the time-clock backup file (StempelUhrDataBackup.csv)
    #[arg(global = true, long = "source", value_name = "PATH")]
    pub source: Option<String>,

    /// Override the monthly compensated hours
    #[arg(global = true, long = "cap", value_name = "HOURS")]
    pub cap: Option<f64>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show total overtime and total lost hours (default)
    Summary,

    /// Show the months of a year, or every year when QUERY is not a known year
    Year {
        /// Year to show (YYYY)
        query: Option<String>,
    },

    /// Export the computed overview
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
