use crate::core::calculator::Rounding;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tipcalc
/// CLI application to calculate tips and keep their history in SQLite
#[derive(Parser)]
#[command(
    name = "tipcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small tip calculator that keeps a history of your tips in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Calculate a tip, optionally saving it
    Calc {
        /// Bill amount (e.g. 42.50 or $42.50)
        bill: String,

        /// Tip percent: 0.15, 15 or 15% (default: configured default_tip_percent)
        percent: Option<String>,

        /// Rounding mode (default: configured rounding)
        #[arg(long, value_enum)]
        round: Option<Rounding>,

        /// Save the calculated tip to the database
        #[arg(long)]
        save: bool,
    },

    /// Add a tip record
    Add {
        /// Bill amount
        bill: String,

        /// Tip percent: 0.15, 15 or 15%
        percent: String,

        /// Date (YYYY-MM-DD or "YYYY-MM-DD HH:MM"); defaults to now
        #[arg(long)]
        date: Option<String>,

        /// Explicit id; by default the database assigns one
        #[arg(long)]
        id: Option<i64>,
    },

    /// List saved tips
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single tip
    Get {
        /// Tip id
        id: i64,
    },

    /// Update a saved tip
    Update {
        /// Tip id
        id: i64,

        /// New bill amount
        #[arg(long)]
        bill: Option<String>,

        /// New tip percent
        #[arg(long)]
        percent: Option<String>,

        /// New date (YYYY-MM-DD or "YYYY-MM-DD HH:MM")
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a tip by id
    Del {
        /// Tip id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show count, last saved tip and average percent
    Stats,

    /// Export saved tips
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the database schema
    Db {
        /// Drop the tip table, recreate it and restore the default rows
        #[arg(long = "reset", help = "Drop and recreate the tip table (all data is lost)")]
        reset: bool,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
