use crate::export::ExportFormat;
use crate::models::entry_kind::LeaveKind;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for rPaylogger
/// CLI application to track working hours and monthly pay with SQLite
#[derive(Parser)]
#[command(
    name = "rpaylogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-hour and salary logging CLI: track shifts, leave days and monthly settlements using SQLite",
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
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Show or change the saved hourly rate and monthly deductions
    Pref {
        #[arg(long = "rate", help = "Hourly rate")]
        rate: Option<f64>,

        #[arg(long = "labor", help = "Monthly labor insurance deduction")]
        labor: Option<f64>,

        #[arg(long = "health", help = "Monthly health insurance deduction")]
        health: Option<f64>,

        #[arg(
            long = "reset",
            conflicts_with_all = ["rate", "labor", "health"],
            help = "Reset rate to the default placeholder and deductions to zero"
        )]
        reset: bool,

        #[arg(long = "print", help = "Print the current preferences")]
        print: bool,
    },

    /// Add a work entry (clock mode: --in/--out/--break, or span mode: --hours/--minutes)
    Add {
        /// Date of the work (YYYY-MM-DD)
        date: Option<String>,

        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "break", help = "Break duration in minutes")]
        break_minutes: Option<i64>,

        #[arg(
            long = "hours",
            conflicts_with_all = ["start", "end", "break_minutes"],
            help = "Worked hours (span mode)"
        )]
        hours: Option<u32>,

        #[arg(
            long = "minutes",
            conflicts_with_all = ["start", "end", "break_minutes"],
            help = "Worked minutes, 0-59 (span mode)"
        )]
        minutes: Option<u32>,

        #[arg(long = "rate", help = "Hourly rate for this entry (default: saved rate)")]
        rate: Option<f64>,
    },

    /// Add a leave or day-off entry (replaces an existing one on the same date)
    Leave {
        /// Date of the absence (YYYY-MM-DD)
        date: Option<String>,

        #[arg(long = "kind", value_enum, default_value = "leave")]
        kind: LeaveKind,
    },

    /// Delete an entry by its id (as shown by `list`)
    Del {
        id: u64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List the entries of a month with totals
    List {
        #[arg(long, short, help = "Month to show (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(
            long,
            default_value_t = 0,
            allow_negative_numbers = true,
            help = "Move the month by N (e.g. -1 = previous month)"
        )]
        offset: i32,
    },

    /// Show a Monday-first calendar of a month
    Calendar {
        #[arg(long, short, help = "Month to show (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(
            long,
            default_value_t = 0,
            allow_negative_numbers = true,
            help = "Move the month by N (e.g. -1 = previous month)"
        )]
        offset: i32,
    },

    /// Compute and save the settlement of a month
    Settle {
        #[arg(long, short, help = "Month to settle (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long = "labor", help = "Labor insurance deduction (default: saved value)")]
        labor: Option<f64>,

        #[arg(long = "health", help = "Health insurance deduction (default: saved value)")]
        health: Option<f64>,
    },

    /// Show the saved monthly settlements
    History,

    /// Remove all log entries and/or all settlements
    #[command(group(
        ArgGroup::new("target")
            .required(true)
            .multiple(true)
            .args(["logs", "settlements"])
    ))]
    Clear {
        #[arg(long, help = "Remove all log entries")]
        logs: bool,

        #[arg(long, help = "Remove all saved settlements")]
        settlements: bool,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Export log entries (csv) or a full snapshot (json)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Only export this month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace all data with a JSON snapshot
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
