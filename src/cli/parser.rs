use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rtotracker:
/// office attendance tracking against a days/week target, backed by SQLite.
#[derive(Parser)]
#[command(
    name = "rtotracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track in-office vs remote days, vacations and holidays against a days/week target",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        /// JSON file of holidays to seed
        #[arg(long, value_name = "FILE")]
        holidays: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a holiday, vacation or attendance event
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        #[arg(long = "type", short = 't', help = "holiday, vacation or attendance")]
        kind: String,

        #[arg(long = "desc", short = 'd', default_value = "")]
        desc: String,

        #[arg(long = "office", help = "Mark an attendance event as in-office")]
        office: bool,
    },

    /// Add vacation days in bulk
    Bulk {
        /// Dates (YYYY-MM-DD)
        dates: Vec<String>,

        #[arg(long, value_name = "FILE", help = "JSON array of vacation events")]
        file: Option<String>,

        #[arg(long = "desc", short = 'd', default_value = "Vacation")]
        desc: String,

        #[arg(long, help = "Print the response as JSON")]
        json: bool,
    },

    /// Create attendance events for every empty weekday of the window
    Defaults {
        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,
    },

    /// Flip in-office/remote for a date
    Toggle {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Turn a vacation into a remote day
    Transform {
        /// Vacation event id
        id: i64,
    },

    /// Delete a vacation event by ID
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List events
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "type", short = 't', help = "holiday, vacation or attendance")]
        kind: Option<String>,
    },

    /// Attendance statistics for the reporting window
    Stats {
        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Month calendar
    Calendar {
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Cumulative days/week trend for the reporting window
    Chart {
        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show or update preferences
    Prefs {
        #[arg(long)]
        print: bool,

        #[arg(long, help = "Default in-office weekdays, e.g. T,W,Th,F")]
        days: Option<String>,

        #[arg(long, help = "Target in-office days per week, e.g. 2.5")]
        target: Option<String>,
    },

    /// Seed holidays from a JSON file
    Holidays {
        file: String,
    },

    /// Import events from a JSON file
    Import {
        file: String,
    },

    /// Export events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
