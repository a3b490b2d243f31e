use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTurnos
/// Agenda layout engine for a repair shop, driven from YAML appointment files
#[derive(Parser)]
#[command(
    name = "rturnos",
    version = env!("CARGO_PKG_VERSION"),
    about = "Appointment agenda for a repair shop: day layout, stats, conflicts and free slots",
    long_about = None
)]
pub struct Cli {
    /// Override the appointments file (useful for tests or alternate agendas)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file written by init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and a sample appointments file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for missing fields")]
        check: bool,

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

    /// Show the positioned agenda of one day
    Day {
        /// Date (YYYY-MM-DD), or "today"
        date: String,

        /// Current time for the red "now" line: HH:MM on the shown date,
        /// or "YYYY-MM-DD HH:MM"
        #[arg(long = "now")]
        now: Option<String>,

        #[arg(long = "json", help = "Print the day snapshot as JSON")]
        json: bool,
    },

    /// List appointments grouped by date
    List {
        /// Period filter.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year
        /// - YYYY-MM              → entire month
        /// - YYYY-MM-DD           → specific day
        /// - start:end            → range of any of the above
        /// - all                   → every stored appointment
        ///
        /// If omitted, the current month is listed.
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        /// Only appointments with this status (Pendiente, Confirmado, ...)
        #[arg(long)]
        status: Option<String>,
    },

    /// Validate the appointments file and report rejected records and overlaps
    Check,

    /// Show free start times for a new booking
    Slots {
        /// Date (YYYY-MM-DD), or "today"
        date: String,

        /// Booking length in minutes (defaults to the configured booking length)
        #[arg(long, short)]
        duration: Option<u32>,
    },

    /// Export appointments or a day snapshot
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            conflicts_with = "day",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(
            long,
            value_name = "DATE",
            help = "Export the positioned snapshot of one day (json)"
        )]
        day: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
