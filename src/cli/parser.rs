use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ojtlogger
/// CLI application to track OJT attendance with SQLite
#[derive(Parser)]
#[command(
    name = "ojtlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track OJT check-ins and check-outs, classify attendance and report worked hours",
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

    /// Manage the database (integrity checks, statistics, etc.)
    Db {
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

    /// Record a check-in (and optionally a check-out) for a trainee
    Add {
        /// Trainee name
        name: String,

        /// Check-in time (HH:MM)
        #[arg(long = "in", value_name = "HH:MM", help = "Check-in time (HH:MM), required")]
        time_in: Option<String>,

        /// Check-out time (HH:MM)
        #[arg(long = "out", value_name = "HH:MM", help = "Check-out time (HH:MM)")]
        time_out: Option<String>,

        /// Date label stored with the record (default: today)
        #[arg(long = "date", help = "Date label for the record (default: today)")]
        date: Option<String>,
    },

    /// List tracked trainees in first-recorded order
    Names,

    /// Show the attendance report for one trainee
    Report {
        #[arg(long, short, help = "Trainee name (default: first recorded trainee)")]
        name: Option<String>,
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

    /// Export one trainee's report
    Export {
        #[arg(long, short, help = "Trainee name (default: first recorded trainee)")]
        name: Option<String>,

        #[arg(long, value_enum, help = "Output format (default: from config, xlsx)")]
        format: Option<ExportFormat>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: <name>_report.<ext> in the export directory)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
