use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for ganttboard
/// CLI application to pivot scheduled test runs into Gantt calendars
#[derive(Parser)]
#[command(
    name = "ganttboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pivot scheduled test-run records into interactive Gantt-style HTML calendars",
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

/// The four calendar views the core can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    Tracks,
    Engineers,
    Projects,
    Summary,
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Add a scheduled run record
    Add {
        /// Scheduled date (YYYY-MM-DD)
        date: String,

        /// Project identifier
        project: String,

        /// Scenario label
        scenario: String,

        #[arg(long, help = "Run status ('to-do' marks the run as still open)")]
        status: Option<String>,

        #[arg(long, help = "Track the run is scheduled on")]
        track: Option<String>,

        #[arg(long, help = "Comma-separated test engineer list")]
        engineers: Option<String>,

        #[arg(long, help = "Shift code: M, P, N, or pipe-combined (e.g. M|P)")]
        shift: Option<String>,

        #[arg(long = "asset-line", help = "Asset line")]
        asset_line: Option<String>,

        #[arg(long, help = "Platform")]
        platform: Option<String>,
    },

    /// List run records
    List {
        #[arg(
            long,
            help = "Period filter: YYYY, YYYY-MM, YYYY-MM-DD, or start:end"
        )]
        period: Option<String>,

        #[arg(long, help = "Only today's records")]
        now: bool,
    },

    /// Render one or all calendar views to HTML
    Render {
        #[arg(long, value_enum, default_value = "all")]
        view: ViewKind,

        /// Output directory for the generated HTML files
        #[arg(long)]
        out: String,

        #[arg(long, help = "Discard the cached record set before rendering")]
        refresh: bool,
    },

    /// Daily distinct-project counts
    Stats {
        #[arg(long, help = "List the projects scheduled on this date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Export the normalized record set
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Absolute path of the output file
        #[arg(long)]
        file: String,

        #[arg(long, help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
