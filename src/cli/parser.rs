use clap::{Parser, Subcommand};

/// Command-line interface definition for rTracker
/// CLI application to track time spent on issues with SQLite
#[derive(Parser)]
#[command(
    name = "rtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tiny time tracker: start, stop and report work on issues using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Command to run (defaults to `report`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Create the tracking table
    Init,

    /// Open a new record, closing any record still open
    #[command(visible_alias = "open")]
    Start {
        /// Project / category identifier
        slug: String,

        /// Sub-task identifier within the slug
        issue: String,
    },

    /// Close the matching open record(s), or every open record
    #[command(visible_aliases = ["stop", "done"])]
    Close {
        slug: Option<String>,
        issue: Option<String>,
    },

    /// Close the record if open, otherwise open a new one
    Toggle { slug: String, issue: String },

    /// Delete every record
    Truncate,

    /// Delete the records of a slug (optionally a single issue)
    Delete { slug: String, issue: Option<String> },

    /// Print all records, newest first
    Report,

    /// Print how many records are open or closed
    Count {
        /// open | closed
        kind: String,
    },

    /// Print the time spent on the latest open or closed record
    Time {
        /// open | closed
        kind: String,
        slug: Option<String>,
        issue: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
