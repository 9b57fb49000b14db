use clap::{Parser, Subcommand};
use critterdex::model::{CaughtStatus, CreatureId, SortKey};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "critterdex", version)]
#[command(about = "Keep track of the creatures you have seen and caught", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Database file (defaults to the configured database)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive session (the default)
    #[command(alias = "sh")]
    Shell,

    /// List all records
    #[command(alias = "ls")]
    List {
        /// Sort order: id, name, primary or secondary
        #[arg(short, long, default_value = "id")]
        sort: SortKey,
    },

    /// Add a record and save the database
    #[command(alias = "a")]
    Add {
        id: CreatureId,
        name: String,
        primary: String,

        /// Secondary type, if any
        #[arg(short, long, default_value = "")]
        secondary: String,

        /// Mark as caught
        #[arg(short, long)]
        caught: bool,
    },

    /// Change a record's id, name or types and save the database
    #[command(alias = "e")]
    Edit {
        /// Name or id of the record
        query: String,

        #[arg(long)]
        id: Option<CreatureId>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        primary: Option<String>,

        /// New secondary type (pass "" to clear it)
        #[arg(long)]
        secondary: Option<String>,
    },

    /// Remove a record and save the database
    #[command(alias = "rm")]
    Remove {
        /// Name or id of the record
        query: String,
    },

    /// Set a record's caught status and save the database
    Caught {
        /// Name or id of the record
        query: String,

        /// yes or no
        #[arg(value_parser = parse_caught)]
        status: CaughtStatus,
    },

    /// Validate the database file and report how many records it holds
    Check,

    /// Get or set configuration
    Config {
        /// Configuration key (database, load-on-start)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_caught(s: &str) -> Result<CaughtStatus, String> {
    CaughtStatus::from_answer(s).ok_or_else(|| format!("expected yes or no, found '{}'", s))
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
