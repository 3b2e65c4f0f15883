use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "budgetcast")]
#[command(about = "Project budget account balances month by month")]
pub struct Args {
    /// Path to the data directory (default: ~/.budgetcast/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Ledger file to read instead of the configured one
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    /// Output format (overrides config.yaml)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forecast one account up to a target date
    Forecast {
        /// Account id
        account: u32,
        /// Target date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        target_date: Option<String>,
    },
    /// Forecast every account and sum the balances
    Global {
        /// Target date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        target_date: Option<String>,
    },
    /// List the months in which a movement is active
    Occurrences {
        /// Account id
        account: u32,
        /// Movement id
        movement: u32,
        /// Last month to list, as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        until: Option<String>,
    },
    /// Show the latest occurrences across every account, newest first
    Recent {
        /// Last month to include, as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        until: Option<String>,
        /// Maximum number of entries
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
    /// List movements, optionally filtered by name or description
    Movements {
        /// Case-insensitive text to look for
        #[arg(short, long)]
        query: Option<String>,
    },
    /// List the accounts in the ledger
    Accounts,
    /// Write a starter ledger and config to the data directory
    Init {
        /// Overwrite an existing ledger
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
