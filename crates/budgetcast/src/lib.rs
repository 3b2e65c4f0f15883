//! Command-line front end for budgetcast
//!
//! Loads a YAML ledger from the data directory, runs forecasts through
//! `budgetcast_core`, and prints the results as text tables or JSON.

pub mod cli;
pub mod commands;
pub mod data;
pub mod error;
pub mod logging;
pub mod render;

pub use cli::{Args, Command, OutputFormat};
pub use error::{CliError, CliResult};
pub use logging::init_logging;
