use budgetcast_core::ForecastError;
use budgetcast_core::model::{AccountId, MovementId};

use crate::data::StorageError;

/// Errors surfaced by the command-line front end
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Movement {movement} not found in account {account}")]
    MovementNotFound {
        account: AccountId,
        movement: MovementId,
    },

    #[error("Ledger already exists at {0} (use --force to overwrite)")]
    LedgerExists(std::path::PathBuf),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Helper type for CLI results
pub type CliResult<T> = Result<T, CliError>;
