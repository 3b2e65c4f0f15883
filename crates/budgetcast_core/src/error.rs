use std::fmt;

use crate::model::{AccountId, MonthKey};

/// Errors raised by the forecast engine
///
/// Malformed movement data is never an error: it is excluded from the
/// forecast instead. What remains are bad caller input and arithmetic limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// Target date string was not a valid `YYYY-MM-DD` date
    InvalidTargetDate { input: String, reason: String },
    /// Running balance no longer fits in a `Decimal`
    Overflow { account_id: AccountId, month: MonthKey },
    /// Account balances forecast fine but their sum does not fit in a `Decimal`
    TotalOverflow { accounts: usize },
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::InvalidTargetDate { input, reason } => {
                write!(f, "invalid target date {input:?}: {reason}")
            }
            ForecastError::Overflow { account_id, month } => {
                write!(f, "balance overflow for account {account_id} in {month}")
            }
            ForecastError::TotalOverflow { accounts } => {
                write!(f, "total balance overflow across {accounts} accounts")
            }
        }
    }
}

impl std::error::Error for ForecastError {}

/// Convenience alias for forecast results
pub type Result<T> = std::result::Result<T, ForecastError>;
