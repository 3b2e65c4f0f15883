//! Multi-account forecasts
//!
//! Every account is forecast independently. With the `parallel` feature the
//! work fans out over rayon's pool; either way a failure (error or panic) in
//! one account is captured as an [`AccountFailure`] and never affects the
//! others.

use std::panic::{self, AssertUnwindSafe};

use jiff::civil::Date;
use rust_decimal::Decimal;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ForecastError, Result};
use crate::forecast::forecast_account;
use crate::model::{Account, AccountId, ForecastResult};

/// Successful forecast of one account
#[derive(Debug, Clone, PartialEq)]
pub struct AccountOutcome {
    pub account_id: AccountId,
    pub name: String,
    pub account_type: Option<String>,
    pub result: ForecastResult,
}

/// An account whose forecast could not be computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFailure {
    pub account_id: AccountId,
    pub reason: String,
}

/// Per-account outcomes of a multi-account forecast, both in input order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateForecast {
    pub target_date: Option<Date>,
    pub outcomes: Vec<AccountOutcome>,
    pub failures: Vec<AccountFailure>,
}

impl AggregateForecast {
    /// Sum of the final balances of every successfully forecast account
    pub fn total_balance(&self) -> Result<Decimal> {
        self.outcomes
            .iter()
            .try_fold(Decimal::ZERO, |total, o| total.checked_add(o.result.balance))
            .ok_or(ForecastError::TotalOverflow {
                accounts: self.outcomes.len(),
            })
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn outcome(&self, id: AccountId) -> Option<&AccountOutcome> {
        self.outcomes.iter().find(|o| o.account_id == id)
    }
}

/// Forecast every account in `accounts` up to `target_date`.
pub fn forecast_accounts(accounts: &[Account], target_date: Date) -> AggregateForecast {
    #[cfg(feature = "parallel")]
    let results: Vec<_> = accounts
        .par_iter()
        .map(|account| isolated_forecast(account, target_date))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = accounts
        .iter()
        .map(|account| isolated_forecast(account, target_date))
        .collect();

    let mut aggregate = AggregateForecast {
        target_date: Some(target_date),
        ..Default::default()
    };

    for (account, result) in accounts.iter().zip(results) {
        match result {
            Ok(result) => aggregate.outcomes.push(AccountOutcome {
                account_id: account.id,
                name: account.name.clone(),
                account_type: account.account_type.clone(),
                result,
            }),
            Err(reason) => {
                tracing::warn!(account_id = %account.id, %reason, "account forecast failed");
                aggregate.failures.push(AccountFailure {
                    account_id: account.id,
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        accounts = accounts.len(),
        failed = aggregate.failures.len(),
        "aggregate forecast complete"
    );

    aggregate
}

/// Run one account's forecast, turning both errors and panics into a reason string
fn isolated_forecast(
    account: &Account,
    target_date: Date,
) -> std::result::Result<ForecastResult, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| forecast_account(account, target_date))) {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(err)) => Err(err.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("forecast panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("forecast panicked: {s}")
    } else {
        "forecast panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_variants() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "forecast panicked: boom");

        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "forecast panicked: bang");

        let payload: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "forecast panicked");
    }
}
