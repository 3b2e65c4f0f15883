//! Forecast reports
//!
//! The two shapes handed to outer layers: a single-account report with its
//! monthly breakdown, and a global report summing every account a user can
//! see. Both serialize with camelCase keys and plain JSON numbers.

use std::collections::BTreeMap;

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::forecast_accounts;
use crate::clock::Clock;
use crate::error::{ForecastError, Result};
use crate::forecast::forecast_account;
use crate::model::{Account, AccountId, MonthKey, MonthlySummary};

/// Parse a `YYYY-MM-DD` target date, defaulting to `clock.today()` when absent.
pub fn resolve_target_date(input: Option<&str>, clock: &dyn Clock) -> Result<Date> {
    match input.map(str::trim) {
        None | Some("") => Ok(clock.today()),
        Some(raw) => raw
            .parse::<Date>()
            .map_err(|e| ForecastError::InvalidTargetDate {
                input: raw.to_string(),
                reason: e.to_string(),
            }),
    }
}

/// Forecast of a single account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountForecastReport {
    pub account_id: AccountId,
    pub target_date: Date,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub monthly_breakdown: BTreeMap<MonthKey, MonthlySummary>,
}

/// Final balance of one account inside a global report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalanceItem {
    pub id: AccountId,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Account left out of a global total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedAccountItem {
    pub account_id: AccountId,
    pub reason: String,
}

/// Forecast across every account a user owns or can see
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalForecastReport {
    pub target_date: Date,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_balance: Decimal,
    pub accounts: Vec<AccountBalanceItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailedAccountItem>,
}

/// Build the single-account report for `account` at `target_date`.
pub fn account_report(account: &Account, target_date: Date) -> Result<AccountForecastReport> {
    let result = forecast_account(account, target_date)?;
    Ok(AccountForecastReport {
        account_id: account.id,
        target_date,
        balance: result.balance,
        monthly_breakdown: result.monthly,
    })
}

/// Build the global report over `accounts` at `target_date`.
///
/// Accounts are listed by name. Accounts whose forecast failed are excluded
/// from the total and listed under `failures`. Fails only when the total of
/// the successful balances overflows.
pub fn global_report(accounts: &[Account], target_date: Date) -> Result<GlobalForecastReport> {
    let aggregate = forecast_accounts(accounts, target_date);
    let total_balance = aggregate.total_balance()?;

    let mut items: Vec<AccountBalanceItem> = aggregate
        .outcomes
        .into_iter()
        .map(|o| AccountBalanceItem {
            id: o.account_id,
            name: o.name,
            account_type: o.account_type,
            balance: o.result.balance,
        })
        .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(GlobalForecastReport {
        target_date,
        total_balance,
        accounts: items,
        failures: aggregate
            .failures
            .into_iter()
            .map(|f| FailedAccountItem {
                account_id: f.account_id,
                reason: f.reason,
            })
            .collect(),
    })
}
