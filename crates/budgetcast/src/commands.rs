//! Command execution
//!
//! Each subcommand resolves to an [`Output`] value; rendering it as text or
//! JSON is left to [`crate::render`].

use std::path::{Path, PathBuf};

use budgetcast_core::config::Ledger;
use budgetcast_core::model::{AccountId, FrequencyType, MonthKey, MovementId, MovementKind};
use budgetcast_core::recurrence::occurrences;
use budgetcast_core::report::resolve_target_date;
use budgetcast_core::{
    AccountForecastReport, Clock, GlobalForecastReport, account_report, global_report,
    recent_occurrences, search_movements,
};
use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::Command;
use crate::data::sample::sample_ledger;
use crate::data::DataDirectory;
use crate::error::{CliError, CliResult};

/// Result of running one subcommand
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Account(AccountForecastReport),
    Global(GlobalForecastReport),
    Occurrences(OccurrencesReport),
    Recent(RecentReport),
    Movements(Vec<MovementSummary>),
    Accounts(Vec<AccountSummary>),
    Initialized(InitReport),
}

/// Active months of one movement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrencesReport {
    pub account_id: AccountId,
    pub movement_id: MovementId,
    pub movement_name: String,
    pub until: Date,
    pub occurrences: Vec<OccurrenceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccurrenceItem {
    pub month: MonthKey,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub overridden: bool,
}

/// Latest occurrences across all accounts, newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentReport {
    pub until: Date,
    pub entries: Vec<RecentEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
    pub account_id: AccountId,
    pub account_name: String,
    pub movement_id: MovementId,
    pub movement_name: String,
    pub month: MonthKey,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub overridden: bool,
}

/// One line of the `movements` listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementSummary {
    pub account_id: AccountId,
    pub account_name: String,
    pub id: MovementId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub frequency: FrequencyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_n: Option<i32>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

/// One line of the `accounts` listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: AccountId,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub created_at: Date,
    pub movements: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitReport {
    pub ledger_path: PathBuf,
    pub accounts: usize,
}

/// Run `command`, loading the ledger at `ledger_path` when the command needs one.
pub fn execute(
    command: &Command,
    data_dir: &DataDirectory,
    ledger_path: &Path,
    clock: &dyn Clock,
) -> CliResult<Output> {
    tracing::debug!(?command, ledger = %ledger_path.display(), "executing command");

    match command {
        Command::Init { force } => init(data_dir, ledger_path, *force, clock).map(Output::Initialized),
        Command::Forecast {
            account,
            target_date,
        } => {
            let ledger = data_dir.load_ledger(ledger_path)?;
            forecast(&ledger, AccountId(*account), target_date.as_deref(), clock).map(Output::Account)
        }
        Command::Global { target_date } => {
            let ledger = data_dir.load_ledger(ledger_path)?;
            global(&ledger, target_date.as_deref(), clock).map(Output::Global)
        }
        Command::Occurrences {
            account,
            movement,
            until,
        } => {
            let ledger = data_dir.load_ledger(ledger_path)?;
            movement_occurrences(
                &ledger,
                AccountId(*account),
                MovementId(*movement),
                until.as_deref(),
                clock,
            )
            .map(Output::Occurrences)
        }
        Command::Recent { until, limit } => {
            let ledger = data_dir.load_ledger(ledger_path)?;
            recent(&ledger, until.as_deref(), *limit, clock).map(Output::Recent)
        }
        Command::Movements { query } => {
            let ledger = data_dir.load_ledger(ledger_path)?;
            Ok(Output::Movements(movements(&ledger, query.as_deref())))
        }
        Command::Accounts => {
            let ledger = data_dir.load_ledger(ledger_path)?;
            Ok(Output::Accounts(accounts(&ledger)))
        }
    }
}

/// Forecast a single account
pub fn forecast(
    ledger: &Ledger,
    account_id: AccountId,
    target_date: Option<&str>,
    clock: &dyn Clock,
) -> CliResult<AccountForecastReport> {
    let target_date = resolve_target_date(target_date, clock)?;
    let account = ledger
        .account(account_id)
        .ok_or(CliError::AccountNotFound(account_id))?;
    Ok(account_report(account, target_date)?)
}

/// Forecast every account in the ledger
pub fn global(
    ledger: &Ledger,
    target_date: Option<&str>,
    clock: &dyn Clock,
) -> CliResult<GlobalForecastReport> {
    let target_date = resolve_target_date(target_date, clock)?;
    let report = global_report(&ledger.accounts, target_date)?;
    if !report.failures.is_empty() {
        tracing::warn!(
            failed = report.failures.len(),
            "some accounts were left out of the global total"
        );
    }
    Ok(report)
}

pub fn movement_occurrences(
    ledger: &Ledger,
    account_id: AccountId,
    movement_id: MovementId,
    until: Option<&str>,
    clock: &dyn Clock,
) -> CliResult<OccurrencesReport> {
    let until = resolve_target_date(until, clock)?;
    let account = ledger
        .account(account_id)
        .ok_or(CliError::AccountNotFound(account_id))?;
    let movement = account
        .movement(movement_id)
        .ok_or(CliError::MovementNotFound {
            account: account_id,
            movement: movement_id,
        })?;

    Ok(OccurrencesReport {
        account_id,
        movement_id,
        movement_name: movement.name.clone(),
        until,
        occurrences: occurrences(movement, until)
            .into_iter()
            .map(|o| OccurrenceItem {
                month: o.month,
                kind: o.kind,
                amount: o.amount,
                overridden: o.overridden,
            })
            .collect(),
    })
}

/// Latest `limit` occurrences across the ledger up to `until` (default today)
pub fn recent(
    ledger: &Ledger,
    until: Option<&str>,
    limit: usize,
    clock: &dyn Clock,
) -> CliResult<RecentReport> {
    let until = resolve_target_date(until, clock)?;
    let entries = recent_occurrences(&ledger.accounts, until, limit)
        .into_iter()
        .map(|e| RecentEntry {
            account_id: e.account.id,
            account_name: e.account.name.clone(),
            movement_id: e.movement.id,
            movement_name: e.movement.name.clone(),
            month: e.occurrence.month,
            kind: e.occurrence.kind,
            amount: e.occurrence.amount,
            overridden: e.occurrence.overridden,
        })
        .collect();
    Ok(RecentReport { until, entries })
}

/// Movements matching `query`, or all of them without one
pub fn movements(ledger: &Ledger, query: Option<&str>) -> Vec<MovementSummary> {
    search_movements(&ledger.accounts, query.unwrap_or_default())
        .into_iter()
        .map(|m| MovementSummary {
            account_id: m.account.id,
            account_name: m.account.name.clone(),
            id: m.movement.id,
            name: m.movement.name.clone(),
            description: m.movement.description.clone(),
            kind: m.movement.kind,
            amount: m.movement.amount,
            frequency: m.movement.frequency,
            frequency_n: m.movement.frequency_n,
            start_date: m.movement.start_date,
            end_date: m.movement.end_date,
        })
        .collect()
}

pub fn accounts(ledger: &Ledger) -> Vec<AccountSummary> {
    ledger
        .accounts
        .iter()
        .map(|a| AccountSummary {
            id: a.id,
            name: a.name.clone(),
            account_type: a.account_type.clone(),
            created_at: a.created_at,
            movements: a.movements.len(),
        })
        .collect()
}

/// Write the starter ledger and make sure config.yaml exists
pub fn init(
    data_dir: &DataDirectory,
    ledger_path: &Path,
    force: bool,
    clock: &dyn Clock,
) -> CliResult<InitReport> {
    if ledger_path.exists() && !force {
        return Err(CliError::LedgerExists(ledger_path.to_path_buf()));
    }

    let ledger = sample_ledger(clock.today());
    data_dir.save_ledger(ledger_path, &ledger)?;

    let config = data_dir.load_config()?;
    data_dir.save_config(&config)?;

    tracing::info!(path = %ledger_path.display(), "starter ledger written");

    Ok(InitReport {
        ledger_path: ledger_path.to_path_buf(),
        accounts: ledger.accounts.len(),
    })
}
