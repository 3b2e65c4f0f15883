//! Budget forecasting library
//!
//! This crate projects the balance of budget accounts month by month.
//! It supports:
//! - One-off and every-N-months income/expense movements
//! - Month-scoped amount overrides (exceptions), first match wins
//! - Monthly interest accrual on the running balance, net of tax
//! - Multi-account forecasts with per-account failure isolation
//! - A cross-account feed of recent occurrences and movement search
//!
//! # Builder DSL
//!
//! ```ignore
//! use budgetcast_core::config::{AccountBuilder, MovementBuilder};
//! use budgetcast_core::forecast::forecast_account;
//! use rust_decimal_macros::dec;
//!
//! let account = AccountBuilder::new("Checking")
//!     .created(2024, 1, 1)
//!     .movement(MovementBuilder::income("Salary", dec!(1_000)).monthly().starting(2024, 1, 15))
//!     .build();
//!
//! let result = forecast_account(&account, jiff::civil::date(2024, 3, 1))?;
//! assert_eq!(result.balance, dec!(3_000));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod activity;
pub mod aggregate;
pub mod clock;
pub mod date_math;
pub mod error;
pub mod forecast;
pub mod recurrence;
pub mod report;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use activity::{AccountOccurrence, MovementMatch, recent_occurrences, search_movements};
pub use aggregate::{AccountFailure, AccountOutcome, AggregateForecast, forecast_accounts};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AccountBuilder, ExceptionBuilder, Ledger, LedgerBuilder, MovementBuilder};
pub use error::ForecastError;
pub use forecast::forecast_account;
pub use recurrence::{Occurrence, Schedule, is_applicable_for_month, resolve_effective_amount};
pub use report::{AccountForecastReport, GlobalForecastReport, account_report, global_report};
