//! Forecast results
//!
//! Output types of the forecast engine. Amounts stay `Decimal` in memory and
//! are written out as JSON numbers at the serialization boundary.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month::MonthKey;

/// Figures for one forecasted month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub incomes: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
    /// Interest accrued on the prior closing balance, net of tax
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_net: Decimal,
    /// Closing balance after this month's flows and interest
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl MonthlySummary {
    /// Incomes minus expenses, interest excluded
    pub fn net_flow(&self) -> Decimal {
        self.incomes - self.expenses
    }
}

/// Sums over a whole forecast horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForecastTotals {
    pub incomes: Decimal,
    pub expenses: Decimal,
    pub interest_net: Decimal,
}

/// Projected balance of one account at a target month, with the
/// month-by-month breakdown that led to it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForecastResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// One entry per month from the account's creation month to the target month
    pub monthly: BTreeMap<MonthKey, MonthlySummary>,
}

impl ForecastResult {
    /// A forecast covering no months
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty()
    }

    pub fn month(&self, key: MonthKey) -> Option<&MonthlySummary> {
        self.monthly.get(&key)
    }

    /// Months in chronological order
    pub fn months(&self) -> impl DoubleEndedIterator<Item = (&MonthKey, &MonthlySummary)> {
        self.monthly.iter()
    }

    pub fn first_month(&self) -> Option<MonthKey> {
        self.monthly.keys().next().copied()
    }

    pub fn last_month(&self) -> Option<MonthKey> {
        self.monthly.keys().next_back().copied()
    }

    pub fn totals(&self) -> ForecastTotals {
        self.monthly
            .values()
            .fold(ForecastTotals::default(), |mut acc, m| {
                acc.incomes += m.incomes;
                acc.expenses += m.expenses;
                acc.interest_net += m.interest_net;
                acc
            })
    }
}
