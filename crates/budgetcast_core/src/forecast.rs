//! Month-by-month balance projection for a single account
//!
//! The horizon runs from the account's creation month to the target month,
//! both inclusive. Each month sums the active movements, accrues interest on
//! the previous closing balance net of tax, and records the new closing
//! balance. The starting balance is always zero.

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::date_math::{month_series, month_start};
use crate::error::{ForecastError, Result};
use crate::model::{Account, ForecastResult, MonthKey, MonthlySummary, MovementKind};
use crate::recurrence::effective_amount_for_month;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Project `account` up to the month containing `target_date`.
///
/// A target before the account's creation month yields an empty forecast with
/// a zero balance. Movements with malformed recurrence data are skipped for
/// the months they can't be resolved in; they never fail the forecast.
pub fn forecast_account(account: &Account, target_date: Date) -> Result<ForecastResult> {
    let start = month_start(account.created_at);
    let end = month_start(target_date);

    if end < start {
        tracing::debug!(
            account_id = %account.id,
            %target_date,
            "target precedes account creation, empty forecast"
        );
        return Ok(ForecastResult::empty());
    }

    let monthly_rate = account.rate_of_pay / MONTHS_PER_YEAR;
    let mut result = ForecastResult::empty();
    let mut balance = Decimal::ZERO;

    for month in month_series(start, end) {
        let key = MonthKey::of(month);
        let overflow = || ForecastError::Overflow {
            account_id: account.id,
            month: key,
        };

        let mut incomes = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;

        for movement in &account.movements {
            let Some(amount) = effective_amount_for_month(movement, month) else {
                continue;
            };
            match movement.kind {
                MovementKind::Income => {
                    incomes = incomes.checked_add(amount).ok_or_else(overflow)?;
                }
                MovementKind::Expense => {
                    expenses = expenses.checked_add(amount).ok_or_else(overflow)?;
                }
                MovementKind::Other => {}
            }
        }

        // Interest accrues on last month's closing balance
        let interest_gross = balance.checked_mul(monthly_rate).ok_or_else(overflow)?;
        let tax = interest_gross
            .checked_mul(account.tax_rate)
            .ok_or_else(overflow)?;
        let interest_net = interest_gross.checked_sub(tax).ok_or_else(overflow)?;

        balance = balance
            .checked_add(incomes)
            .and_then(|b| b.checked_sub(expenses))
            .and_then(|b| b.checked_add(interest_net))
            .ok_or_else(overflow)?;

        result.monthly.insert(
            key,
            MonthlySummary {
                incomes,
                expenses,
                interest_net,
                balance,
            },
        );
    }

    result.balance = balance;

    tracing::debug!(
        account_id = %account.id,
        months = result.monthly.len(),
        balance = %result.balance,
        "account forecast complete"
    );

    Ok(result)
}
