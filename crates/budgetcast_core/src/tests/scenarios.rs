//! Hand-checked forecast scenarios
//!
//! These tests verify:
//! - Monthly income accumulation
//! - One-off exception overriding a single month
//! - Interest on a zero balance stays zero
//! - Inverted date ranges produce empty forecasts

use jiff::civil::date;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::{AccountBuilder, ExceptionBuilder, MovementBuilder};
use crate::forecast::forecast_account;
use crate::model::MonthKey;

fn key(year: i16, month: i8) -> MonthKey {
    MonthKey { year, month }
}

fn salary_account() -> AccountBuilder {
    AccountBuilder::new("Checking").created(2024, 1, 1)
}

/// Monthly income of 1000 starting mid-January accumulates linearly
#[test]
fn test_monthly_income_accumulates() {
    let account = salary_account()
        .movement(
            MovementBuilder::income("Salary", dec!(1000))
                .monthly()
                .starting(2024, 1, 15),
        )
        .build();

    let result = forecast_account(&account, date(2024, 3, 1)).unwrap();

    assert_eq!(result.monthly.len(), 3);
    assert_eq!(result.month(key(2024, 1)).unwrap().balance, dec!(1000));
    assert_eq!(result.month(key(2024, 2)).unwrap().balance, dec!(2000));
    assert_eq!(result.month(key(2024, 3)).unwrap().balance, dec!(3000));
    assert_eq!(result.balance, dec!(3000));
}

/// A one-off exception replaces the amount for its month only
#[test]
fn test_once_exception_overrides_single_month() {
    let account = salary_account()
        .movement(
            MovementBuilder::income("Salary", dec!(1000))
                .monthly()
                .starting(2024, 1, 15)
                .exception(ExceptionBuilder::once(dec!(500), 2024, 2, 10)),
        )
        .build();

    let result = forecast_account(&account, date(2024, 3, 1)).unwrap();

    let feb = result.month(key(2024, 2)).unwrap();
    assert_eq!(feb.incomes, dec!(500));
    assert_eq!(feb.balance, dec!(1500));

    let mar = result.month(key(2024, 3)).unwrap();
    assert_eq!(mar.incomes, dec!(1000));
    assert_eq!(mar.balance, dec!(2500));
}

/// With no movements the balance never leaves zero, whatever the rate
#[test]
fn test_interest_on_empty_account_is_zero() {
    let account = salary_account()
        .rate_of_pay(dec!(0.12))
        .tax_rate(dec!(0.25))
        .build();

    let result = forecast_account(&account, date(2026, 12, 31)).unwrap();

    assert_eq!(result.monthly.len(), 36);
    assert!(result.months().all(|(_, m)| m.interest_net.is_zero()));
    assert_eq!(result.balance, Decimal::ZERO);
}

/// A once item whose end precedes its start never activates
#[test]
fn test_once_with_inverted_end_never_activates() {
    let account = salary_account()
        .movement(
            MovementBuilder::income("Refund", dec!(250))
                .once()
                .starting(2024, 5, 1)
                .ending(2024, 1, 1),
        )
        .build();

    let result = forecast_account(&account, date(2024, 12, 1)).unwrap();

    assert!(result.months().all(|(_, m)| m.incomes.is_zero()));
    assert_eq!(result.balance, Decimal::ZERO);
}

/// Target before the creation month: nothing to forecast
#[test]
fn test_target_before_creation_is_empty() {
    let account = AccountBuilder::new("Late")
        .created(2024, 6, 10)
        .movement(
            MovementBuilder::income("Salary", dec!(1000))
                .monthly()
                .starting(2024, 1, 1),
        )
        .build();

    let result = forecast_account(&account, date(2024, 5, 31)).unwrap();

    assert!(result.is_empty());
    assert_eq!(result.balance, Decimal::ZERO);
}

/// Target in the creation month: exactly one entry
#[test]
fn test_target_in_creation_month() {
    let account = AccountBuilder::new("Fresh")
        .created(2024, 6, 30)
        .movement(MovementBuilder::expense("Fee", dec!(4.99)).monthly().starting(2024, 6, 1))
        .build();

    let result = forecast_account(&account, date(2024, 6, 1)).unwrap();

    assert_eq!(result.first_month(), Some(key(2024, 6)));
    assert_eq!(result.last_month(), Some(key(2024, 6)));
    assert_eq!(result.balance, dec!(-4.99));
}

/// Movements starting before the account was created still count from the
/// creation month on
#[test]
fn test_movement_started_before_creation() {
    let account = AccountBuilder::new("Joint")
        .created(2024, 3, 1)
        .movement(
            MovementBuilder::income("Allowance", dec!(100))
                .every_n_months(2)
                .starting(2024, 1, 1),
        )
        .build();

    let result = forecast_account(&account, date(2024, 6, 1)).unwrap();

    // Active Jan, Mar, May; only Mar and May fall in the horizon
    let incomes: Vec<Decimal> = result.months().map(|(_, m)| m.incomes).collect();
    assert_eq!(incomes, vec![dec!(100), dec!(0), dec!(100), dec!(0)]);
    assert_eq!(result.balance, dec!(200));
}

/// Incomes, expenses and net interest compound over several months
#[test]
fn test_mixed_flows_with_interest() {
    let account = AccountBuilder::new("Savings")
        .created(2024, 1, 1)
        .rate_of_pay(dec!(0.12))
        .tax_rate(dec!(0.5))
        .movement(MovementBuilder::income("Salary", dec!(2000)).monthly().starting(2024, 1, 1))
        .movement(MovementBuilder::expense("Rent", dec!(1000)).monthly().starting(2024, 1, 1))
        .build();

    let result = forecast_account(&account, date(2024, 3, 1)).unwrap();

    // Jan: 0 interest, balance 1000
    // Feb: 1000 * 1% = 10 gross, 5 net, balance 2005
    // Mar: 2005 * 1% = 20.05 gross, 10.025 net, balance 3015.025
    assert_eq!(result.month(key(2024, 1)).unwrap().balance, dec!(1000));
    assert_eq!(result.month(key(2024, 2)).unwrap().interest_net, dec!(5));
    assert_eq!(result.month(key(2024, 2)).unwrap().balance, dec!(2005));
    assert_eq!(result.month(key(2024, 3)).unwrap().interest_net, dec!(10.025));
    assert_eq!(result.balance, dec!(3015.025));

    let totals = result.totals();
    assert_eq!(totals.incomes, dec!(6000));
    assert_eq!(totals.expenses, dec!(3000));
    assert_eq!(totals.interest_net, dec!(15.025));
}

/// Malformed movements are skipped without affecting the rest
#[test]
fn test_malformed_movements_are_excluded() {
    use crate::model::FrequencyType;

    let mut account = salary_account()
        .movement(MovementBuilder::income("Good", dec!(10)).monthly().starting(2024, 1, 1))
        .movement(
            MovementBuilder::income("Unknown frequency", dec!(1000))
                .frequency(FrequencyType::Unrecognized, Some(1))
                .starting(2024, 1, 1),
        )
        .movement(MovementBuilder::expense("No start", dec!(1000)).monthly())
        .build();
    // Missing frequency_n on an every-N movement falls back to monthly
    account.movements.push(
        MovementBuilder::income("Implicit monthly", dec!(1))
            .frequency(FrequencyType::EveryNMonths, None)
            .starting(2024, 1, 1)
            .build(crate::model::MovementId(99)),
    );

    let result = forecast_account(&account, date(2024, 4, 1)).unwrap();

    assert_eq!(result.balance, dec!(44));
}
