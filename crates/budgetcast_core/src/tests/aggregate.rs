//! Tests for multi-account forecasts
//!
//! These tests verify:
//! - Outcomes keep input order and match single-account forecasts
//! - A failing account is isolated and reported by id
//! - Totals only include successful accounts
//! - An overflowing total is reported, not panicked on

use jiff::civil::date;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::aggregate::forecast_accounts;
use crate::config::{AccountBuilder, Ledger, LedgerBuilder, MovementBuilder};
use crate::report::global_report;
use crate::error::ForecastError;
use crate::forecast::forecast_account;
use crate::model::AccountId;

fn household() -> Ledger {
    LedgerBuilder::new()
        .account(
            AccountBuilder::new("Checking")
                .account_type("checking")
                .created(2024, 1, 1)
                .movement(MovementBuilder::income("Salary", dec!(2500)).monthly().starting(2024, 1, 1))
                .movement(MovementBuilder::expense("Rent", dec!(1100)).monthly().starting(2024, 1, 1)),
        )
        .account(
            AccountBuilder::new("Savings")
                .account_type("savings")
                .created(2024, 3, 1)
                .rate_of_pay(dec!(0.03))
                .tax_rate(dec!(0.3))
                .movement(MovementBuilder::income("Transfer", dec!(400)).monthly().starting(2024, 3, 1)),
        )
        .account(AccountBuilder::new("Future").created(2030, 1, 1))
        .build()
}

/// Account whose running balance overflows in its second month
fn overflowing() -> AccountBuilder {
    AccountBuilder::new("Broken")
        .created(2024, 1, 1)
        .movement(MovementBuilder::income("Too much", Decimal::MAX).monthly().starting(2024, 1, 1))
}

#[test]
fn test_outcomes_match_individual_forecasts() {
    let ledger = household();
    let target = date(2025, 6, 30);

    let aggregate = forecast_accounts(&ledger.accounts, target);

    assert!(!aggregate.has_failures());
    assert_eq!(aggregate.target_date, Some(target));
    let ids: Vec<AccountId> = aggregate.outcomes.iter().map(|o| o.account_id).collect();
    assert_eq!(ids, vec![AccountId(1), AccountId(2), AccountId(3)]);

    for account in &ledger.accounts {
        let expected = forecast_account(account, target).unwrap();
        assert_eq!(aggregate.outcome(account.id).unwrap().result, expected);
    }
}

#[test]
fn test_total_is_sum_of_balances() {
    let ledger = household();
    let aggregate = forecast_accounts(&ledger.accounts, date(2024, 12, 1));

    let sum: Decimal = ledger
        .accounts
        .iter()
        .map(|a| forecast_account(a, date(2024, 12, 1)).unwrap().balance)
        .sum();
    assert_eq!(aggregate.total_balance().unwrap(), sum);

    // Checking: 12 months of +1400
    assert_eq!(aggregate.outcome(AccountId(1)).unwrap().result.balance, dec!(16800));
    // Not created yet
    assert!(aggregate.outcome(AccountId(3)).unwrap().result.is_empty());
}

#[test]
fn test_failing_account_is_isolated() {
    let ledger = LedgerBuilder::new()
        .account(AccountBuilder::new("Good").created(2024, 1, 1).movement(
            MovementBuilder::income("Salary", dec!(100)).monthly().starting(2024, 1, 1),
        ))
        .account(overflowing())
        .account(AccountBuilder::new("Also good").created(2024, 1, 1).movement(
            MovementBuilder::expense("Fee", dec!(1)).monthly().starting(2024, 1, 1),
        ))
        .build();

    let aggregate = forecast_accounts(&ledger.accounts, date(2024, 4, 1));

    assert_eq!(aggregate.outcomes.len(), 2);
    assert_eq!(aggregate.failures.len(), 1);
    assert_eq!(aggregate.failures[0].account_id, AccountId(2));
    assert!(aggregate.failures[0].reason.contains("overflow"));

    assert_eq!(aggregate.total_balance().unwrap(), dec!(400) - dec!(4));
}

#[test]
fn test_empty_ledger() {
    let aggregate = forecast_accounts(&[], date(2024, 1, 1));
    assert!(aggregate.outcomes.is_empty());
    assert!(!aggregate.has_failures());
    assert_eq!(aggregate.total_balance().unwrap(), Decimal::ZERO);
}

/// Two accounts that each forecast fine but cannot be summed
fn half_max_pair() -> Ledger {
    let half = Decimal::MAX / Decimal::TWO + Decimal::ONE;
    LedgerBuilder::new()
        .account(AccountBuilder::new("Left").created(2024, 1, 1).movement(
            MovementBuilder::income("Windfall", half).once().starting(2024, 1, 1),
        ))
        .account(AccountBuilder::new("Right").created(2024, 1, 1).movement(
            MovementBuilder::income("Windfall", half).once().starting(2024, 1, 1),
        ))
        .build()
}

#[test]
fn test_total_overflow_is_an_error() {
    let ledger = half_max_pair();
    let aggregate = forecast_accounts(&ledger.accounts, date(2024, 1, 1));

    assert_eq!(aggregate.outcomes.len(), 2);
    assert!(!aggregate.has_failures());
    assert_eq!(
        aggregate.total_balance(),
        Err(ForecastError::TotalOverflow { accounts: 2 })
    );
}

#[test]
fn test_global_report_total_overflow_does_not_panic() {
    let ledger = half_max_pair();
    let outcome = std::panic::catch_unwind(|| global_report(&ledger.accounts, date(2024, 1, 1)));

    let result = outcome.expect("global_report must not panic");
    assert!(matches!(
        result,
        Err(ForecastError::TotalOverflow { accounts: 2 })
    ));
}
