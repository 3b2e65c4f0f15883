//! Starter ledger written by `budgetcast init`

use budgetcast_core::config::{AccountBuilder, ExceptionBuilder, Ledger, LedgerBuilder, MovementBuilder};
use jiff::civil::Date;
use rust_decimal::Decimal;

/// A two-account household ledger whose accounts open in `today`'s month
pub fn sample_ledger(today: Date) -> Ledger {
    let (y, m) = (today.year(), today.month());

    LedgerBuilder::new()
        .account(
            AccountBuilder::new("Checking")
                .account_type("checking")
                .description("Day-to-day spending")
                .created(y, m, 1)
                .movement(
                    MovementBuilder::income("Salary", Decimal::new(2_400_00, 2))
                        .monthly()
                        .starting(y, m, 25)
                        .exception(
                            ExceptionBuilder::once(Decimal::new(3_600_00, 2), y, 12, 1)
                                .description("December bonus"),
                        ),
                )
                .movement(
                    MovementBuilder::expense("Rent", Decimal::new(950_00, 2))
                        .monthly()
                        .starting(y, m, 1),
                )
                .movement(
                    MovementBuilder::expense("Car insurance", Decimal::new(540_00, 2))
                        .yearly()
                        .starting(y, m, 10),
                ),
        )
        .account(
            AccountBuilder::new("Savings")
                .account_type("savings")
                .created(y, m, 1)
                .rate_of_pay(Decimal::new(3, 2))
                .tax_rate(Decimal::new(30, 2))
                .movement(
                    MovementBuilder::income("Monthly transfer", Decimal::new(300_00, 2))
                        .monthly()
                        .starting(y, m, 1),
                ),
        )
        .build()
}
