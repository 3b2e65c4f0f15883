//! Account Builder DSL
//!
//! ```ignore
//! let savings = AccountBuilder::new("Savings")
//!     .account_type("savings")
//!     .created(2024, 1, 1)
//!     .rate_of_pay(dec!(0.03))
//!     .tax_rate(dec!(0.30))
//!     .movement(MovementBuilder::income("Transfer", dec!(200)).monthly().starting(2024, 1, 1))
//!     .build();
//! ```

use jiff::civil::Date;
use rust_decimal::Decimal;

use super::builder::IdAllocator;
use super::movement_builder::MovementBuilder;
use crate::model::{Account, AccountId, MovementId};

/// Builder for creating accounts with a fluent API
#[derive(Debug, Clone)]
pub struct AccountBuilder {
    pub(crate) id: Option<AccountId>,
    pub(crate) name: String,
    account_type: Option<String>,
    description: Option<String>,
    created_at: Date,
    tax_rate: Decimal,
    rate_of_pay: Decimal,
    movements: Vec<MovementBuilder>,
}

impl AccountBuilder {
    /// New account created on 2024-01-01 with no interest and no tax
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            account_type: None,
            description: None,
            created_at: jiff::civil::date(2024, 1, 1),
            tax_rate: Decimal::ZERO,
            rate_of_pay: Decimal::ZERO,
            movements: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(AccountId(id));
        self
    }

    #[must_use]
    pub fn account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn created(self, year: i16, month: i8, day: i8) -> Self {
        self.created_at(jiff::civil::date(year, month, day))
    }

    #[must_use]
    pub fn created_at(mut self, date: Date) -> Self {
        self.created_at = date;
        self
    }

    /// Annual interest rate as a fraction
    #[must_use]
    pub fn rate_of_pay(mut self, rate: Decimal) -> Self {
        self.rate_of_pay = rate;
        self
    }

    /// Share of gross interest withheld as tax
    #[must_use]
    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    #[must_use]
    pub fn movement(mut self, movement: MovementBuilder) -> Self {
        self.movements.push(movement);
        self
    }

    /// Build with id 1 (unless set); movements without an id get the lowest free ones
    pub fn build(self) -> Account {
        let mut movement_ids = IdAllocator::reserving(self.explicit_movement_ids());
        self.build_with(AccountId(1), &mut movement_ids)
    }

    pub(crate) fn explicit_movement_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.movements.iter().filter_map(|m| m.id.map(|id| id.0))
    }

    /// Build using `fallback` as the account id when none was set, drawing
    /// missing movement ids from `movement_ids`.
    pub(crate) fn build_with(self, fallback: AccountId, movement_ids: &mut IdAllocator) -> Account {
        let movements = self
            .movements
            .into_iter()
            .map(|m| match m.id {
                Some(id) => m.build(id),
                None => m.build(MovementId(movement_ids.next_free())),
            })
            .collect();

        Account {
            id: self.id.unwrap_or(fallback),
            name: self.name,
            account_type: self.account_type,
            description: self.description,
            created_at: self.created_at,
            tax_rate: self.tax_rate,
            rate_of_pay: self.rate_of_pay,
            movements,
        }
    }
}
