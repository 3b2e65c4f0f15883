//! Movement and exception builders
//!
//! ```ignore
//! let bonus = MovementBuilder::income("Bonus", dec!(5_000)).once().starting(2024, 12, 15);
//! let rent = MovementBuilder::expense("Rent", dec!(1_200))
//!     .monthly()
//!     .starting(2024, 1, 1)
//!     .exception(ExceptionBuilder::every_n_months(dec!(1_250), 1, 2025, 1, 1));
//! ```

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::model::{FrequencyType, Movement, MovementException, MovementId, MovementKind};

/// Builder for a movement
#[derive(Debug, Clone)]
pub struct MovementBuilder {
    pub(crate) id: Option<MovementId>,
    name: String,
    description: Option<String>,
    kind: MovementKind,
    amount: Decimal,
    frequency: FrequencyType,
    frequency_n: Option<i32>,
    start_date: Option<Date>,
    end_date: Option<Date>,
    exceptions: Vec<MovementException>,
}

impl MovementBuilder {
    fn new(name: impl Into<String>, kind: MovementKind, amount: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            kind,
            amount,
            frequency: FrequencyType::Once,
            frequency_n: None,
            start_date: None,
            end_date: None,
            exceptions: Vec::new(),
        }
    }

    /// Money coming in. Defaults to a one-off movement.
    #[must_use]
    pub fn income(name: impl Into<String>, amount: Decimal) -> Self {
        Self::new(name, MovementKind::Income, amount)
    }

    /// Money going out. Defaults to a one-off movement.
    #[must_use]
    pub fn expense(name: impl Into<String>, amount: Decimal) -> Self {
        Self::new(name, MovementKind::Expense, amount)
    }

    #[must_use]
    pub fn kind(mut self, kind: MovementKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(MovementId(id));
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn once(mut self) -> Self {
        self.frequency = FrequencyType::Once;
        self.frequency_n = None;
        self
    }

    #[must_use]
    pub fn monthly(self) -> Self {
        self.every_n_months(1)
    }

    #[must_use]
    pub fn quarterly(self) -> Self {
        self.every_n_months(3)
    }

    #[must_use]
    pub fn yearly(self) -> Self {
        self.every_n_months(12)
    }

    #[must_use]
    pub fn every_n_months(mut self, n: i32) -> Self {
        self.frequency = FrequencyType::EveryNMonths;
        self.frequency_n = Some(n);
        self
    }

    /// Raw frequency fields, for exercising malformed input
    #[must_use]
    pub fn frequency(mut self, frequency: FrequencyType, frequency_n: Option<i32>) -> Self {
        self.frequency = frequency;
        self.frequency_n = frequency_n;
        self
    }

    #[must_use]
    pub fn starting(self, year: i16, month: i8, day: i8) -> Self {
        self.start_date(jiff::civil::date(year, month, day))
    }

    #[must_use]
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub fn ending(self, year: i16, month: i8, day: i8) -> Self {
        self.end_date(jiff::civil::date(year, month, day))
    }

    #[must_use]
    pub fn end_date(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Append an exception; earlier exceptions take precedence
    #[must_use]
    pub fn exception(mut self, exception: ExceptionBuilder) -> Self {
        self.exceptions.push(exception.build());
        self
    }

    /// Build with the explicit id if one was set, `fallback` otherwise
    pub fn build(self, fallback: MovementId) -> Movement {
        Movement {
            id: self.id.unwrap_or(fallback),
            name: self.name,
            description: self.description,
            kind: self.kind,
            amount: self.amount,
            frequency: self.frequency,
            frequency_n: self.frequency_n,
            start_date: self.start_date,
            end_date: self.end_date,
            exceptions: self.exceptions,
        }
    }
}

/// Builder for an amount override
#[derive(Debug, Clone)]
pub struct ExceptionBuilder {
    inner: MovementException,
}

impl ExceptionBuilder {
    /// Override applying to a single month
    #[must_use]
    pub fn once(amount: Decimal, year: i16, month: i8, day: i8) -> Self {
        Self {
            inner: MovementException {
                amount,
                description: None,
                start_date: Some(jiff::civil::date(year, month, day)),
                end_date: None,
                frequency: FrequencyType::Once,
                frequency_n: None,
            },
        }
    }

    /// Override recurring every `n` months from the given start
    #[must_use]
    pub fn every_n_months(amount: Decimal, n: i32, year: i16, month: i8, day: i8) -> Self {
        Self {
            inner: MovementException {
                amount,
                description: None,
                start_date: Some(jiff::civil::date(year, month, day)),
                end_date: None,
                frequency: FrequencyType::EveryNMonths,
                frequency_n: Some(n),
            },
        }
    }

    #[must_use]
    pub fn ending(mut self, year: i16, month: i8, day: i8) -> Self {
        self.inner.end_date = Some(jiff::civil::date(year, month, day));
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn build(self) -> MovementException {
        self.inner
    }
}
