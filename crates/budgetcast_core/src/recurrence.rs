//! Recurrence resolution
//!
//! Decides whether a dated, possibly recurring item is active in a given
//! calendar month, and which amount a movement carries in that month once its
//! exceptions are taken into account. Everything here works at month
//! granularity: day-of-month is discarded before any comparison.

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::date_math::{month_index, month_series, months_between};
use crate::model::{FrequencyType, MonthKey, Movement, MovementException, MovementKind};

/// Anything with a start/end window and a frequency.
///
/// Movements and their exceptions share the same applicability rule.
pub trait Schedule {
    fn start_date(&self) -> Option<Date>;
    fn end_date(&self) -> Option<Date>;
    fn frequency(&self) -> FrequencyType;
    fn frequency_n(&self) -> Option<i32>;

    /// Whether this item is active during the month containing `month`
    fn is_active_in(&self, month: Date) -> bool {
        match self.start_date() {
            Some(start) => is_applicable_for_month(
                start,
                self.end_date(),
                self.frequency(),
                self.frequency_n(),
                month,
            ),
            None => false,
        }
    }
}

impl Schedule for Movement {
    fn start_date(&self) -> Option<Date> {
        self.start_date
    }
    fn end_date(&self) -> Option<Date> {
        self.end_date
    }
    fn frequency(&self) -> FrequencyType {
        self.frequency
    }
    fn frequency_n(&self) -> Option<i32> {
        self.frequency_n
    }
}

impl Schedule for MovementException {
    fn start_date(&self) -> Option<Date> {
        self.start_date
    }
    fn end_date(&self) -> Option<Date> {
        self.end_date
    }
    fn frequency(&self) -> FrequencyType {
        self.frequency
    }
    fn frequency_n(&self) -> Option<i32> {
        self.frequency_n
    }
}

/// Whether an item starting at `start` is active in `target`'s month.
///
/// - Months before `start` or after `end` are never active.
/// - `Once` is active in the start month only.
/// - `EveryNMonths` is active when the month distance from `start` is a
///   multiple of `n` (missing or non-positive `n` counts as 1).
/// - Unrecognized frequencies are never active.
pub fn is_applicable_for_month(
    start: Date,
    end: Option<Date>,
    frequency: FrequencyType,
    frequency_n: Option<i32>,
    target: Date,
) -> bool {
    let current = month_index(target);
    let start_idx = month_index(start);

    if current < start_idx {
        return false;
    }
    if let Some(end) = end
        && current > month_index(end)
    {
        return false;
    }

    match frequency {
        FrequencyType::Once => current == start_idx,
        FrequencyType::EveryNMonths => {
            let n = frequency_n.unwrap_or(1).max(1);
            months_between(start, target) % n == 0
        }
        FrequencyType::Unrecognized => false,
    }
}

/// Amount in effect for `target`'s month: the first applicable exception's
/// amount, or `base` when none applies.
///
/// Only the exceptions are consulted. The caller must already know that the
/// movement itself is active in that month.
pub fn resolve_effective_amount(
    base: Decimal,
    exceptions: &[MovementException],
    target: Date,
) -> Decimal {
    find_exception(exceptions, target)
        .map(|e| e.amount)
        .unwrap_or(base)
}

/// First exception applicable to `target`'s month, in collection order
pub fn find_exception(exceptions: &[MovementException], target: Date) -> Option<&MovementException> {
    exceptions.iter().find(|e| e.is_active_in(target))
}

/// Effective amount of `movement` in `target`'s month, or `None` when the
/// movement is not active then.
pub fn effective_amount_for_month(movement: &Movement, target: Date) -> Option<Decimal> {
    if !movement.is_active_in(target) {
        return None;
    }
    Some(resolve_effective_amount(
        movement.amount,
        &movement.exceptions,
        target,
    ))
}

/// One month in which a movement is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub month: MonthKey,
    pub kind: MovementKind,
    pub amount: Decimal,
    /// Set when an exception supplied `amount` instead of the movement's base amount
    pub overridden: bool,
}

/// Every active month of `movement` from its start month through `until`'s month.
pub fn occurrences(movement: &Movement, until: Date) -> Vec<Occurrence> {
    let Some(start) = movement.start_date else {
        return Vec::new();
    };

    month_series(start, until)
        .filter(|month| movement.is_active_in(*month))
        .map(|month| {
            let exception = find_exception(&movement.exceptions, month);
            Occurrence {
                month: MonthKey::of(month),
                kind: movement.kind,
                amount: exception.map(|e| e.amount).unwrap_or(movement.amount),
                overridden: exception.is_some(),
            }
        })
        .collect()
}
