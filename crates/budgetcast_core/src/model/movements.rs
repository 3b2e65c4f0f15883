//! Movements and their month-scoped exceptions
//!
//! A movement is a recurring or one-off cash-flow item attached to an account.
//! Exceptions override its amount for the months they apply to.

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::MovementId;

/// Direction of a movement. The amount itself is always a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Income,
    Expense,
    /// Anything else found in the input; contributes nothing to a forecast
    #[serde(other)]
    Other,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Income => "income",
            MovementKind::Expense => "expense",
            MovementKind::Other => "other",
        }
    }
}

/// How a dated item recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrequencyType {
    /// Active in the start month only
    #[serde(rename = "once")]
    Once,
    /// Active every `n` months counted from the start month
    #[serde(rename = "every_n_months")]
    EveryNMonths,
    /// Missing or unknown frequency; never active
    #[default]
    #[serde(other)]
    Unrecognized,
}

/// Month-scoped override of a movement's amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementException {
    pub amount: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub start_date: Option<Date>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,

    #[serde(default, rename = "frequency_type")]
    pub frequency: FrequencyType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_n: Option<i32>,
}

/// Recurring or one-off cash-flow item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub kind: MovementKind,

    /// Base magnitude; the sign comes from `kind`
    pub amount: Decimal,

    #[serde(default, rename = "frequency_type")]
    pub frequency: FrequencyType,

    /// Step for `every_n_months`; absent or below 1 means every month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_n: Option<i32>,

    #[serde(default)]
    pub start_date: Option<Date>,

    /// Inclusive by month; `None` recurs forever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,

    /// Evaluated in order, first applicable exception wins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<MovementException>,
}

impl Movement {
    /// Case-insensitive substring match on name or description.
    ///
    /// An empty query matches every movement.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}
