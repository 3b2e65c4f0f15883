//! Account aggregate

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{AccountId, MovementId};
use super::movements::Movement;

/// A financial account and the movements booked against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    pub name: String,

    /// Free-form label such as "checking" or "savings"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The forecast horizon starts at this date's month
    pub created_at: Date,

    /// Fraction of gross interest withheld as tax (0.30 = 30%)
    #[serde(default)]
    pub tax_rate: Decimal,

    /// Annual interest rate fraction; accrued monthly at `rate_of_pay / 12`
    #[serde(default)]
    pub rate_of_pay: Decimal,

    #[serde(default)]
    pub movements: Vec<Movement>,
}

impl Account {
    pub fn movement(&self, id: MovementId) -> Option<&Movement> {
        self.movements.iter().find(|m| m.id == id)
    }
}
