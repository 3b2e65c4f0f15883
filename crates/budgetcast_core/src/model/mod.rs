mod accounts;
mod ids;
mod month;
mod movements;
mod results;

pub use accounts::Account;
pub use ids::{AccountId, MovementId};
pub use month::{MonthKey, ParseMonthKeyError};
pub use movements::{FrequencyType, Movement, MovementException, MovementKind};
pub use results::{ForecastResult, ForecastTotals, MonthlySummary};
