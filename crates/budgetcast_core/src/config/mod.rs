//! Ledger configuration
//!
//! `Ledger` is the serializable collection of accounts the engine runs over.
//! It is what the command-line front end loads from disk, and what the
//! builder DSL produces.
//!
//! # Builder DSL
//!
//! ```ignore
//! use budgetcast_core::config::{AccountBuilder, ExceptionBuilder, LedgerBuilder, MovementBuilder};
//! use rust_decimal_macros::dec;
//!
//! let ledger = LedgerBuilder::new()
//!     .account(
//!         AccountBuilder::new("Savings")
//!             .created(2024, 1, 1)
//!             .rate_of_pay(dec!(0.03))
//!             .tax_rate(dec!(0.30))
//!             .movement(
//!                 MovementBuilder::income("Salary", dec!(2_000))
//!                     .monthly()
//!                     .starting(2024, 1, 25)
//!                     .exception(ExceptionBuilder::once(dec!(3_000), 2024, 12, 1)),
//!             )
//!             .movement(MovementBuilder::expense("Rent", dec!(900)).monthly().starting(2024, 1, 1)),
//!     )
//!     .build();
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Account, AccountId, MovementId};

pub mod account_builder;
pub mod builder;
pub mod movement_builder;

pub use account_builder::AccountBuilder;
pub use builder::LedgerBuilder;
pub use movement_builder::{ExceptionBuilder, MovementBuilder};

/// All accounts known to a forecast run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl Ledger {
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// First id that is used twice: an account id anywhere in the ledger, or
    /// a movement id within one account.
    ///
    /// Lookups by id return the first match, so a ledger with duplicates
    /// would silently hide entries.
    pub fn duplicate_id(&self) -> Option<DuplicateId> {
        let mut accounts = BTreeSet::new();
        for account in &self.accounts {
            if !accounts.insert(account.id) {
                return Some(DuplicateId::Account(account.id));
            }
            let mut movements = BTreeSet::new();
            for movement in &account.movements {
                if !movements.insert(movement.id) {
                    return Some(DuplicateId::Movement {
                        account: account.id,
                        movement: movement.id,
                    });
                }
            }
        }
        None
    }
}

/// An id that appears more than once in a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateId {
    Account(AccountId),
    Movement {
        account: AccountId,
        movement: MovementId,
    },
}

impl fmt::Display for DuplicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateId::Account(id) => write!(f, "duplicate account id {id}"),
            DuplicateId::Movement { account, movement } => {
                write!(f, "duplicate movement id {movement} in account {account}")
            }
        }
    }
}
