//! Ledger Builder
//!
//! Collects accounts and assigns ids. Explicit ids set with `.id(n)` are kept;
//! everything else draws the lowest free id starting from 1. Account ids are
//! unique within the ledger and movement ids across the whole ledger.

use std::collections::BTreeSet;

use super::Ledger;
use super::account_builder::AccountBuilder;
use crate::model::AccountId;

/// Hands out the lowest id not already taken
#[derive(Debug, Clone, Default)]
pub(crate) struct IdAllocator {
    taken: BTreeSet<u32>,
    next: u32,
}

impl IdAllocator {
    /// Reserve every id in `explicit` up front
    pub(crate) fn reserving(explicit: impl IntoIterator<Item = u32>) -> Self {
        Self {
            taken: explicit.into_iter().collect(),
            next: 1,
        }
    }

    pub(crate) fn next_free(&mut self) -> u32 {
        while self.taken.contains(&self.next) {
            self.next += 1;
        }
        let id = self.next;
        self.taken.insert(id);
        self.next += 1;
        id
    }
}

/// Builder for a ledger of accounts
#[derive(Debug, Clone, Default)]
pub struct LedgerBuilder {
    accounts: Vec<AccountBuilder>,
}

impl LedgerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn account(mut self, account: AccountBuilder) -> Self {
        self.accounts.push(account);
        self
    }

    pub fn build(self) -> Ledger {
        let mut account_ids =
            IdAllocator::reserving(self.accounts.iter().filter_map(|a| a.id.map(|id| id.0)));
        let mut movement_ids = IdAllocator::reserving(
            self.accounts
                .iter()
                .flat_map(|a| a.explicit_movement_ids()),
        );

        let accounts = self
            .accounts
            .into_iter()
            .map(|a| {
                let fallback = match a.id {
                    Some(id) => id,
                    None => AccountId(account_ids.next_free()),
                };
                a.build_with(fallback, &mut movement_ids)
            })
            .collect();
        Ledger { accounts }
    }
}
