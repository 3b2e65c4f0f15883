//! Cross-account activity
//!
//! Views that span every account in a ledger: the most recent movement
//! occurrences, and movements matching a search query.

use jiff::civil::Date;

use crate::model::{Account, Movement};
use crate::recurrence::{Occurrence, occurrences};

/// An occurrence tagged with the account and movement it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountOccurrence<'a> {
    pub account: &'a Account,
    pub movement: &'a Movement,
    pub occurrence: Occurrence,
}

/// Latest occurrences of every movement across `accounts`, up to `until`'s
/// month, newest first and at most `limit` of them.
///
/// Occurrences in the same month keep ledger order.
pub fn recent_occurrences(
    accounts: &[Account],
    until: Date,
    limit: usize,
) -> Vec<AccountOccurrence<'_>> {
    let mut feed: Vec<AccountOccurrence<'_>> = accounts
        .iter()
        .flat_map(|account| {
            account.movements.iter().flat_map(move |movement| {
                occurrences(movement, until)
                    .into_iter()
                    .map(move |occurrence| AccountOccurrence {
                        account,
                        movement,
                        occurrence,
                    })
            })
        })
        .collect();

    feed.sort_by(|a, b| b.occurrence.month.cmp(&a.occurrence.month));
    feed.truncate(limit);

    tracing::debug!(%until, limit, returned = feed.len(), "recent occurrences");
    feed
}

/// A movement matched by [`search_movements`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementMatch<'a> {
    pub account: &'a Account,
    pub movement: &'a Movement,
}

/// Movements whose name or description contains `query`, ignoring case, in
/// ledger order. An empty query lists every movement.
pub fn search_movements<'a>(accounts: &'a [Account], query: &str) -> Vec<MovementMatch<'a>> {
    accounts
        .iter()
        .flat_map(|account| {
            account
                .movements
                .iter()
                .filter(move |movement| movement.matches(query))
                .map(move |movement| MovementMatch { account, movement })
        })
        .collect()
}
