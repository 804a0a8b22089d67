//! Register entries - the append-only record of balance events
//!
//! Every successful ledger operation appends exactly one `RegisterEntry`.
//! Entries are never mutated or removed; insertion order is the
//! chronological order of operations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed categories of register entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Funds added by the account holder
    Deposit,
    /// Funds removed by the account holder
    Withdrawal,
    /// Interest credited at month-end
    Interest,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Deposit => "Deposit",
            EntryKind::Withdrawal => "Withdrawal",
            EntryKind::Interest => "Interest",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable record of one balance-affecting event.
///
/// `amount` is signed: positive for credits (deposits, interest), negative
/// for debits (withdrawals). The opening balance plus the sum of all entry
/// amounts always equals the current balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterEntry {
    /// Monotonic sequence number, starting at 1, never reused
    pub id: u64,
    /// Event category
    pub kind: EntryKind,
    /// Signed effect on the balance
    pub amount: Decimal,
}

impl RegisterEntry {
    pub(crate) fn new(id: u64, kind: EntryKind, amount: Decimal) -> Self {
        Self { id, kind, amount }
    }
}

impl fmt::Display for RegisterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}: {}", self.id, self.kind, self.amount)
    }
}
