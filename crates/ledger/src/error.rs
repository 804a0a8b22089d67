//! Ledger errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Withdrawal amount exceeds the current balance. The account is
    /// left untouched: no partial withdrawal, no register entry.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Deposit and withdrawal magnitudes must be strictly positive.
    #[error("Operation amount must be positive: {0}")]
    NonPositiveAmount(Decimal),

    /// Interest rates below zero are rejected at construction.
    #[error("Interest rate cannot be negative: {0}")]
    NegativeInterestRate(Decimal),
}
