//! Passbook Ledger - Single savings account core
//!
//! This is the HEART of Passbook. All balance changes go through
//! `SavingsAccount`, which owns the balance, the interest rate, and an
//! append-only register of every event that touched the balance.
//!
//! # Key Types
//! - `SavingsAccount`: The account state machine (deposit, withdraw, month-end)
//! - `RegisterEntry`: Immutable record of one balance-affecting event
//! - `EntryKind`: The fixed event categories (Deposit, Withdrawal, Interest)

pub mod account;
pub mod error;
pub mod register;

pub use account::SavingsAccount;
pub use error::LedgerError;
pub use register::{EntryKind, RegisterEntry};
