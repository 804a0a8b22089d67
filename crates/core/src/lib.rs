//! Passbook Core - Money primitives
//!
//! This crate contains the fundamental types shared by the ledger and the
//! scenario runner:
//! - `Amount`: Non-negative decimal wrapper for operation magnitudes
//! - `cents`: The two-decimal rounding policy used for interest accrual
//!   and final balance comparisons

pub mod amount;
pub mod cents;

pub use amount::{Amount, AmountError};
pub use cents::round_to_cents;
