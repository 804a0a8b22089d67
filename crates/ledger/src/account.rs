//! Savings account - balance, interest rate, and register
//!
//! The account is a plain owned value with no internal locking; callers
//! that share it across threads must serialize access themselves. Each
//! operation either fully succeeds (balance and register updated together)
//! or fully fails (no state change).

use passbook_core::{round_to_cents, Amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LedgerError;
use crate::register::{EntryKind, RegisterEntry};

/// Divisor turning the stored percentage rate into a multiplier
const PERCENT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// A single savings account.
///
/// # Invariants
/// - `balance` always equals the opening balance plus the sum of all
///   register entry amounts.
/// - Register entry ids are strictly increasing from 1 and never reused.
/// - `withdraw` never takes the balance below zero.
///
/// # Interest convention
/// `interest_rate` is a percentage applied once per `month_end()` call:
/// interest = balance * rate / 100, rounded to cents before it is added.
/// Repeated calls compound the already-rounded balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsAccount {
    name: String,
    account_number: Option<u64>,
    balance: Decimal,
    interest_rate: Decimal,
    register: Vec<RegisterEntry>,
    next_entry_id: u64,
}

impl SavingsAccount {
    /// Open an account with the given opening balance and rate.
    ///
    /// A negative opening balance is accepted as given (it is the
    /// caller's statement of fact, not an operation); a negative interest
    /// rate is rejected. No register entry is created for the opening
    /// balance itself.
    pub fn new(
        name: impl Into<String>,
        account_number: Option<u64>,
        initial_balance: Decimal,
        interest_rate: Decimal,
    ) -> Result<Self, LedgerError> {
        if interest_rate < Decimal::ZERO {
            return Err(LedgerError::NegativeInterestRate(interest_rate));
        }
        Ok(Self {
            name: name.into(),
            account_number,
            balance: initial_balance,
            interest_rate,
            register: Vec::new(),
            next_entry_id: 1,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account_number(&self) -> Option<u64> {
        self.account_number
    }

    /// Current balance, exact to the cents the operations produced
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Percentage rate applied per month-end
    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// All register entries since the account was opened, in operation order
    pub fn register_entries(&self) -> &[RegisterEntry] {
        &self.register
    }

    /// Add funds to the account.
    ///
    /// `amount` must be strictly positive. Appends one `Deposit` entry.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let magnitude = Self::require_positive(amount)?;
        self.balance += magnitude.value();
        self.append(EntryKind::Deposit, magnitude.value());
        Ok(())
    }

    /// Remove funds from the account.
    ///
    /// `amount` must be strictly positive and must not exceed the current
    /// balance; an overdraft attempt fails with `InsufficientFunds` and
    /// leaves balance and register untouched.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let magnitude = Self::require_positive(amount)?;
        if magnitude.value() > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: magnitude.value(),
                available: self.balance,
            });
        }
        self.balance -= magnitude.value();
        self.append(EntryKind::Withdrawal, -magnitude.value());
        Ok(())
    }

    /// Credit one period of interest on the current balance.
    ///
    /// The interest is rounded to cents before it is added, so the balance
    /// stays an exact cents value and the register sums exactly to it. An
    /// `Interest` entry is appended even when the computed interest is
    /// zero (rate 0 or balance 0). The signed formula applies as-is: a
    /// negative balance accrues negative interest, deepening the debt the
    /// way an overdrawn passbook would. Returns the interest credited.
    pub fn month_end(&mut self) -> Decimal {
        let interest = round_to_cents(self.balance * self.interest_rate / PERCENT);
        self.balance += interest;
        self.append(EntryKind::Interest, interest);
        interest
    }

    fn append(&mut self, kind: EntryKind, amount: Decimal) {
        let entry = RegisterEntry::new(self.next_entry_id, kind, amount);
        self.next_entry_id += 1;
        self.register.push(entry);
    }

    fn require_positive(amount: Decimal) -> Result<Amount, LedgerError> {
        let magnitude =
            Amount::new(amount).map_err(|_| LedgerError::NonPositiveAmount(amount))?;
        if magnitude.is_zero() {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        Ok(magnitude)
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.account_number {
            Some(number) => write!(f, "{} (#{}): {}", self.name, number, self.balance),
            None => write!(f, "{}: {}", self.name, self.balance),
        }
    }
}
