//! Passbook Scenario - the account's external test harness, typed
//!
//! A scenario describes an account's opening conditions, an ordered batch
//! of operations, and the final balance the account must show afterwards.
//! Scenarios arrive either as typed values or as one-line records in the
//! classic fixture format:
//!
//! ```text
//! initialBalance, interestRate, withdrawals|..., deposits|..., monthEnds, expectedBalance
//! ```
//!
//! The runner takes its scenarios as an explicit argument and returns a
//! report value; there is no process-wide scenario state.

pub mod error;
pub mod runner;
pub mod types;

pub use error::ScenarioError;
pub use runner::{run_scenarios, ScenarioOutcome, ScenarioReport, ScenarioResult};
pub use types::{load_scenarios, parse_scenarios, Scenario};
