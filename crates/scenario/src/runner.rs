//! Scenario runner
//!
//! Takes the scenarios to run as an explicit argument and returns a
//! report value; nothing is stashed in process-wide state. Each scenario
//! drives a fresh account through its operations and compares the final
//! balance, rounded to cents, against the expected value.

use passbook_core::round_to_cents;
use passbook_ledger::{LedgerError, SavingsAccount};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::types::Scenario;

/// How one scenario ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioResult {
    /// Final balance matched the expectation
    Passed { final_balance: Decimal },
    /// The account ran to completion but the balance was wrong
    BalanceMismatch { expected: Decimal, actual: Decimal },
    /// An operation was rejected before the scenario could finish
    Rejected { reason: String },
}

impl fmt::Display for ScenarioResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioResult::Passed { final_balance } => {
                write!(f, "passed with balance {final_balance}")
            }
            ScenarioResult::BalanceMismatch { expected, actual } => {
                write!(f, "expected balance {expected}, got {actual}")
            }
            ScenarioResult::Rejected { reason } => write!(f, "rejected: {reason}"),
        }
    }
}

/// One scenario plus how it ended
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub index: usize,
    pub scenario: Scenario,
    pub result: ScenarioResult,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.result, ScenarioResult::Passed { .. })
    }
}

/// The runner's verdict over a batch of scenarios
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ScenarioReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Outcomes that did not pass
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scenarios run: {} Passed: {} Failed: {}",
            self.total(),
            self.passed(),
            self.failed()
        )
    }
}

/// Run every scenario against a fresh account and collect the outcomes.
pub fn run_scenarios(scenarios: &[Scenario]) -> ScenarioReport {
    let outcomes = scenarios
        .iter()
        .enumerate()
        .map(|(index, scenario)| run_scenario(index, scenario))
        .collect();
    ScenarioReport { outcomes }
}

fn run_scenario(index: usize, scenario: &Scenario) -> ScenarioOutcome {
    info!("running scenario {}: {}", index, scenario);

    let result = match drive_account(index, scenario) {
        Ok(account) => {
            info!("account after scenario {}: {}", index, account);
            for entry in account.register_entries() {
                debug!("register entry {}", entry);
            }
            let actual = round_to_cents(account.balance());
            if actual == scenario.expected_balance {
                ScenarioResult::Passed {
                    final_balance: actual,
                }
            } else {
                warn!(
                    "scenario {} balance mismatch: expected {}, got {}",
                    index, scenario.expected_balance, actual
                );
                ScenarioResult::BalanceMismatch {
                    expected: scenario.expected_balance,
                    actual,
                }
            }
        }
        Err(err) => {
            warn!("scenario {} rejected: {}", index, err);
            ScenarioResult::Rejected {
                reason: err.to_string(),
            }
        }
    };

    ScenarioOutcome {
        index,
        scenario: scenario.clone(),
        result,
    }
}

/// Fixture order: withdrawals, then deposits, then month-ends.
fn drive_account(index: usize, scenario: &Scenario) -> Result<SavingsAccount, LedgerError> {
    let mut account = SavingsAccount::new(
        format!("scenario {index}"),
        None,
        scenario.initial_balance,
        scenario.interest_rate,
    )?;

    for &amount in &scenario.withdrawals {
        account.withdraw(amount)?;
    }
    for &amount in &scenario.deposits {
        account.deposit(amount)?;
    }
    for _ in 0..scenario.month_ends {
        account.month_end();
    }

    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(record: &str) -> Scenario {
        record.parse().unwrap()
    }

    #[test]
    fn test_interest_reference_scenario_passes() {
        let report = run_scenarios(&[scenario("10, 20, , , 1, 12.00")]);
        assert!(report.all_passed());
        assert_eq!(report.total(), 1);
    }

    #[test]
    fn test_deposits_only_scenario_passes() {
        let report = run_scenarios(&[scenario("50, 0, , 20|30, 0, 100.00")]);
        assert!(report.all_passed());
    }

    #[test]
    fn test_compounding_scenario_passes() {
        // 100 - 50 + 110 = 160, then 1% twice: 161.60, 163.22
        let report = run_scenarios(&[scenario("100, 1, 50, 100|10, 2, 163.22")]);
        assert!(report.all_passed());
    }

    #[test]
    fn test_overdraft_scenario_is_rejected() {
        let report = run_scenarios(&[scenario("100, 0, 150, , 0, 100.00")]);
        assert_eq!(report.failed(), 1);
        assert!(matches!(
            report.outcomes[0].result,
            ScenarioResult::Rejected { .. }
        ));
    }

    #[test]
    fn test_wrong_expectation_is_a_mismatch() {
        let report = run_scenarios(&[scenario("10, 20, , , 1, 13.00")]);
        let outcome = &report.outcomes[0];
        assert!(!outcome.passed());
        assert!(matches!(
            outcome.result,
            ScenarioResult::BalanceMismatch { .. }
        ));
    }

    #[test]
    fn test_report_counts_and_summary() {
        let report = run_scenarios(&[
            scenario("10, 20, , , 1, 12.00"),
            scenario("10, 20, , , 1, 99.00"),
            scenario("100, 0, 150, , 0, 100.00"),
        ]);
        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.failures().count(), 2);
        assert_eq!(report.to_string(), "Scenarios run: 3 Passed: 1 Failed: 2");
    }

    #[test]
    fn test_empty_batch_passes_vacuously() {
        let report = run_scenarios(&[]);
        assert!(report.all_passed());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_report_serializes() {
        let report = run_scenarios(&[scenario("10, 20, , , 1, 12.00")]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"passed\""));
    }
}
