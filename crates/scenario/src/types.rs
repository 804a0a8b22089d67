//! Scenario values and the one-line record format
//!
//! Scenarios are plain typed values; the delimited record format exists
//! only at the boundary (CSV files, command line) and is parsed into
//! `Scenario` exactly once.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::ScenarioError;

/// One test scenario for a single savings account.
///
/// Operations run in the order the original fixture used: all withdrawals,
/// then all deposits, then `month_ends` month-end calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Opening balance handed to the account as-is
    pub initial_balance: Decimal,
    /// Percentage rate per month-end period
    pub interest_rate: Decimal,
    /// Withdrawal magnitudes, applied first, in order
    pub withdrawals: Vec<Decimal>,
    /// Deposit magnitudes, applied after withdrawals, in order
    pub deposits: Vec<Decimal>,
    /// Number of month-end interest accruals to run last
    pub month_ends: u32,
    /// Final balance the account must show, rounded to cents
    pub expected_balance: Decimal,
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    /// Parse a record of the form
    /// `initialBalance, interestRate, w|w|..., d|d|..., monthEnds, expectedBalance`.
    /// The two amount lists are pipe-separated and may be empty.
    fn from_str(record: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() != 6 {
            return Err(ScenarioError::FieldCount {
                record: record.to_string(),
                found: fields.len(),
            });
        }

        Ok(Scenario {
            initial_balance: parse_amount("initial balance", fields[0])?,
            interest_rate: parse_amount("interest rate", fields[1])?,
            withdrawals: parse_amount_list("withdrawal", fields[2])?,
            deposits: parse_amount_list("deposit", fields[3])?,
            month_ends: parse_month_ends(fields[4])?,
            expected_balance: parse_amount("expected balance", fields[5])?,
        })
    }
}

impl fmt::Display for Scenario {
    /// Renders the scenario back in its record form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}",
            self.initial_balance,
            self.interest_rate,
            join_amounts(&self.withdrawals),
            join_amounts(&self.deposits),
            self.month_ends,
            self.expected_balance,
        )
    }
}

fn parse_amount(field: &'static str, value: &str) -> Result<Decimal, ScenarioError> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed).map_err(|source| ScenarioError::InvalidAmount {
        field,
        value: trimmed.to_string(),
        source,
    })
}

fn parse_amount_list(field: &'static str, value: &str) -> Result<Vec<Decimal>, ScenarioError> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    value
        .trim()
        .split('|')
        .map(|token| parse_amount(field, token))
        .collect()
}

fn parse_month_ends(value: &str) -> Result<u32, ScenarioError> {
    let trimmed = value.trim();
    trimmed
        .parse()
        .map_err(|source| ScenarioError::InvalidMonthEndCount {
            value: trimmed.to_string(),
            source,
        })
}

fn join_amounts(amounts: &[Decimal]) -> String {
    amounts
        .iter()
        .map(Decimal::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

/// Parse every non-blank line of `input` as one scenario record.
pub fn parse_scenarios(input: &str) -> Result<Vec<Scenario>, ScenarioError> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Scenario::from_str)
        .collect()
}

/// Read a scenario CSV file, one record per line, blank lines skipped.
pub fn load_scenarios(path: impl AsRef<Path>) -> Result<Vec<Scenario>, ScenarioError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scenarios(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_full_record() {
        let scenario: Scenario = "100, 2.5, 10|20, 30|40|50, 3, 165.00".parse().unwrap();
        assert_eq!(scenario.initial_balance, dec!(100));
        assert_eq!(scenario.interest_rate, dec!(2.5));
        assert_eq!(scenario.withdrawals, vec![dec!(10), dec!(20)]);
        assert_eq!(scenario.deposits, vec![dec!(30), dec!(40), dec!(50)]);
        assert_eq!(scenario.month_ends, 3);
        assert_eq!(scenario.expected_balance, dec!(165.00));
    }

    #[test]
    fn test_parse_empty_amount_lists() {
        let scenario: Scenario = "10, 20, , , 1, 12.00".parse().unwrap();
        assert!(scenario.withdrawals.is_empty());
        assert!(scenario.deposits.is_empty());
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = "10, 20, , 1, 12.00".parse::<Scenario>().unwrap_err();
        assert!(matches!(err, ScenarioError::FieldCount { found: 5, .. }));
    }

    #[test]
    fn test_parse_bad_amount() {
        let err = "ten, 20, , , 1, 12.00".parse::<Scenario>().unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::InvalidAmount {
                field: "initial balance",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_bad_month_end_count() {
        let err = "10, 20, , , one, 12.00".parse::<Scenario>().unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidMonthEndCount { .. }));
    }

    #[test]
    fn test_display_round_trips() {
        let scenario: Scenario = "100, 2.5, 10|20, 30, 3, 165.00".parse().unwrap();
        let reparsed: Scenario = scenario.to_string().parse().unwrap();
        assert_eq!(reparsed, scenario);
    }

    #[test]
    fn test_parse_scenarios_skips_blank_lines() {
        let input = "10, 20, , , 1, 12.00\n\n  \n50, 0, , 20|30, 0, 100.00\n";
        let scenarios = parse_scenarios(input).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[1].deposits, vec![dec!(20), dec!(30)]);
    }

    #[test]
    fn test_scenario_serialization() {
        let scenario: Scenario = "10, 20, , , 1, 12.00".parse().unwrap();
        let json = serde_json::to_string(&scenario).unwrap();
        let parsed: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scenario);
    }
}
