//! Scenario parsing errors
//!
//! Malformed records and unreadable files are hard failures: the harness
//! never guesses at a scenario, it refuses it.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or parsing scenarios
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Expected 6 comma-separated fields, found {found} in record '{record}'")]
    FieldCount { record: String, found: usize },

    #[error("Unreadable {field} '{value}'")]
    InvalidAmount {
        field: &'static str,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("Unreadable month-end count '{value}'")]
    InvalidMonthEndCount {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Cannot read scenario file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
