//! Versioned policy tables for the four allowance schemes.
//!
//! A table holds every threshold the calculator reads; moving to a new program year means
//! publishing a new table, not touching the scheme logic.

mod catalog;
mod table;

pub use catalog::RulesCatalog;
pub use table::{
    ChildcareRateCaps, HouseholdAmounts, HuurtoeslagRules, KindgebondenBudgetRules,
    KinderopvangtoeslagRules, RentCaps, ToeslagRules, ZorgtoeslagRules,
};

use std::path::PathBuf;

use super::domain::ProgramYear;

/// Errors raised while building or loading a rules table.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("{field} must be a non-negative amount (found {value})")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("{field} must be a rate between 0 and 1 (found {value})")]
    RateOutOfRange { field: &'static str, value: f64 },
    #[error("{field} ({floor}) may not exceed the rate it floors ({rate})")]
    FloorAboveRate {
        field: &'static str,
        floor: f64,
        rate: f64,
    },
    #[error("{field} must be greater than zero (found {value})")]
    NonPositiveDivisor { field: &'static str, value: f64 },
    #[error("rules file {path:?} declares program year {found}, expected {expected}")]
    YearMismatch {
        path: PathBuf,
        expected: ProgramYear,
        found: ProgramYear,
    },
    #[error("rules file {path:?} is not named after a program year")]
    UnnamedFile { path: PathBuf },
    #[error("unable to parse rules table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unable to read rules from {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
