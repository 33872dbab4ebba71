//! Target date validation
//!
//! The date is checked before any registry query is issued, so a malformed
//! date aborts the run without touching the network.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use thiserror::Error;

/// `YYYY-MM-DD` within 2000-2099
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^20\d\d-[0-1]\d-[0-3]\d$").expect("valid date regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date '{0}'! Please, provide correct date in format YYYY-MM-DD")]
    InvalidDateFormat(String),
}

/// Calendar date the resolution is performed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetDate(NaiveDate);

impl TargetDate {
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidDateFormat(input.to_string());

        if !DATE_RE.is_match(input) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight at the start of the target day
    pub fn start_of_day(&self) -> NaiveDateTime {
        self.0.and_time(chrono::NaiveTime::MIN)
    }
}

impl FromStr for TargetDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
