//! US federal fiscal calendar (fiscal year starts October 1)

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fiscal year and quarter of a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FiscalPeriod {
    pub year: i32,
    pub quarter: u8,
}

impl FiscalPeriod {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: fiscal_year(date),
            quarter: fiscal_quarter(date.month()),
        }
    }
}

impl From<NaiveDate> for FiscalPeriod {
    fn from(date: NaiveDate) -> Self {
        FiscalPeriod::from_date(date)
    }
}

impl fmt::Display for FiscalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FY{} Q{}", self.year, self.quarter)
    }
}

/// Calendar year for October through December, previous year otherwise
pub fn fiscal_year(date: NaiveDate) -> i32 {
    if date.month() >= 10 {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Quarter of a calendar month (1-12): Oct-Dec is Q1
pub fn fiscal_quarter(month: u32) -> u8 {
    match month {
        10..=12 => 1,
        1..=3 => 2,
        4..=6 => 3,
        _ => 4,
    }
}
