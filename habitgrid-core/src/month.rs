//! Month identifiers and the displayed-month cursor.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{HabitGridError, HabitGridResult};

/// Canonical `YYYY-MM` key of a month in the persisted data.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(String);

impl MonthKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn cursor(&self) -> MonthCursor {
        // Validated on construction
        let (year, month) = split_key(&self.0).unwrap_or((0, 1));
        MonthCursor { year, month }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.0
    }
}

impl TryFrom<String> for MonthKey {
    type Error = HabitGridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        split_key(&value)?;
        Ok(MonthKey(value))
    }
}

impl FromStr for MonthKey {
    type Err = HabitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MonthKey::try_from(s.to_string())
    }
}

fn split_key(s: &str) -> HabitGridResult<(i32, u32)> {
    let invalid = || HabitGridError::InvalidMonthKey(s.to_string());

    let (year, month) = s.rsplit_once('-').ok_or_else(invalid)?;
    if month.len() != 2 || year.trim_start_matches('-').len() < 4 {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    // One spelling per month: "02024-02" and "+2024-02" are rejected
    if (MonthCursor { year, month }).key().as_str() != s {
        return Err(invalid());
    }

    Ok((year, month))
}

/// The (year, month) currently on display. Months are 1-12; only `new`,
/// `containing` and `FromStr` construct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> HabitGridResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(HabitGridError::InvalidMonth(month));
        }
        Ok(MonthCursor { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        MonthCursor {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn key(&self) -> MonthKey {
        let sign = if self.year < 0 { "-" } else { "" };
        MonthKey(format!("{sign}{:04}-{:02}", self.year.unsigned_abs(), self.month))
    }

    /// Previous month. January of `i32::MIN` has no predecessor and stays put.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            match self.year.checked_sub(1) {
                Some(year) => MonthCursor { year, month: 12 },
                None => self,
            }
        } else {
            MonthCursor {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Next month. December of `i32::MAX` has no successor and stays put.
    pub fn next(self) -> Self {
        if self.month == 12 {
            match self.year.checked_add(1) {
                Some(year) => MonthCursor { year, month: 1 },
                None => self,
            }
        } else {
            MonthCursor {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// First day of the month, if chrono can represent the year.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Human-readable label, e.g. "February 2024".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for MonthCursor {
    type Err = HabitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = split_key(s)?;
        Ok(MonthCursor { year, month })
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
