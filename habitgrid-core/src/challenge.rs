//! The full tracked data set and its JSON snapshot format.
//!
//! Snapshot schema:
//!
//! ```json
//! { "2024-02": { "5": "success", "6": "fail" } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::day_state::DayState;
use crate::error::{HabitGridError, HabitGridResult};
use crate::month::MonthKey;

/// Day-of-month (1-31) to recorded state for one month.
pub type MonthDays = BTreeMap<u32, DayState>;

/// Every tracked day across all months.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeData {
    months: BTreeMap<MonthKey, MonthDays>,
}

impl ChallengeData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> HabitGridResult<Self> {
        serde_json::from_str(json).map_err(|e| HabitGridError::Serialization(e.to_string()))
    }

    pub fn to_json(&self) -> HabitGridResult<String> {
        serde_json::to_string(self).map_err(|e| HabitGridError::Serialization(e.to_string()))
    }

    pub fn month(&self, key: &MonthKey) -> Option<&MonthDays> {
        self.months.get(key)
    }

    /// Days of a month, creating the month entry if it doesn't exist yet.
    pub fn month_mut(&mut self, key: &MonthKey) -> &mut MonthDays {
        self.months.entry(key.clone()).or_default()
    }

    pub fn months(&self) -> impl Iterator<Item = (&MonthKey, &MonthDays)> {
        self.months.iter()
    }

    /// True if any month has at least one tracked day.
    pub fn has_any_data(&self) -> bool {
        self.months.values().any(|days| !days.is_empty())
    }

    /// Drop entries whose day doesn't exist in their month.
    /// Returns the number of entries removed.
    pub fn retain_valid_days(&mut self) -> usize {
        let mut removed = 0;

        for (key, days) in self.months.iter_mut() {
            let days_in_month = key.cursor().days_in_month();
            let before = days.len();
            days.retain(|day, _| (1..=days_in_month).contains(day));
            removed += before - days.len();
        }

        removed
    }
}
