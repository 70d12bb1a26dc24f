//! The tri-state outcome of a tracked day.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome recorded for a single day. A day with no entry is "unset",
/// which is represented as `None` wherever an `Option<DayState>` appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayState {
    Success,
    Warning,
    Fail,
}

impl DayState {
    pub const ALL: [DayState; 3] = [DayState::Success, DayState::Warning, DayState::Fail];

    /// Next state in the cycle unset → success → warning → fail → unset.
    pub fn advance(current: Option<DayState>) -> Option<DayState> {
        match current {
            None => Some(DayState::Success),
            Some(DayState::Success) => Some(DayState::Warning),
            Some(DayState::Warning) => Some(DayState::Fail),
            Some(DayState::Fail) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayState::Success => "success",
            DayState::Warning => "warning",
            DayState::Fail => "fail",
        }
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
