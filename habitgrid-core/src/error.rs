//! Error types for habitgrid.

use thiserror::Error;

/// Errors that can occur in habitgrid operations.
#[derive(Error, Debug)]
pub enum HabitGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid month {0}, expected 1-12")]
    InvalidMonth(u32),

    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    #[error("Invalid month key '{0}'. Expected YYYY-MM")]
    InvalidMonthKey(String),

    #[error("Day {day} is out of range for {month_key} (1-{days_in_month})")]
    InvalidDay {
        day: u32,
        month_key: String,
        days_in_month: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for habitgrid operations.
pub type HabitGridResult<T> = Result<T, HabitGridError>;
