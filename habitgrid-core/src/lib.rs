//! Core types for habitgrid.
//!
//! - `store` owns the tracked days, the displayed month and persistence
//! - `grid` projects a month into renderable day cells
//! - `storage` abstracts the durable slot the snapshot lives in

pub mod challenge;
pub mod config;
pub mod day_state;
pub mod error;
pub mod grid;
pub mod month;
pub mod storage;
pub mod store;

pub use challenge::{ChallengeData, MonthDays};
pub use day_state::DayState;
pub use error::{HabitGridError, HabitGridResult};
pub use grid::{DayCell, MonthGrid, WEEKDAY_HEADERS, project_month};
pub use month::{MonthCursor, MonthKey};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{ChallengeStore, MonthStats};
