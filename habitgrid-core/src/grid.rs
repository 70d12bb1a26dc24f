//! Month grid projection.
//!
//! Turns a month, its recorded day states and a reference "today" into the
//! cells a calendar view draws. Pure: the same inputs always give the same
//! grid.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::challenge::MonthDays;
use crate::day_state::DayState;
use crate::error::{HabitGridError, HabitGridResult};
use crate::month::MonthCursor;

/// Column headers. Weeks start on Monday.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub state: Option<DayState>,
    pub is_today: bool,
    /// Future days can't be toggled.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty slots before day 1 in the first week row.
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        day.checked_sub(1).and_then(|i| self.cells.get(i as usize))
    }

    /// Week rows of exactly seven slots; `None` pads before day 1 and after
    /// the last day.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let mut slots: Vec<Option<&DayCell>> = std::iter::repeat_n(None, self.leading_blanks as usize)
            .chain(self.cells.iter().map(Some))
            .collect();

        while slots.len() % 7 != 0 {
            slots.push(None);
        }

        slots
            .chunks(7)
            .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6]])
            .collect()
    }
}

/// Project `month` of `year` into day cells.
pub fn project_month(
    year: i32,
    month: u32,
    day_states: &MonthDays,
    today: NaiveDate,
) -> HabitGridResult<MonthGrid> {
    let cursor = MonthCursor::new(year, month)?;
    let first = cursor
        .first_day()
        .ok_or(HabitGridError::YearOutOfRange(year))?;

    let leading_blanks = first.weekday().num_days_from_monday();

    let cells = (1..=cursor.days_in_month())
        .map(|day| {
            let date = first.with_day(day).unwrap_or(first);
            DayCell {
                day,
                state: day_states.get(&day).copied(),
                is_today: date == today,
                disabled: date > today,
            }
        })
        .collect();

    Ok(MonthGrid {
        year,
        month,
        leading_blanks,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_february_cell_counts() {
        let today = date(2030, 1, 1);
        let leap = project_month(2024, 2, &MonthDays::new(), today).unwrap();
        let common = project_month(2023, 2, &MonthDays::new(), today).unwrap();

        assert_eq!(leap.cells.len(), 29);
        assert_eq!(common.cells.len(), 28);
        assert_eq!(leap.cells.last().unwrap().day, 29);
    }

    #[test]
    fn test_today_and_future_flags() {
        let grid = project_month(2024, 1, &MonthDays::new(), date(2024, 1, 15)).unwrap();

        for cell in &grid.cells {
            assert_eq!(cell.is_today, cell.day == 15, "day {}", cell.day);
            assert_eq!(cell.disabled, cell.day > 15, "day {}", cell.day);
        }
    }

    #[test]
    fn test_other_months_relative_to_today() {
        let today = date(2024, 1, 15);

        let past = project_month(2023, 12, &MonthDays::new(), today).unwrap();
        assert!(past.cells.iter().all(|c| !c.disabled && !c.is_today));

        let future = project_month(2024, 2, &MonthDays::new(), today).unwrap();
        assert!(future.cells.iter().all(|c| c.disabled && !c.is_today));
    }

    #[test]
    fn test_states_are_attached_to_cells() {
        let mut states = MonthDays::new();
        states.insert(5, DayState::Success);
        states.insert(10, DayState::Warning);
        states.insert(15, DayState::Fail);

        let grid = project_month(2024, 1, &states, date(2024, 1, 15)).unwrap();

        assert_eq!(grid.cell(5).unwrap().state, Some(DayState::Success));
        assert_eq!(grid.cell(10).unwrap().state, Some(DayState::Warning));
        assert_eq!(grid.cell(15).unwrap().state, Some(DayState::Fail));
        assert_eq!(grid.cell(6).unwrap().state, None);
        assert!(grid.cell(0).is_none());
        assert!(grid.cell(32).is_none());
    }

    #[test]
    fn test_leading_blanks_follow_monday_start() {
        let today = date(2030, 1, 1);
        // 2024-01-01 was a Monday, 2024-02-01 a Thursday, 2023-10-01 a Sunday
        assert_eq!(project_month(2024, 1, &MonthDays::new(), today).unwrap().leading_blanks, 0);
        assert_eq!(project_month(2024, 2, &MonthDays::new(), today).unwrap().leading_blanks, 3);
        assert_eq!(project_month(2023, 10, &MonthDays::new(), today).unwrap().leading_blanks, 6);
    }

    #[test]
    fn test_weeks_pad_to_seven_columns() {
        let grid = project_month(2024, 2, &MonthDays::new(), date(2030, 1, 1)).unwrap();
        let weeks = grid.weeks();

        // 3 blanks + 29 days = 32 slots -> 5 rows
        assert_eq!(weeks.len(), 5);
        assert!(weeks[0][..3].iter().all(Option::is_none));
        assert_eq!(weeks[0][3].unwrap().day, 1);
        assert_eq!(weeks[4][3].unwrap().day, 29);
        assert!(weeks[4][4..].iter().all(Option::is_none));
    }

    #[test]
    fn test_projection_is_deterministic() {
        let mut states = MonthDays::new();
        states.insert(3, DayState::Warning);
        let today = date(2024, 3, 10);

        assert_eq!(
            project_month(2024, 3, &states, today).unwrap(),
            project_month(2024, 3, &states, today).unwrap()
        );
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let result = project_month(2024, 13, &MonthDays::new(), date(2024, 1, 1));
        assert!(matches!(result, Err(HabitGridError::InvalidMonth(13))));
    }
}
