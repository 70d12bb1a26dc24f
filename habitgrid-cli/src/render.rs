//! TUI rendering traits for habitgrid types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to habitgrid-core types using owo_colors.

use habitgrid_core::{DayCell, DayState, MonthCursor, MonthGrid, MonthStats, WEEKDAY_HEADERS};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Width of one grid column, including the state marker.
const COLUMN_WIDTH: usize = 4;

pub fn symbol(state: DayState) -> char {
    match state {
        DayState::Success => '✓',
        DayState::Warning => '!',
        DayState::Fail => '✗',
    }
}

/// Human label used for the stats cards and legend
pub fn label(state: DayState) -> &'static str {
    match state {
        DayState::Success => "Success",
        DayState::Warning => "Warning",
        DayState::Fail => "Fail",
    }
}

/// Colorize text according to the day state
fn colorize_state(state: DayState, text: &str) -> String {
    match state {
        DayState::Success => text.green().to_string(),
        DayState::Warning => text.yellow().to_string(),
        DayState::Fail => text.red().to_string(),
    }
}

impl Render for DayState {
    fn render(&self) -> String {
        colorize_state(*self, &symbol(*self).to_string())
    }
}

impl Render for MonthCursor {
    fn render(&self) -> String {
        format!("📅 {}", self.label().bold())
    }
}

/// Plain text of a cell: right-aligned day number plus state marker.
pub fn cell_text(cell: &DayCell) -> String {
    let marker = cell.state.map(symbol).unwrap_or(' ');
    format!("{:>3}{}", cell.day, marker)
}

impl Render for DayCell {
    fn render(&self) -> String {
        let text = cell_text(self);

        if self.disabled {
            return text.dimmed().to_string();
        }

        let text = match self.state {
            Some(state) => colorize_state(state, &text),
            None => text,
        };

        if self.is_today {
            text.bold().underline().to_string()
        } else {
            text
        }
    }
}

/// Header plus one line per week, each cell drawn by `draw`.
pub fn grid_lines(grid: &MonthGrid, draw: impl Fn(&DayCell) -> String) -> Vec<String> {
    let header: String = WEEKDAY_HEADERS
        .iter()
        .map(|h| format!("{:>width$}", h, width = COLUMN_WIDTH))
        .collect();

    let mut lines = vec![header];

    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|slot| match slot {
                Some(cell) => draw(cell),
                None => " ".repeat(COLUMN_WIDTH),
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    lines
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let mut lines = grid_lines(self, |cell| cell.render());
        lines[0] = lines[0].dimmed().to_string();
        lines.join("\n")
    }
}

impl Render for MonthStats {
    fn render(&self) -> String {
        DayState::ALL
            .iter()
            .map(|&state| {
                let card = format!("{} {}", self.count(state), label(state));
                colorize_state(state, &card)
            })
            .collect::<Vec<_>>()
            .join("   ")
    }
}

/// Legend explaining the state markers.
pub fn legend() -> String {
    let entries: Vec<String> = DayState::ALL
        .iter()
        .map(|&state| format!("{} {}", state.render(), label(state).dimmed()))
        .collect();

    format!("{}  {}", entries.join("  "), "(toggle cycles ✓ → ! → ✗ → none)".dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use habitgrid_core::{MonthDays, project_month};

    fn grid(year: i32, month: u32, states: &MonthDays, today: (i32, u32, u32)) -> MonthGrid {
        let today = NaiveDate::from_ymd_opt(today.0, today.1, today.2).unwrap();
        project_month(year, month, states, today).unwrap()
    }

    #[test]
    fn test_cell_text_shows_state_marker() {
        let mut states = MonthDays::new();
        states.insert(5, DayState::Success);
        states.insert(12, DayState::Fail);
        let grid = grid(2024, 1, &states, (2024, 1, 20));

        assert_eq!(cell_text(grid.cell(5).unwrap()), "  5✓");
        assert_eq!(cell_text(grid.cell(12).unwrap()), " 12✗");
        assert_eq!(cell_text(grid.cell(6).unwrap()), "  6 ");
    }

    #[test]
    fn test_grid_lines_align_under_weekday_headers() {
        let grid = grid(2024, 2, &MonthDays::new(), (2024, 3, 1));
        let lines = grid_lines(&grid, cell_text);

        assert_eq!(lines[0], " Mon Tue Wed Thu Fri Sat Sun");
        // February 2024 starts on a Thursday
        assert_eq!(lines[1], "              1   2   3   4");
        assert_eq!(lines[5], " 26  27  28  29");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_grid_lines_full_first_week() {
        let grid = grid(2024, 1, &MonthDays::new(), (2024, 2, 1));
        let lines = grid_lines(&grid, cell_text);

        assert_eq!(lines[1], "  1   2   3   4   5   6   7");
    }

    #[test]
    fn test_stats_render_mentions_every_state() {
        let stats = MonthStats {
            success: 3,
            warning: 1,
            fail: 0,
        };
        let rendered = stats.render();

        assert!(rendered.contains("3 Success"));
        assert!(rendered.contains("1 Warning"));
        assert!(rendered.contains("0 Fail"));
    }
}
