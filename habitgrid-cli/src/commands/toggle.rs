use anyhow::Result;
use chrono::NaiveDate;
use habitgrid_core::{ChallengeStore, DayState, Storage};
use owo_colors::OwoColorize;

use super::show::{TOGGLE_COMMAND_HINT, print_month};
use crate::render::{Render, label};

pub fn run<S: Storage>(store: &mut ChallengeStore<S>, today: NaiveDate, day: u32) -> Result<()> {
    let state = toggle(store, today, day)?;

    println!("{}", describe(store, day, state));
    println!();
    print_month(store, today, TOGGLE_COMMAND_HINT)
}

/// Toggle `day` of the displayed month, refusing days that lie in the future.
pub fn toggle<S: Storage>(
    store: &mut ChallengeStore<S>,
    today: NaiveDate,
    day: u32,
) -> Result<Option<DayState>> {
    let grid = store.grid(today)?;

    if grid.cell(day).is_some_and(|cell| cell.disabled) {
        anyhow::bail!(
            "{} {} is in the future and can't be tracked yet",
            store.cursor().label(),
            day
        );
    }

    Ok(store.toggle_day(day)?)
}

/// One-line summary of a toggle, e.g. "February 2024, day 5: ✓ Success".
pub fn describe<S: Storage>(store: &ChallengeStore<S>, day: u32, state: Option<DayState>) -> String {
    let outcome = match state {
        Some(state) => format!("{} {}", state.render(), label(state)),
        None => "cleared".dimmed().to_string(),
    };

    format!("  {}, day {}: {}", store.cursor().label(), day, outcome)
}
