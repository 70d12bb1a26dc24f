use anyhow::Result;
use chrono::NaiveDate;
use habitgrid_core::{ChallengeStore, MonthGrid, MonthStats, Storage};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::render::{Render, legend};

/// Machine-readable view of the displayed month.
#[derive(Serialize)]
struct MonthView<'a> {
    month: String,
    label: String,
    grid: &'a MonthGrid,
    stats: MonthStats,
}

pub fn run<S: Storage>(store: &ChallengeStore<S>, today: NaiveDate, json: bool) -> Result<()> {
    if json {
        let grid = store.grid(today)?;
        let view = MonthView {
            month: store.cursor().key().to_string(),
            label: store.cursor().label(),
            grid: &grid,
            stats: store.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_month(store, today, TOGGLE_COMMAND_HINT)
}

/// How to mark a day from the command line.
pub const TOGGLE_COMMAND_HINT: &str = "Run `habitgrid toggle <day>` to mark one.";

/// Onboarding line shown until the first day is tracked; `action` tells the
/// user how to mark a day from wherever the month is drawn.
pub fn empty_state_hint<S: Storage>(store: &ChallengeStore<S>, action: &str) -> Option<String> {
    if store.has_any_data() {
        return None;
    }
    Some(format!("No days tracked yet. {action}"))
}

/// Month label, grid, legend and stats for the displayed month.
pub fn print_month<S: Storage>(
    store: &ChallengeStore<S>,
    today: NaiveDate,
    action: &str,
) -> Result<()> {
    let grid = store.grid(today)?;

    println!("{}", store.cursor().render());
    println!();
    println!("{}", grid.render());
    println!();
    println!("{}", legend());
    println!("{}", store.stats().render());

    if let Some(hint) = empty_state_hint(store, action) {
        println!();
        println!("{}", hint.dimmed());
    }

    Ok(())
}
