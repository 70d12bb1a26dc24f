use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use habitgrid_core::{ChallengeStore, Storage};
use owo_colors::OwoColorize;

use super::show::print_month;
use super::toggle::{describe, toggle};

const ACTIONS: [&str; 4] = ["Toggle a day", "Previous month", "Next month", "Quit"];

const TOGGLE_MENU_HINT: &str = "Pick \"Toggle a day\" below to mark one.";

/// Interactive month browser. Redraws the month after every action.
pub fn run<S: Storage>(store: &mut ChallengeStore<S>, today: NaiveDate) -> Result<()> {
    loop {
        print_month(store, today, TOGGLE_MENU_HINT)?;
        println!();

        let choice = Select::new()
            .with_prompt("  What next?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let day = prompt_day(store.cursor().days_in_month())?;
                match toggle(store, today, day) {
                    Ok(state) => println!("{}", describe(store, day, state)),
                    Err(e) => eprintln!("  {}", e.to_string().red()),
                }
            }
            1 => store.go_to_prev_month(),
            2 => store.go_to_next_month(),
            _ => return Ok(()),
        }

        println!();
    }
}

/// Prompt for a day number with retry on parse errors.
fn prompt_day(days_in_month: u32) -> Result<u32> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("  Day (1-{days_in_month})"))
            .interact_text()?;

        match input.trim().parse::<u32>() {
            Ok(day) if (1..=days_in_month).contains(&day) => return Ok(day),
            _ => eprintln!("  {}", format!("Not a day of this month: \"{input}\"").red()),
        }
    }
}
