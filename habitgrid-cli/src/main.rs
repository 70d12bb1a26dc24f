mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use habitgrid_core::config::HabitGridConfig;
use habitgrid_core::{ChallengeStore, FileStorage, MonthCursor};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "habitgrid")]
#[command(about = "Track a daily habit on a month calendar")]
struct Cli {
    /// Month to operate on (YYYY-MM), defaults to the current month
    #[arg(short, long, global = true)]
    month: Option<MonthCursor>,

    /// Use this data file instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid, legend and stats
    Show {
        /// Print the projected grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cycle a day through success → warning → fail → unset
    Toggle {
        day: u32,
    },
    /// Count success/warning/fail days in the month
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Browse months and toggle days interactively
    Browse,
    /// Show config and data file locations
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = HabitGridConfig::load()?;
    let storage = match cli.data_file {
        Some(path) => FileStorage::new(path),
        None => config.storage(),
    };

    let today = Local::now().date_naive();
    let mut store = ChallengeStore::load(storage, today);
    tracing::debug!(data_file = %store.storage().path().display(), "loaded challenge store");
    if let Some(month) = cli.month {
        store.set_cursor(month);
    }

    match cli.command.unwrap_or(Commands::Show { json: false }) {
        Commands::Show { json } => commands::show::run(&store, today, json),
        Commands::Toggle { day } => commands::toggle::run(&mut store, today, day),
        Commands::Stats { json } => commands::stats::run(&store, json),
        Commands::Browse => commands::browse::run(&mut store, today),
        Commands::Config => commands::config::run(&config, &store),
    }
}

/// Log to stderr, filtered by RUST_LOG (warnings only by default).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_month_and_toggle() {
        let cli = Cli::try_parse_from(["habitgrid", "toggle", "5", "--month", "2024-02"]).unwrap();

        assert_eq!(cli.month, Some(MonthCursor::new(2024, 2).unwrap()));
        assert!(matches!(cli.command, Some(Commands::Toggle { day: 5 })));
    }

    #[test]
    fn test_cli_rejects_bad_month() {
        assert!(Cli::try_parse_from(["habitgrid", "show", "--month", "2024-13"]).is_err());
        assert!(Cli::try_parse_from(["habitgrid", "show", "--month", "feb"]).is_err());
    }

    #[test]
    fn test_cli_defaults_to_show() {
        let cli = Cli::try_parse_from(["habitgrid"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.month.is_none());
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
