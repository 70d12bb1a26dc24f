use anyhow::Result;
use habitgrid_core::ChallengeStore;
use habitgrid_core::FileStorage;
use habitgrid_core::config::HabitGridConfig;
use owo_colors::OwoColorize;

pub fn run(config: &HabitGridConfig, store: &ChallengeStore<FileStorage>) -> Result<()> {
    let config_path = HabitGridConfig::config_path()?;
    let data_file = store.storage().path();

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Data dir:   {}", config.data_path().display());
    println!("  Data file:  {}", data_file.display());

    println!();
    println!("{}", "Storage".bold());
    println!("  Key:        {}", config.storage_key);
    if data_file.exists() {
        println!("  Tracked:    {}", if store.has_any_data() { "yes" } else { "no" });
    } else {
        println!("  Tracked:    {}", "nothing saved yet".dimmed());
    }

    Ok(())
}
