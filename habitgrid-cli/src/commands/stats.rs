use anyhow::Result;
use habitgrid_core::{ChallengeStore, Storage};

use crate::render::Render;

pub fn run<S: Storage>(store: &ChallengeStore<S>, json: bool) -> Result<()> {
    let stats = store.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", store.cursor().render());
    println!("   {}", stats.render());

    Ok(())
}
