use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use pf_session::{StatsStore, StorageConfig};

use crate::game::render;

pub fn run(config: &StorageConfig, player: Option<&str>) -> Result<(), String> {
    let store = StatsStore::new(config);
    let mut out = io::stdout();
    match player {
        Some(name) => show_player(&mut out, &store, name),
        None => show_global(&mut out, &store),
    }
}

pub fn reset(config: &StorageConfig) -> Result<(), String> {
    let removed = StatsStore::new(config)
        .reset_global()
        .map_err(|e| e.to_string())?;
    if removed {
        println!("  {} Global statistics reset.", "✓".green());
    } else {
        println!("  No global statistics to reset.");
    }
    Ok(())
}

pub fn export(config: &StorageConfig, dest: &Path) -> Result<(), String> {
    StatsStore::new(config)
        .export(dest)
        .map_err(|e| e.to_string())?;
    println!("  {} Exported statistics to {}", "✓".green(), dest.display());
    Ok(())
}

/// Global totals, or a notice when no game has finished yet.
pub fn show_global(out: &mut impl Write, store: &StatsStore) -> Result<(), String> {
    match store.load_global().map_err(|e| e.to_string())? {
        Some(stats) => render::global_stats(out, &stats).map_err(|e| e.to_string()),
        None => writeln!(out, "{}", "No global statistics found.".yellow())
            .map_err(|e| e.to_string()),
    }
}

fn show_player(out: &mut impl Write, store: &StatsStore, name: &str) -> Result<(), String> {
    match store.load_player(name).map_err(|e| e.to_string())? {
        Some(stats) => render::player_stats(out, &stats).map_err(|e| e.to_string()),
        None => Err(format!("no statistics for player '{name}'")),
    }
}
