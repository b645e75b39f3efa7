use std::io;

use colored::Colorize;
use pf_session::{SaveStore, StorageConfig};

use crate::game::render;

pub fn run(config: &StorageConfig) -> Result<(), String> {
    let store = SaveStore::new(config);
    let saves = store.list().map_err(|e| e.to_string())?;

    if saves.is_empty() {
        println!("  No saved games in {}.", store.dir().display());
        return Ok(());
    }
    render::saves(&mut io::stdout(), &saves).map_err(|e| e.to_string())
}

pub fn delete(config: &StorageConfig, name: &str) -> Result<(), String> {
    SaveStore::new(config)
        .delete(name)
        .map_err(|e| e.to_string())?;
    println!("  {} Deleted save '{name}'.", "✓".green());
    Ok(())
}
