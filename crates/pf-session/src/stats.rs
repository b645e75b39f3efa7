//! Play statistics aggregated over finished games.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use pf_core::EndingReport;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::StorageConfig;
use crate::error::{SessionError, SessionResult};
use crate::persist::sanitize_save_name;

const GLOBAL_FILE: &str = "global_stats.json";

/// Totals across every finished game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalStats {
    /// Games that reached an ending.
    pub total_games: u64,
    /// Summed play time.
    pub total_play_time_seconds: f64,
    /// `total_play_time_seconds / total_games`.
    pub average_game_time_seconds: f64,
    /// Summed deaths.
    pub total_deaths: u64,
    /// Summed items collected.
    pub total_items_collected: u64,
    /// Completions per story key, in first-completion order.
    pub stories_completed: IndexMap<String, u64>,
}

impl GlobalStats {
    /// Fold one finished game into the totals.
    pub fn record(&mut self, report: &EndingReport) {
        self.total_games += 1;
        self.total_play_time_seconds += report.elapsed_seconds();
        self.average_game_time_seconds = self.total_play_time_seconds / self.total_games as f64;
        self.total_deaths += u64::from(report.deaths);
        self.total_items_collected += u64::from(report.items_collected);
        *self
            .stories_completed
            .entry(report.story_key.clone())
            .or_insert(0) += 1;
    }
}

/// Totals for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    /// Player display name.
    pub player_name: String,
    /// Games that reached an ending.
    pub games_played: u64,
    /// Summed play time.
    pub total_play_time_seconds: f64,
    /// Summed deaths.
    pub total_deaths: u64,
    /// Summed items collected.
    pub total_items_collected: u64,
    /// Completions per story key.
    pub stories_completed: IndexMap<String, u64>,
}

impl PlayerStats {
    /// Fold one finished game into the totals.
    pub fn record(&mut self, report: &EndingReport) {
        self.player_name.clone_from(&report.player_name);
        self.games_played += 1;
        self.total_play_time_seconds += report.elapsed_seconds();
        self.total_deaths += u64::from(report.deaths);
        self.total_items_collected += u64::from(report.items_collected);
        *self
            .stories_completed
            .entry(report.story_key.clone())
            .or_insert(0) += 1;
    }

    /// Mean play time per game, zero before the first game.
    pub fn average_game_time_seconds(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_play_time_seconds / self.games_played as f64
        }
    }
}

/// The statistics directory.
#[derive(Debug, Clone)]
pub struct StatsStore {
    dir: PathBuf,
}

impl StatsStore {
    /// Open the statistics directory named by `config`.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            dir: config.stats_dir.clone(),
        }
    }

    /// Path of the global statistics file.
    pub fn global_path(&self) -> PathBuf {
        self.dir.join(GLOBAL_FILE)
    }

    /// Path of a player's statistics file.
    ///
    /// Names that sanitize alike ("Zoë", "Zo?") share a stem, so candidates
    /// are numbered: `player_Zo_.json`, `player_Zo_-2.json`, and so on. The
    /// first candidate that is free, unreadable, or already holds this
    /// player's totals is returned.
    pub fn player_path(&self, player_name: &str) -> PathBuf {
        let stem = sanitize_save_name(player_name);
        let mut n = 1u32;
        loop {
            let path = if n == 1 {
                self.dir.join(format!("player_{stem}.json"))
            } else {
                self.dir.join(format!("player_{stem}-{n}.json"))
            };
            match read_json::<PlayerStats>(&path) {
                Ok(Some(stored)) if !owned_by(&stored.player_name, player_name) => n += 1,
                _ => return path,
            }
        }
    }

    /// Global totals, or `None` before the first finished game.
    pub fn load_global(&self) -> SessionResult<Option<GlobalStats>> {
        read_json(&self.global_path())
    }

    /// A player's totals, or `None` if they never finished a game.
    pub fn load_player(&self, player_name: &str) -> SessionResult<Option<PlayerStats>> {
        read_json(&self.player_path(player_name))
    }

    /// Fold a finished game into the global and player totals and write both.
    ///
    /// A corrupt statistics file is replaced by fresh totals.
    pub fn record_ending(&self, report: &EndingReport) -> SessionResult<(GlobalStats, PlayerStats)> {
        fs::create_dir_all(&self.dir)?;

        let global_path = self.global_path();
        let mut global: GlobalStats = read_or_fresh(&global_path);
        global.record(report);
        write_json(&global_path, &global)?;

        let player_path = self.player_path(&report.player_name);
        let mut player: PlayerStats = read_or_fresh(&player_path);
        player.record(report);
        write_json(&player_path, &player)?;

        debug!(
            story = %report.story_key,
            ending = %report.ending_key,
            total_games = global.total_games,
            "statistics recorded"
        );
        Ok((global, player))
    }

    /// Delete the global totals. Returns whether there was anything to delete.
    pub fn reset_global(&self) -> SessionResult<bool> {
        let path = self.global_path();
        if !path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        debug!(path = %path.display(), "global statistics reset");
        Ok(true)
    }

    /// Write a copy of the global totals to `dest`.
    pub fn export(&self, dest: &Path) -> SessionResult<()> {
        let stats = self.load_global()?.ok_or(SessionError::NoStatistics)?;
        write_json(dest, &stats)?;
        debug!(dest = %dest.display(), "statistics exported");
        Ok(())
    }
}

/// Files written without a player name are claimed by whoever maps to them.
fn owned_by(stored: &str, player_name: &str) -> bool {
    stored.is_empty() || stored == player_name
}

fn read_json<T: DeserializeOwned>(path: &Path) -> SessionResult<Option<T>> {
    if !path.is_file() {
        return Ok(None);
    }
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(SessionError::Deserialization)
}

fn read_or_fresh<T: DeserializeOwned + Default>(path: &Path) -> T {
    match read_json(path) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "replacing unreadable statistics");
            T::default()
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> SessionResult<()> {
    fs::write(path, serde_json::to_vec_pretty(value)?)?;
    Ok(())
}
