//! Save files.
//!
//! Each save is a pretty-printed JSON session record in the saves directory,
//! named `<save name>.json`. Records written by earlier versions load as long
//! as the required fields are present; unknown fields are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use pf_core::GameState;
use tracing::{debug, warn};

use crate::config::StorageConfig;
use crate::error::{SessionError, SessionResult};

/// Encode a game state as a session record.
pub fn serialize(state: &GameState) -> SessionResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(state)?)
}

/// Decode a session record.
pub fn deserialize(bytes: &[u8]) -> SessionResult<GameState> {
    serde_json::from_slice(bytes).map_err(SessionError::Deserialization)
}

/// Reduce a save name to characters safe in a file name.
///
/// ASCII letters, digits, `-` and `_` are kept; anything else becomes `_`.
pub fn sanitize_save_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Suggested save name for a player.
pub fn default_save_name(player_name: &str) -> String {
    sanitize_save_name(&format!("{player_name}_save"))
}

/// One row of the save browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    /// Save name (file stem).
    pub name: String,
    /// Player display name.
    pub player_name: String,
    /// Story key.
    pub story_type: String,
    /// When the save was written, or when the game started for old records.
    pub saved_at: NaiveDateTime,
    /// Number of distinct scenes visited.
    pub scenes_visited: usize,
}

/// The saves directory.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    /// Open the saves directory named by `config`. Nothing is created yet.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            dir: config.saves_dir.clone(),
        }
    }

    /// The saves directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for the save called `name`.
    pub fn path_for(&self, name: &str) -> SessionResult<PathBuf> {
        let stem = sanitize_save_name(name);
        if stem.is_empty() {
            return Err(SessionError::InvalidSaveName(name.to_string()));
        }
        Ok(self.dir.join(format!("{stem}.json")))
    }

    /// Write `state` under `name`, stamped now.
    ///
    /// The stored copy carries the save timestamp. The caller's state is left
    /// as-is; counting the save is up to the caller once this succeeds.
    pub fn save(&self, name: &str, state: &GameState) -> SessionResult<PathBuf> {
        self.save_at(name, state, Local::now().naive_local())
    }

    /// Write `state` under `name` with an explicit save timestamp.
    pub fn save_at(
        &self,
        name: &str,
        state: &GameState,
        at: NaiveDateTime,
    ) -> SessionResult<PathBuf> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;

        let mut record = state.clone();
        record.save_timestamp = Some(at);
        fs::write(&path, serialize(&record)?)?;

        debug!(path = %path.display(), scene = %state.current_scene, "game saved");
        Ok(path)
    }

    /// A save name for `player_name` that leaves other players' saves alone.
    ///
    /// This is [`default_save_name`] unless that save belongs to someone
    /// whose name sanitizes the same way, in which case `-2`, `-3`, ... is
    /// appended until the name is free or already this player's.
    pub fn suggest_name(&self, player_name: &str) -> String {
        let base = default_save_name(player_name);
        let mut n = 1u32;
        loop {
            let name = if n == 1 {
                base.clone()
            } else {
                format!("{base}-{n}")
            };
            match self.load(&name) {
                Ok(state) if state.player_name != player_name => n += 1,
                _ => return name,
            }
        }
    }

    /// Load the save called `name`.
    pub fn load(&self, name: &str) -> SessionResult<GameState> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(SessionError::SaveNotFound(name.to_string()));
        }
        let bytes = fs::read(&path)?;
        let state = deserialize(&bytes)?;
        debug!(path = %path.display(), "game loaded");
        Ok(state)
    }

    /// Delete the save called `name`.
    pub fn delete(&self, name: &str) -> SessionResult<()> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(SessionError::SaveNotFound(name.to_string()));
        }
        fs::remove_file(&path)?;
        debug!(path = %path.display(), "save deleted");
        Ok(())
    }

    /// Summaries of every readable save, sorted by name.
    ///
    /// A missing directory means no saves. Files that fail to parse are
    /// skipped with a warning.
    pub fn list(&self) -> SessionResult<Vec<SaveSummary>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut saves = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let state = match fs::read(&path)
                .map_err(SessionError::from)
                .and_then(|bytes| deserialize(&bytes))
            {
                Ok(state) => state,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable save");
                    continue;
                }
            };

            saves.push(SaveSummary {
                name: name.to_string(),
                saved_at: state.save_timestamp.unwrap_or(state.start_time),
                scenes_visited: state.visited_scenes.len(),
                player_name: state.player_name,
                story_type: state.story_type,
            });
        }

        saves.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(saves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn store(root: &Path) -> SaveStore {
        SaveStore::new(&StorageConfig::default().with_root(root))
    }

    fn played() -> GameState {
        let mut state = GameState::started_at("Ada", "castle", at(12, 0));
        state.mark_visited("castle_start");
        state.record_choice("castle_start", "Enter through the main doors", at(12, 1));
        state.current_scene = "castle_hall".into();
        state.mark_visited("castle_hall");
        state.grant_item("golden key");
        state
    }

    #[test]
    fn names_are_sanitized() {
        assert_eq!(sanitize_save_name("Ada_save"), "Ada_save");
        assert_eq!(sanitize_save_name("../etc/passwd"), "___etc_passwd");
        assert_eq!(sanitize_save_name(" my save! "), "my_save_");
        assert_eq!(default_save_name("Zoë"), "Zo__save");
    }

    #[test]
    fn suggested_name_skips_other_players_saves() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        assert_eq!(default_save_name("Zo?"), default_save_name("Zoë"));
        assert_eq!(store.suggest_name("Zoë"), "Zo__save");

        let zoe = GameState::started_at("Zoë", "castle", at(12, 0));
        store.save_at("Zo__save", &zoe, at(12, 1)).unwrap();
        assert_eq!(store.suggest_name("Zoë"), "Zo__save");
        assert_eq!(store.suggest_name("Zo?"), "Zo__save-2");

        let other = GameState::started_at("Zo?", "forest", at(12, 0));
        store.save_at("Zo__save-2", &other, at(12, 2)).unwrap();
        assert_eq!(store.suggest_name("Zo?"), "Zo__save-2");
        assert_eq!(store.suggest_name("Zo_"), "Zo__save-3");
        assert_eq!(store.load("Zo__save").unwrap().player_name, "Zoë");
    }

    #[test]
    fn record_round_trips() {
        let state = played();
        let restored = deserialize(&serialize(&state).unwrap()).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn garbage_is_a_deserialization_error() {
        assert!(matches!(
            deserialize(b"{\"player_name\": 3}"),
            Err(SessionError::Deserialization(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        let state = played();

        let path = store.save_at("Ada_save", &state, at(12, 5)).unwrap();
        assert!(path.ends_with("saves/Ada_save.json"));
        assert_eq!(state.save_timestamp, None);

        let loaded = store.load("Ada_save").unwrap();
        assert_eq!(loaded.save_timestamp, Some(at(12, 5)));
        assert_eq!(loaded.current_scene, "castle_hall");
        assert_eq!(loaded.inventory, ["golden key"]);
        assert_eq!(loaded.visited_scenes, state.visited_scenes);
        assert_eq!(loaded.choices_made, state.choices_made);
    }

    #[test]
    fn loads_records_from_older_versions() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(
            store.dir().join("old.json"),
            r#"{
  "player_name": "Bo",
  "story_type": "space",
  "current_scene": "space_command",
  "inventory": [],
  "visited_scenes": ["space_start"],
  "choices_made": [
    {"scene": "space_start", "choice": "Head to the command center", "timestamp": "2024-05-01T12:00:03.512311"}
  ],
  "deaths": 0,
  "saves_used": 2,
  "start_time": "2024-05-01T12:00:00.000001",
  "items_collected": 0,
  "save_timestamp": "2024-05-01T12:01:00.250000"
}"#,
        )
        .unwrap();

        let state = store.load("old").unwrap();
        assert_eq!(state.player_name, "Bo");
        assert_eq!(state.saves_used, 2);
        assert_eq!(state.choices_made[0].choice, "Head to the command center");
    }

    #[test]
    fn missing_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        assert!(matches!(
            store.load("nobody"),
            Err(SessionError::SaveNotFound(name)) if name == "nobody"
        ));
        assert!(matches!(
            store.delete("nobody"),
            Err(SessionError::SaveNotFound(_))
        ));
        assert!(matches!(
            store.path_for("   "),
            Err(SessionError::InvalidSaveName(_))
        ));
    }

    #[test]
    fn list_sorts_and_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        assert!(store.list().unwrap().is_empty());

        let state = played();
        store.save_at("zed", &state, at(13, 0)).unwrap();
        store.save_at("alpha", &state, at(14, 0)).unwrap();
        fs::write(store.dir().join("broken.json"), "not json").unwrap();
        fs::write(store.dir().join("notes.txt"), "ignore me").unwrap();

        let saves = store.list().unwrap();
        let names: Vec<&str> = saves.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["alpha", "zed"]);
        assert_eq!(saves[0].saved_at, at(14, 0));
        assert_eq!(saves[0].player_name, "Ada");
        assert_eq!(saves[0].story_type, "castle");
        assert_eq!(saves[0].scenes_visited, 2);
    }

    #[test]
    fn summary_falls_back_to_start_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        fs::create_dir_all(store.dir()).unwrap();
        let state = played();
        fs::write(store.dir().join("raw.json"), serialize(&state).unwrap()).unwrap();

        let saves = store.list().unwrap();
        assert_eq!(saves[0].saved_at, at(12, 0));
    }

    #[test]
    fn delete_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        let path = store.save_at("gone", &played(), at(12, 0)).unwrap();
        store.delete("gone").unwrap();
        assert!(!path.exists());
    }
}
