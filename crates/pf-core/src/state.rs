use chrono::{Local, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::story::start_scene_key;

/// One accepted choice in a playthrough's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    /// Scene the choice was made in.
    pub scene: String,
    /// Text of the choice taken.
    pub choice: String,
    /// When the choice was accepted.
    pub timestamp: NaiveDateTime,
}

/// Progress of one playthrough.
///
/// Field names match the persisted session record, so a `GameState` is
/// serialized as-is. Collections and counters default when missing and
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player display name.
    pub player_name: String,
    /// Story key, e.g. `"castle"`.
    pub story_type: String,
    /// Key of the scene the player is at.
    pub current_scene: String,
    /// Held items, in pickup order, without duplicates.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// Scene keys in first-visit order, each at most once.
    #[serde(default)]
    pub visited_scenes: Vec<String>,
    /// Accepted choices in order.
    #[serde(default)]
    pub choices_made: Vec<ChoiceRecord>,
    /// Fatal choices taken.
    #[serde(default)]
    pub deaths: u32,
    /// Successful saves.
    #[serde(default)]
    pub saves_used: u32,
    /// When the playthrough began.
    pub start_time: NaiveDateTime,
    /// Distinct items picked up.
    #[serde(default)]
    pub items_collected: u32,
    /// When this record was last written to disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_timestamp: Option<NaiveDateTime>,
}

impl GameState {
    /// Start a new playthrough of `story` at its start scene, now.
    pub fn new(player_name: impl Into<String>, story: impl Into<String>) -> Self {
        Self::started_at(player_name, story, Local::now().naive_local())
    }

    /// Start a new playthrough with an explicit start time.
    pub fn started_at(
        player_name: impl Into<String>,
        story: impl Into<String>,
        start_time: NaiveDateTime,
    ) -> Self {
        let story_type = story.into();
        Self {
            player_name: player_name.into(),
            current_scene: start_scene_key(&story_type),
            story_type,
            inventory: Vec::new(),
            visited_scenes: Vec::new(),
            choices_made: Vec::new(),
            deaths: 0,
            saves_used: 0,
            start_time,
            items_collected: 0,
            save_timestamp: None,
        }
    }

    /// Append `scene` to the visit history unless already present.
    ///
    /// Returns `true` on a first visit.
    pub fn mark_visited(&mut self, scene: &str) -> bool {
        if self.visited_scenes.iter().any(|s| s == scene) {
            return false;
        }
        self.visited_scenes.push(scene.to_string());
        true
    }

    /// Whether the player holds `item`.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Add `item` to the inventory and count it, unless already held.
    ///
    /// Returns `true` if the item was new.
    pub fn grant_item(&mut self, item: &str) -> bool {
        if self.has_item(item) {
            return false;
        }
        self.inventory.push(item.to_string());
        self.items_collected += 1;
        true
    }

    /// Append an entry to the choice history.
    pub fn record_choice(
        &mut self,
        scene: impl Into<String>,
        choice: impl Into<String>,
        at: NaiveDateTime,
    ) {
        self.choices_made.push(ChoiceRecord {
            scene: scene.into(),
            choice: choice.into(),
            timestamp: at,
        });
    }

    /// Count a death.
    pub fn record_death(&mut self) {
        self.deaths += 1;
    }

    /// Count a successful save.
    pub fn record_save(&mut self) {
        self.saves_used += 1;
    }

    /// Time since the playthrough began. Never negative.
    pub fn elapsed(&self, now: NaiveDateTime) -> TimeDelta {
        (now - self.start_time).max(TimeDelta::zero())
    }

    /// Summarize this playthrough as ended at its current scene.
    pub fn ending_report(
        &self,
        ending_title: impl Into<String>,
        ended_at: NaiveDateTime,
    ) -> EndingReport {
        EndingReport {
            story_key: self.story_type.clone(),
            player_name: self.player_name.clone(),
            ending_key: self.current_scene.clone(),
            ending_title: ending_title.into(),
            deaths: self.deaths,
            items_collected: self.items_collected,
            elapsed: self.elapsed(ended_at),
        }
    }
}

/// What a finished playthrough contributes to statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndingReport {
    /// Story key.
    pub story_key: String,
    /// Player display name.
    pub player_name: String,
    /// Key of the terminal scene reached.
    pub ending_key: String,
    /// Title of that ending.
    pub ending_title: String,
    /// Deaths during the playthrough.
    pub deaths: u32,
    /// Distinct items collected.
    pub items_collected: u32,
    /// Time from start to ending.
    pub elapsed: TimeDelta,
}

impl EndingReport {
    /// Elapsed play time in fractional seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.num_milliseconds() as f64 / 1000.0
    }
}
