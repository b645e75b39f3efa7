use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::scene::{Scene, Scenes};

/// Key of the scene every playthrough of `story_key` starts at.
pub fn start_scene_key(story_key: &str) -> String {
    format!("{story_key}_start")
}

/// How hard a story is, as advertised in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Few ways to die.
    Easy,
    /// Some traps.
    Medium,
    /// Many traps, longer paths to an ending.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(CoreError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Catalog entry describing a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryInfo {
    /// Display title.
    pub title: String,
    /// One-line pitch.
    pub description: String,
    /// Advertised difficulty.
    pub difficulty: Difficulty,
}

impl StoryInfo {
    /// Create a catalog entry.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            difficulty,
        }
    }
}

/// A complete story: its key, catalog entry, and scenes.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    /// Story key, e.g. `"castle"`.
    pub key: String,
    /// Catalog metadata.
    pub info: StoryInfo,
    /// Scenes keyed by scene key.
    pub scenes: Scenes,
}

impl StoryGraph {
    /// Build a story from `(scene key, scene)` pairs, keeping their order.
    pub fn new<K>(
        key: impl Into<String>,
        info: StoryInfo,
        scenes: impl IntoIterator<Item = (K, Scene)>,
    ) -> Self
    where
        K: Into<String>,
    {
        Self {
            key: key.into(),
            info,
            scenes: scenes.into_iter().map(|(k, s)| (k.into(), s)).collect(),
        }
    }

    /// Key of the designated start scene.
    pub fn start_key(&self) -> String {
        start_scene_key(&self.key)
    }

    /// The designated start scene.
    pub fn start(&self) -> CoreResult<&Scene> {
        let expected = self.start_key();
        self.scenes
            .get(&expected)
            .ok_or_else(|| CoreError::MissingStart {
                story: self.key.clone(),
                expected,
            })
    }

    /// Look up a scene by key.
    pub fn scene(&self, key: &str) -> CoreResult<&Scene> {
        self.scenes
            .get(key)
            .ok_or_else(|| CoreError::SceneNotFound(key.to_string()))
    }

    /// Keys of all terminal scenes.
    pub fn ending_keys(&self) -> Vec<&str> {
        self.scenes
            .iter()
            .filter(|(_, scene)| scene.is_terminal())
            .map(|(key, _)| key.as_str())
            .collect()
    }
}
