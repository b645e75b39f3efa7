//! Where saves and statistics live on disk.

use std::path::{Path, PathBuf};

/// Storage locations for a Pfadfinder installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding one JSON file per save.
    pub saves_dir: PathBuf,
    /// Directory holding global and per-player statistics.
    pub stats_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            saves_dir: PathBuf::from("saves"),
            stats_dir: PathBuf::from("stats"),
        }
    }
}

impl StorageConfig {
    /// Place both directories under `root` with their default names.
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.saves_dir = root.join("saves");
        self.stats_dir = root.join("stats");
        self
    }

    /// Set the saves directory.
    pub fn with_saves_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.saves_dir = dir.into();
        self
    }

    /// Set the statistics directory.
    pub fn with_stats_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stats_dir = dir.into();
        self
    }
}
