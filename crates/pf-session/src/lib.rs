//! Session persistence for Pfadfinder.
//!
//! Saves a game state to disk and restores it later, and keeps running
//! statistics over finished games. Nothing here touches the traversal
//! engine; the driving loop hands states and ending reports in.

/// Storage locations.
pub mod config;
/// Error types for persistence.
pub mod error;
/// Save files.
pub mod persist;
/// Play statistics.
pub mod stats;

/// Re-export configuration.
pub use config::StorageConfig;
/// Re-export error types.
pub use error::{SessionError, SessionResult};
/// Re-export save operations.
pub use persist::{
    SaveStore, SaveSummary, default_save_name, deserialize, sanitize_save_name, serialize,
};
/// Re-export statistics types.
pub use stats::{GlobalStats, PlayerStats, StatsStore};
