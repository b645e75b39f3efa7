//! Core types for Pfadfinder: scenes, choices, story graphs, and game state.
//!
//! This crate is the data model shared by the story store, the traversal
//! engine, and session persistence. It holds no behavior beyond invariant
//! checks and the small state mutations a playthrough is made of.

/// Error types used throughout the crate.
pub mod error;
/// Scenes and the choices that connect them.
pub mod scene;
/// Mutable record of one playthrough.
pub mod state;
/// Story graphs and their catalog metadata.
pub mod story;
/// Structural validation of story graphs.
pub mod validate;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export scene types.
pub use scene::{Choice, Scene, SceneBody, Scenes};
/// Re-export game state types.
pub use state::{ChoiceRecord, EndingReport, GameState};
/// Re-export story types.
pub use story::{Difficulty, StoryGraph, StoryInfo, start_scene_key};
/// Re-export validation types.
pub use validate::{ValidationIssue, reachable_scenes, validate_graph};
