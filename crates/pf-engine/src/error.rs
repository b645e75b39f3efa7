//! Error types for scene traversal.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while rendering a scene or applying a choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The current or target scene is missing from the story graph.
    #[error("scene not found: \"{0}\"")]
    SceneNotFound(String),

    /// Input was neither a command nor a positive choice number.
    #[error("\"{0}\" is not a choice number or command")]
    InvalidChoiceFormat(String),

    /// The choice number does not exist in the current scene.
    #[error("choice {input} does not exist, pick 1-{available}")]
    ChoiceOutOfRange {
        /// The number as typed.
        input: String,
        /// How many choices the scene offers.
        available: usize,
    },

    /// The choice needs an item the player does not hold.
    #[error("you need the {item} to do that")]
    MissingRequiredItem {
        /// The required item.
        item: String,
    },

    /// The current scene is an ending; no further choices can be made.
    #[error("the story has already ended")]
    StoryEnded,

    /// An ending summary was requested at a non-terminal scene.
    #[error("scene \"{0}\" is not an ending")]
    NotAtEnding(String),
}

impl EngineError {
    /// Whether the caller can re-prompt and carry on.
    ///
    /// Rejected player input is recoverable. A broken story graph or a call
    /// made after the story ended is not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidChoiceFormat(_)
                | Self::ChoiceOutOfRange { .. }
                | Self::MissingRequiredItem { .. }
        )
    }
}
