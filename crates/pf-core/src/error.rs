/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when working with story data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A scene key could not be resolved within its story.
    #[error("scene not found: \"{0}\"")]
    SceneNotFound(String),

    /// The story has no scene under its designated start key.
    #[error("story \"{story}\" has no start scene \"{expected}\"")]
    MissingStart {
        /// The story key.
        story: String,
        /// The start key derived from the story key.
        expected: String,
    },

    /// A difficulty label did not match any known difficulty.
    #[error("unknown difficulty: \"{0}\"")]
    UnknownDifficulty(String),
}
