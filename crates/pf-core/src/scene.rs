use indexmap::IndexMap;

/// All scenes of one story, keyed by scene key, in authoring order.
pub type Scenes = IndexMap<String, Scene>;

/// One edge out of a scene.
///
/// A choice may grant an item, may require an item the player already holds,
/// and may be fatal. A fatal choice records a death but still leads to
/// `next_scene`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the player.
    pub text: String,
    /// Key of the scene this choice leads to (same story).
    pub next_scene: String,
    /// Item granted when the choice is taken.
    pub item: Option<String>,
    /// Item the player must hold to take this choice.
    pub requires_item: Option<String>,
    /// Message shown when the choice is fatal.
    pub death_message: Option<String>,
}

impl Choice {
    /// Create a plain choice leading to `next_scene`.
    pub fn new(text: impl Into<String>, next_scene: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next_scene: next_scene.into(),
            item: None,
            requires_item: None,
            death_message: None,
        }
    }

    /// Grant `item` when this choice is taken.
    pub fn grants(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// Gate this choice behind `item`.
    pub fn requires(mut self, item: impl Into<String>) -> Self {
        self.requires_item = Some(item.into());
        self
    }

    /// Mark this choice as fatal, with the message shown on death.
    pub fn fatal(mut self, message: impl Into<String>) -> Self {
        self.death_message = Some(message.into());
        self
    }

    /// Whether taking this choice counts as a death.
    pub fn is_fatal(&self) -> bool {
        self.death_message.is_some()
    }
}

/// What a scene offers: outgoing choices, or an ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneBody {
    /// A non-terminal scene with its ordered choices.
    Choices(Vec<Choice>),
    /// A terminal scene.
    Ending {
        /// Ending title, e.g. "CURSED ENDING".
        title: String,
    },
}

/// One node of a story graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Display title. Endings usually have none.
    pub title: Option<String>,
    /// Narrative text. For endings this is the ending description.
    pub description: String,
    /// Choices or ending.
    pub body: SceneBody,
}

impl Scene {
    /// Create a titled, non-terminal scene.
    pub fn passage(
        title: impl Into<String>,
        description: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: description.into(),
            body: SceneBody::Choices(choices),
        }
    }

    /// Create a terminal scene.
    pub fn ending(ending_title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: description.into(),
            body: SceneBody::Ending {
                title: ending_title.into(),
            },
        }
    }

    /// Whether this scene ends the story.
    pub fn is_terminal(&self) -> bool {
        matches!(self.body, SceneBody::Ending { .. })
    }

    /// The ordered choices of this scene. Empty for endings.
    pub fn choices(&self) -> &[Choice] {
        match &self.body {
            SceneBody::Choices(choices) => choices,
            SceneBody::Ending { .. } => &[],
        }
    }

    /// The ending title, if this scene is terminal.
    pub fn ending_title(&self) -> Option<&str> {
        match &self.body {
            SceneBody::Ending { title } => Some(title),
            SceneBody::Choices(_) => None,
        }
    }

    /// Look up a choice by its 1-based display number.
    pub fn choice(&self, number: usize) -> Option<&Choice> {
        number
            .checked_sub(1)
            .and_then(|index| self.choices().get(index))
    }
}
