//! Read-only views handed to whatever draws the scene.

use pf_core::{GameState, Scene};

/// One numbered choice as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView<'s> {
    /// 1-based display number.
    pub number: usize,
    /// Choice text.
    pub text: &'s str,
    /// Whether the player can take it right now.
    pub available: bool,
    /// The item gating this choice, if any.
    pub requires: Option<&'s str>,
}

/// A rendered scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView<'s> {
    /// Scene key.
    pub key: &'s str,
    /// Scene title, if any.
    pub title: Option<&'s str>,
    /// Narrative text, or the ending description.
    pub description: &'s str,
    /// Every choice of the scene. Gated choices are present but unavailable.
    pub choices: Vec<ChoiceView<'s>>,
    /// Ending title when the scene is terminal.
    pub ending_title: Option<&'s str>,
}

impl<'s> RenderView<'s> {
    pub(crate) fn new(key: &'s str, scene: &'s Scene, state: &GameState) -> Self {
        let choices = scene
            .choices()
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let requires = choice.requires_item.as_deref();
                ChoiceView {
                    number: i + 1,
                    text: &choice.text,
                    available: requires.is_none_or(|item| state.has_item(item)),
                    requires,
                }
            })
            .collect();

        Self {
            key,
            title: scene.title.as_deref(),
            description: &scene.description,
            choices,
            ending_title: scene.ending_title(),
        }
    }

    /// Whether the scene ends the story.
    pub fn is_terminal(&self) -> bool {
        self.ending_title.is_some()
    }
}
