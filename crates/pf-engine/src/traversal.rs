//! Rendering the current scene and applying player choices.
//!
//! Both operations take the story's scenes and the game state by reference
//! and return without retaining either. Rejected input leaves the state
//! untouched.

use chrono::{Local, NaiveDateTime};
use pf_core::{EndingReport, GameState, Scene, Scenes};
use tracing::debug;

use crate::command::{PlayerInput, parse_input};
use crate::error::{EngineError, EngineResult};
use crate::view::RenderView;

/// Outcome of one accepted line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    /// A choice was taken and the state moved along an edge.
    Advanced(Transition),
    /// The player asked for the inventory.
    Inventory,
    /// The player asked to save.
    Save,
    /// The player asked for statistics.
    Stats,
    /// The player asked to quit.
    Quit,
}

/// What happened when a choice was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Scene the choice was made in.
    pub from: String,
    /// Scene the player is now at.
    pub to: String,
    /// Text of the choice taken.
    pub choice: String,
    /// Item picked up, only when it was not already held.
    pub item_found: Option<String>,
    /// Death message, when the choice was fatal.
    pub death_message: Option<String>,
    /// Whether the new scene is an ending.
    pub ended: bool,
}

fn lookup<'s>(scenes: &'s Scenes, key: &str) -> EngineResult<(&'s str, &'s Scene)> {
    scenes
        .get_key_value(key)
        .map(|(k, scene)| (k.as_str(), scene))
        .ok_or_else(|| EngineError::SceneNotFound(key.to_string()))
}

/// Render the scene the player is at and record the visit.
pub fn render_current<'s>(
    scenes: &'s Scenes,
    state: &mut GameState,
) -> EngineResult<RenderView<'s>> {
    let (key, scene) = lookup(scenes, &state.current_scene)?;
    if state.mark_visited(key) {
        debug!(scene = key, "first visit");
    }
    Ok(RenderView::new(key, scene, state))
}

/// Apply one line of player input, timestamped now.
pub fn apply_choice(
    scenes: &Scenes,
    state: &mut GameState,
    raw: &str,
) -> EngineResult<TurnResult> {
    apply_choice_at(scenes, state, raw, Local::now().naive_local())
}

/// Apply one line of player input with an explicit timestamp.
///
/// Commands return their tag without touching the state. A choice number is
/// checked against the current scene and its item gate before anything
/// changes; on success the choice is recorded, any new item is collected, a
/// fatal choice counts a death, and the player moves to the target scene.
pub fn apply_choice_at(
    scenes: &Scenes,
    state: &mut GameState,
    raw: &str,
    at: NaiveDateTime,
) -> EngineResult<TurnResult> {
    let number = match parse_input(raw)? {
        PlayerInput::Choose(number) => number,
        PlayerInput::Inventory => return Ok(TurnResult::Inventory),
        PlayerInput::Save => return Ok(TurnResult::Save),
        PlayerInput::Stats => return Ok(TurnResult::Stats),
        PlayerInput::Quit => return Ok(TurnResult::Quit),
    };

    let (from, scene) = lookup(scenes, &state.current_scene)?;
    if scene.is_terminal() {
        return Err(EngineError::StoryEnded);
    }

    let choice = scene
        .choice(number)
        .ok_or_else(|| EngineError::ChoiceOutOfRange {
            input: raw.trim().to_string(),
            available: scene.choices().len(),
        })?;

    let missing = choice
        .requires_item
        .as_deref()
        .filter(|item| !state.has_item(item));
    if let Some(item) = missing {
        debug!(scene = from, item, "choice gated");
        return Err(EngineError::MissingRequiredItem {
            item: item.to_string(),
        });
    }

    let (to, target) = lookup(scenes, &choice.next_scene)?;

    state.record_choice(from, &choice.text, at);
    let item_found = choice
        .item
        .as_ref()
        .filter(|item| state.grant_item(item))
        .cloned();
    if choice.is_fatal() {
        state.record_death();
    }
    state.current_scene = to.to_string();

    debug!(from, to, number, deaths = state.deaths, "choice applied");

    Ok(TurnResult::Advanced(Transition {
        from: from.to_string(),
        to: to.to_string(),
        choice: choice.text.clone(),
        item_found,
        death_message: choice.death_message.clone(),
        ended: target.is_terminal(),
    }))
}

/// Summarize a playthrough that sits on an ending.
pub fn conclude(
    scenes: &Scenes,
    state: &GameState,
    ended_at: NaiveDateTime,
) -> EngineResult<EndingReport> {
    let (key, scene) = lookup(scenes, &state.current_scene)?;
    let title = scene
        .ending_title()
        .ok_or_else(|| EngineError::NotAtEnding(key.to_string()))?;
    Ok(state.ending_report(title, ended_at))
}
