//! Parsing of raw player input.

use crate::error::{EngineError, EngineResult};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Pick the choice with this 1-based number.
    Choose(usize),
    /// Show the inventory.
    Inventory,
    /// Save the game.
    Save,
    /// Show statistics for the current playthrough.
    Stats,
    /// Leave the game.
    Quit,
}

const INVENTORY_WORDS: &[&str] = &["i", "inv", "inventory"];
const SAVE_WORDS: &[&str] = &["s", "save"];
const STATS_WORDS: &[&str] = &["t", "stats"];
const QUIT_WORDS: &[&str] = &["q", "quit", "exit"];

/// Parse one line of input.
///
/// Commands are case-insensitive and surrounding whitespace is ignored. A
/// choice number must be all ASCII digits and greater than zero. Numbers too
/// large to represent saturate, so they still fail the range check later.
pub fn parse_input(raw: &str) -> EngineResult<PlayerInput> {
    let input = raw.trim();
    let word = input.to_lowercase();

    if INVENTORY_WORDS.contains(&word.as_str()) {
        return Ok(PlayerInput::Inventory);
    }
    if SAVE_WORDS.contains(&word.as_str()) {
        return Ok(PlayerInput::Save);
    }
    if STATS_WORDS.contains(&word.as_str()) {
        return Ok(PlayerInput::Stats);
    }
    if QUIT_WORDS.contains(&word.as_str()) {
        return Ok(PlayerInput::Quit);
    }

    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::InvalidChoiceFormat(input.to_string()));
    }

    let number = input.parse::<usize>().unwrap_or(usize::MAX);
    if number == 0 {
        return Err(EngineError::InvalidChoiceFormat(input.to_string()));
    }
    Ok(PlayerInput::Choose(number))
}
