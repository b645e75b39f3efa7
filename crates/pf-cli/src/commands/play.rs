use std::io::{BufRead, Write};

use colored::Colorize;
use pf_core::GameState;
use pf_session::StorageConfig;

use crate::game::PlayContext;

const DEFAULT_PLAYER: &str = "Adventurer";

pub fn run(
    config: &StorageConfig,
    name: Option<String>,
    story: Option<String>,
) -> Result<(), String> {
    new_game(&mut super::terminal(config), name, story)
}

/// Ask for whatever is missing, then play a fresh game.
pub fn new_game<R: BufRead, W: Write>(
    ctx: &mut PlayContext<R, W>,
    name: Option<String>,
    story: Option<String>,
) -> Result<(), String> {
    if let Some(key) = story.as_deref().filter(|key| pf_stories::story(key).is_none()) {
        return Err(format!("unknown story '{key}' (see `pf stories`)"));
    }

    let name = match name {
        Some(name) => name,
        None => match ctx.prompt("Enter your name: ")? {
            Some(name) => name,
            None => return Ok(()),
        },
    };
    let name = match name.trim() {
        "" => DEFAULT_PLAYER.to_string(),
        trimmed => trimmed.to_string(),
    };

    let story = match story {
        Some(key) => key,
        None => match choose_story(ctx)? {
            Some(key) => key,
            None => return Ok(()),
        },
    };

    let mut state = GameState::new(name, story);
    ctx.play(&mut state)?;
    Ok(())
}

/// Offer the catalog. `None` when the player backs out.
fn choose_story<R: BufRead, W: Write>(
    ctx: &mut PlayContext<R, W>,
) -> Result<Option<String>, String> {
    let catalog = pf_stories::list_stories();

    ctx.say("Choose Your Adventure:".bold().cyan())?;
    ctx.say("")?;
    for (i, info) in catalog.values().enumerate() {
        ctx.say(format!("[{}] {}", i + 1, info.title))?;
        ctx.say(format!("    {}", info.description))?;
        ctx.say(format!("    Difficulty: {}", info.difficulty))?;
        ctx.say("")?;
    }
    let back = catalog.len() + 1;
    ctx.say(format!("[{back}] Back to Main Menu"))?;
    ctx.say("")?;

    loop {
        let Some(answer) = ctx.prompt("Choose a story: ")? else {
            return Ok(None);
        };
        if let Some((key, _)) = catalog.get_key_value(answer.as_str()) {
            return Ok(Some(key.clone()));
        }
        match answer.parse::<usize>() {
            Ok(n) if n == back => return Ok(None),
            Ok(n) => {
                if let Some((key, _)) = n.checked_sub(1).and_then(|i| catalog.get_index(i)) {
                    return Ok(Some(key.clone()));
                }
            }
            Err(_) => {}
        }
        ctx.say(format!("Pick a number from 1 to {back}.").red())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use tempfile::TempDir;

    fn context(input: &str, dir: &TempDir) -> PlayContext<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        let config = StorageConfig::default().with_root(dir.path());
        PlayContext::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), &config)
    }

    #[test]
    fn story_picked_by_number() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context("Ada\n7\n2\n", &dir);
        new_game(&mut ctx, None, None).unwrap();

        let text = String::from_utf8(ctx.output).unwrap();
        assert!(text.contains("[4] Back to Main Menu"));
        assert!(text.contains("Pick a number from 1 to 4."));
        assert!(text.contains("The Dark Forest"));
        assert!(text.contains("What do you want to do?"));
    }

    #[test]
    fn story_picked_by_key() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context("space\n", &dir);
        new_game(&mut ctx, Some("Bo".into()), None).unwrap();

        let text = String::from_utf8(ctx.output).unwrap();
        assert!(text.contains("Space Station Alpha"));
    }

    #[test]
    fn backing_out_starts_nothing() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context("\n4\n", &dir);
        new_game(&mut ctx, None, None).unwrap();

        let text = String::from_utf8(ctx.output).unwrap();
        assert!(!text.contains("What do you want to do?"));
    }

    #[test]
    fn unknown_story_flag() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context("", &dir);
        let err = new_game(&mut ctx, Some("Ada".into()), Some("mars".into())).unwrap_err();
        assert!(err.contains("unknown story 'mars'"));
    }
}
