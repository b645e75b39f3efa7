use std::io::{BufRead, Write};

use colored::Colorize;
use pf_session::StorageConfig;

use crate::game::{PlayContext, render};

pub fn run(config: &StorageConfig, save: Option<&str>) -> Result<(), String> {
    resume(&mut super::terminal(config), save)
}

/// Load a save, picking one from the list when no name is given, and play on.
pub fn resume<R: BufRead, W: Write>(
    ctx: &mut PlayContext<R, W>,
    save: Option<&str>,
) -> Result<(), String> {
    let name = match save {
        Some(name) => name.to_string(),
        None => match pick_save(ctx)? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let mut state = ctx.saves.load(&name).map_err(|e| e.to_string())?;
    ctx.say(format!("Welcome back, {}!", state.player_name).green())?;
    ctx.play(&mut state)?;
    Ok(())
}

fn pick_save<R: BufRead, W: Write>(ctx: &mut PlayContext<R, W>) -> Result<Option<String>, String> {
    let saves = ctx.saves.list().map_err(|e| e.to_string())?;
    if saves.is_empty() {
        ctx.say("No saved games found.".yellow())?;
        return Ok(None);
    }

    render::saves(&mut ctx.output, &saves).map_err(|e| e.to_string())?;
    let label = format!("Choose a save (1-{}, Enter to go back): ", saves.len());
    loop {
        let Some(answer) = ctx.prompt(&label)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(None);
        }
        let picked = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| saves.get(i))
            .or_else(|| saves.iter().find(|s| s.name == answer));
        if let Some(summary) = picked {
            return Ok(Some(summary.name.clone()));
        }
        ctx.say(format!("No save '{answer}'.").red())?;
    }
}
