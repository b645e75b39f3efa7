//! The interactive driving loop.
//!
//! [`PlayContext`] bundles the input and output streams with the save and
//! statistics stores. The loop owns the [`GameState`] for the length of a
//! session and feeds the engine one line at a time.

pub mod render;

use std::fmt::Display;
use std::io::{BufRead, Write};

use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use pf_core::GameState;
use pf_engine::{TurnResult, apply_choice, conclude, render_current};
use pf_session::{SaveStore, StatsStore, StorageConfig, sanitize_save_name};
use tracing::{info, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An ending scene was reached and statistics were recorded.
    Ended,
    /// The player quit.
    Quit,
    /// Input ran out.
    Abandoned,
}

/// Streams and stores used while playing.
pub struct PlayContext<R, W> {
    input: R,
    pub output: W,
    pub saves: SaveStore,
    pub stats: StatsStore,
}

impl<R: BufRead, W: Write> PlayContext<R, W> {
    pub fn new(input: R, output: W, config: &StorageConfig) -> Self {
        Self {
            input,
            output,
            saves: SaveStore::new(config),
            stats: StatsStore::new(config),
        }
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl Display) -> Result<(), String> {
        writeln!(self.output, "{text}").map_err(|e| e.to_string())
    }

    /// Show `label` and read one trimmed line. `None` on end of input.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>, String> {
        write!(self.output, "{label}").map_err(|e| e.to_string())?;
        self.output.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None), // EOF
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Play `state` until an ending, a quit, or the end of input.
    ///
    /// Rejected input is reported and asked for again. Any other engine
    /// error ends the session with `Err`.
    pub fn play(&mut self, state: &mut GameState) -> Result<Outcome, String> {
        let scenes = pf_stories::scenes(&state.story_type);
        if scenes.is_empty() {
            return Err(format!("unknown story '{}'", state.story_type));
        }
        info!(
            player = %state.player_name,
            story = %state.story_type,
            scene = %state.current_scene,
            "session started"
        );

        loop {
            let view = render_current(scenes, state).map_err(|e| e.to_string())?;

            if view.is_terminal() {
                render::ending(&mut self.output, &view).map_err(|e| e.to_string())?;
                let report = conclude(scenes, state, now()).map_err(|e| e.to_string())?;
                render::final_stats(&mut self.output, state, report.elapsed)
                    .map_err(|e| e.to_string())?;

                if let Err(e) = self.stats.record_ending(&report) {
                    warn!(error = %e, "statistics not recorded");
                    self.say(format!("Could not record statistics: {e}").yellow())?;
                }
                info!(ending = %report.ending_key, "session ended");
                return Ok(Outcome::Ended);
            }

            render::scene(&mut self.output, &view).map_err(|e| e.to_string())?;

            loop {
                let Some(line) = self.prompt("> ")? else {
                    return Ok(Outcome::Abandoned);
                };
                if line.is_empty() {
                    continue;
                }

                match apply_choice(scenes, state, &line) {
                    Ok(TurnResult::Advanced(transition)) => {
                        render::transition(&mut self.output, &transition)
                            .map_err(|e| e.to_string())?;
                        break;
                    }
                    Ok(TurnResult::Inventory) => {
                        render::inventory(&mut self.output, state).map_err(|e| e.to_string())?;
                    }
                    Ok(TurnResult::Stats) => {
                        let elapsed = state.elapsed(now());
                        render::current_stats(&mut self.output, state, elapsed)
                            .map_err(|e| e.to_string())?;
                    }
                    Ok(TurnResult::Save) => self.save(state)?,
                    Ok(TurnResult::Quit) => {
                        if self.confirm_quit()? {
                            self.say("You leave the story behind. Unsaved progress is lost.")?;
                            return Ok(Outcome::Quit);
                        }
                    }
                    Err(e) if e.is_recoverable() => self.say(e.to_string().yellow())?,
                    Err(e) => return Err(e.to_string()),
                }
            }
        }
    }

    /// Ask for a save name and write the save. Failures are reported, not fatal.
    fn save(&mut self, state: &mut GameState) -> Result<(), String> {
        let default = self.saves.suggest_name(&state.player_name);
        let Some(answer) = self.prompt(&format!("Save name [{default}]: "))? else {
            return Ok(());
        };
        let name = if answer.is_empty() { default } else { answer };

        match self.saves.save(&name, state) {
            Ok(_) => {
                state.record_save();
                let stem = sanitize_save_name(&name);
                self.say(format!("Game saved as '{stem}'.").green())
            }
            Err(e) => self.say(format!("Could not save: {e}").red()),
        }
    }

    fn confirm_quit(&mut self) -> Result<bool, String> {
        let answer = self
            .prompt("Are you sure you want to quit? [y/N] ")?
            .unwrap_or_else(|| "y".to_string());
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
