//! Terminal rendering for scenes, inventories, saves and statistics.

use std::io::{self, Write};

use chrono::TimeDelta;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use pf_core::GameState;
use pf_engine::{RenderView, Transition};
use pf_session::{GlobalStats, PlayerStats, SaveSummary};

const COMMAND_HINT: &str = "Commands: [i]nventory, [s]ave, s[t]ats, [q]uit";

pub fn title(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Pfadfinder".bold().cyan())?;
    writeln!(out, "{}", "Branching text adventures".italic())?;
    writeln!(out)
}

pub fn main_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Main Menu".bold().cyan())?;
    writeln!(out)?;
    for entry in ["[1] New Game", "[2] Load Game", "[3] Global Statistics", "[4] Exit"] {
        writeln!(out, "{entry}")?;
    }
    writeln!(out)
}

/// Title, passage, numbered choices and the command hint.
///
/// Choices the player cannot take yet are dimmed and name the missing item.
pub fn scene(out: &mut impl Write, view: &RenderView<'_>) -> io::Result<()> {
    writeln!(out)?;
    if let Some(title) = view.title {
        writeln!(out, "{}", title.bold().cyan())?;
        writeln!(out)?;
    }
    writeln!(out, "{}", view.description)?;
    writeln!(out)?;
    writeln!(out, "{}", "What do you want to do?".bold())?;
    for choice in &view.choices {
        match choice.requires.filter(|_| !choice.available) {
            Some(item) => {
                let line = format!("  {}. {} (requires {item})", choice.number, choice.text);
                writeln!(out, "{}", line.dimmed())?;
            }
            None => writeln!(out, "  {}. {}", choice.number, choice.text)?,
        }
    }
    writeln!(out)?;
    writeln!(out, "{}", COMMAND_HINT.dimmed())
}

pub fn ending(out: &mut impl Write, view: &RenderView<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", view.description)?;
    writeln!(out)?;
    if let Some(title) = view.ending_title {
        writeln!(out, "{}", title.bold().green())?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn transition(out: &mut impl Write, transition: &Transition) -> io::Result<()> {
    if let Some(item) = &transition.item_found {
        writeln!(out, "{}", format!("You found: {item}").green())?;
    }
    if let Some(message) = &transition.death_message {
        writeln!(out, "{}", message.red().bold())?;
    }
    Ok(())
}

pub fn inventory(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    writeln!(out, "{}", "Inventory:".bold().cyan())?;
    if state.inventory.is_empty() {
        writeln!(out, "Empty")?;
    }
    for item in &state.inventory {
        writeln!(out, "- {item}")?;
    }
    writeln!(out)
}

/// Statistics for the playthrough in progress.
pub fn current_stats(out: &mut impl Write, state: &GameState, elapsed: TimeDelta) -> io::Result<()> {
    let mut table = metric_table();
    table.add_row(vec!["Player".to_string(), state.player_name.clone()]);
    table.add_row(vec!["Story".to_string(), story_title(&state.story_type)]);
    table.add_row(vec!["Current Play Time".to_string(), format_duration(elapsed)]);
    add_progress_rows(&mut table, state);

    writeln!(out, "{}", "Current Game Statistics".bold())?;
    writeln!(out, "{table}")?;
    writeln!(out)
}

/// Statistics shown once an ending is reached.
pub fn final_stats(out: &mut impl Write, state: &GameState, elapsed: TimeDelta) -> io::Result<()> {
    let mut table = metric_table();
    table.add_row(vec!["Play Time".to_string(), format_duration(elapsed)]);
    add_progress_rows(&mut table, state);

    writeln!(out, "{}", "Final Statistics".bold())?;
    writeln!(out, "{table}")?;
    writeln!(out)
}

pub fn global_stats(out: &mut impl Write, stats: &GlobalStats) -> io::Result<()> {
    let mut table = metric_table();
    table.add_row(vec![
        "Total Games Played".to_string(),
        stats.total_games.to_string(),
    ]);
    table.add_row(vec![
        "Total Play Time".to_string(),
        format_seconds(stats.total_play_time_seconds),
    ]);
    table.add_row(vec![
        "Average Game Time".to_string(),
        format_seconds(stats.average_game_time_seconds),
    ]);
    table.add_row(vec!["Total Deaths".to_string(), stats.total_deaths.to_string()]);
    table.add_row(vec![
        "Total Items Collected".to_string(),
        stats.total_items_collected.to_string(),
    ]);

    writeln!(out, "{}", "Global Statistics".bold().cyan())?;
    writeln!(out, "{table}")?;
    completions(out, &stats.stories_completed)
}

pub fn player_stats(out: &mut impl Write, stats: &PlayerStats) -> io::Result<()> {
    let mut table = metric_table();
    table.add_row(vec!["Games Played".to_string(), stats.games_played.to_string()]);
    table.add_row(vec![
        "Total Play Time".to_string(),
        format_seconds(stats.total_play_time_seconds),
    ]);
    table.add_row(vec![
        "Average Game Time".to_string(),
        format_seconds(stats.average_game_time_seconds()),
    ]);
    table.add_row(vec!["Total Deaths".to_string(), stats.total_deaths.to_string()]);
    table.add_row(vec![
        "Total Items Collected".to_string(),
        stats.total_items_collected.to_string(),
    ]);

    writeln!(
        out,
        "{}",
        format!("Statistics for {}", stats.player_name).bold().cyan()
    )?;
    writeln!(out, "{table}")?;
    completions(out, &stats.stories_completed)
}

/// Numbered table of saves, as offered by the load picker.
pub fn saves(out: &mut impl Write, saves: &[SaveSummary]) -> io::Result<()> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Player", "Story", "Saved", "Scenes"]);
    for (i, save) in saves.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            save.name.clone(),
            save.player_name.clone(),
            story_title(&save.story_type),
            save.saved_at.format("%Y-%m-%d %H:%M").to_string(),
            save.scenes_visited.to_string(),
        ]);
    }
    writeln!(out, "{table}")
}

fn completions<'a>(
    out: &mut impl Write,
    completed: impl IntoIterator<Item = (&'a String, &'a u64)>,
) -> io::Result<()> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Story", "Times Completed"]);

    let mut any = false;
    for (key, count) in completed {
        table.add_row(vec![story_title(key), count.to_string()]);
        any = true;
    }
    if any {
        writeln!(out)?;
        writeln!(out, "{table}")?;
    }
    writeln!(out)
}

fn metric_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);
    table
}

fn add_progress_rows(table: &mut Table, state: &GameState) {
    table.add_row(vec![
        "Scenes Visited".to_string(),
        state.visited_scenes.len().to_string(),
    ]);
    table.add_row(vec![
        "Choices Made".to_string(),
        state.choices_made.len().to_string(),
    ]);
    table.add_row(vec![
        "Items Collected".to_string(),
        state.items_collected.to_string(),
    ]);
    table.add_row(vec!["Deaths".to_string(), state.deaths.to_string()]);
    table.add_row(vec!["Saves Used".to_string(), state.saves_used.to_string()]);
}

/// Catalog title for a story key, falling back to the key itself.
fn story_title(key: &str) -> String {
    pf_stories::list_stories()
        .get(key)
        .map_or_else(|| key.to_string(), |info| info.title.clone())
}

/// `H:MM:SS`, rounded down to whole seconds.
pub fn format_duration(elapsed: TimeDelta) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!("{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

fn format_seconds(seconds: f64) -> String {
    format_duration(TimeDelta::seconds(seconds.max(0.0) as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_engine::render_current;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn gated_choice_is_marked() {
        let scenes = pf_stories::scenes("castle");
        let mut state = GameState::new("Ada", "castle");
        state.current_scene = "castle_wall".into();
        let view = render_current(scenes, &mut state).unwrap();

        let text = rendered(|out| scene(out, &view));
        insta::assert_snapshot!(text.trim(), @r"
        The Hidden Door

        The different section is a door disguised as masonry. A small golden keyhole is set into one of the stones.

        What do you want to do?
          1. Unlock it with the golden key (requires golden key)
          2. Knock on the stones
          3. Return to the main entrance

        Commands: [i]nventory, [s]ave, s[t]ats, [q]uit
        ");
    }

    #[test]
    fn held_item_unlocks_choice() {
        let scenes = pf_stories::scenes("castle");
        let mut state = GameState::new("Ada", "castle");
        state.current_scene = "castle_wall".into();
        state.grant_item("golden key");
        let view = render_current(scenes, &mut state).unwrap();

        let text = rendered(|out| scene(out, &view));
        assert!(text.contains("  1. Unlock it with the golden key\n"));
        assert!(!text.contains("requires"));
    }

    #[test]
    fn ending_shows_description_then_title() {
        let scenes = pf_stories::scenes("castle");
        let mut state = GameState::new("Ada", "castle");
        state.current_scene = "castle_poison".into();
        let view = render_current(scenes, &mut state).unwrap();

        let text = rendered(|out| ending(out, &view));
        let description = text.find("eternal sleep").unwrap();
        let title = text.find("CURSED ENDING").unwrap();
        assert!(description < title);
    }

    #[test]
    fn transition_messages() {
        let found = Transition {
            from: "castle_hall".into(),
            to: "castle_secret".into(),
            choice: "Search behind the tapestries".into(),
            item_found: Some("golden key".into()),
            death_message: None,
            ended: false,
        };
        assert_eq!(
            rendered(|out| transition(out, &found)),
            "You found: golden key\n"
        );

        let died = Transition {
            item_found: None,
            death_message: Some("The food was cursed!".into()),
            ..found
        };
        assert_eq!(
            rendered(|out| transition(out, &died)),
            "The food was cursed!\n"
        );
    }

    #[test]
    fn empty_and_full_inventory() {
        let mut state = GameState::new("Ada", "castle");
        insta::assert_snapshot!(rendered(|out| inventory(out, &state)).trim(), @r"
        Inventory:
        Empty
        ");

        state.grant_item("golden key");
        state.grant_item("magic flower");
        insta::assert_snapshot!(rendered(|out| inventory(out, &state)).trim(), @r"
        Inventory:
        - golden key
        - magic flower
        ");
    }

    #[test]
    fn final_stats_lists_counters() {
        let mut state = GameState::new("Ada", "forest");
        state.mark_visited("forest_start");
        state.record_death();
        state.record_save();

        let text = rendered(|out| final_stats(out, &state, TimeDelta::seconds(3725)));
        assert!(text.starts_with("Final Statistics\n"));
        assert!(text.contains("1:02:05"));
        for metric in [
            "Scenes Visited",
            "Choices Made",
            "Items Collected",
            "Deaths",
            "Saves Used",
        ] {
            assert!(text.contains(metric), "missing {metric}");
        }
    }

    #[test]
    fn current_stats_names_the_story() {
        let state = GameState::new("Ada", "space");
        let text = rendered(|out| current_stats(out, &state, TimeDelta::zero()));
        assert!(text.contains("Ada"));
        assert!(text.contains("Space Station Alpha"));
        assert!(text.contains("0:00:00"));
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(TimeDelta::seconds(59)), "0:00:59");
        assert_eq!(format_duration(TimeDelta::seconds(3600 * 26 + 61)), "26:01:01");
        assert_eq!(format_duration(TimeDelta::seconds(-5)), "0:00:00");
        assert_eq!(format_seconds(150.9), "0:02:30");
    }

    #[test]
    fn unknown_story_title_falls_back_to_key() {
        assert_eq!(story_title("castle"), "The Enchanted Castle");
        assert_eq!(story_title("mars"), "mars");
    }
}
