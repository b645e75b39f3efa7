//! Integration tests for the pf CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `pf` with its data directory pointed at `dir` and colors off.
fn pf(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pf").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("PF_SAVES_DIR")
        .env_remove("PF_STATS_DIR")
        .args(["--data-dir", dir.path().to_str().unwrap()]);
    cmd
}

/// Play the castle into the cursed ending: hall, dining room, eat.
fn finish_castle(dir: &TempDir, player: &str) {
    pf(dir)
        .args(["play", "--name", player, "--story", "castle"])
        .write_stdin("1\n2\n1\n")
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// stories
// ---------------------------------------------------------------------------

#[test]
fn stories_lists_catalog() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .arg("stories")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("castle")
                .and(predicate::str::contains("The Enchanted Castle"))
                .and(predicate::str::contains("The Dark Forest"))
                .and(predicate::str::contains("Space Station Alpha"))
                .and(predicate::str::contains("Hard")),
        );
}

#[test]
fn stories_filtered_by_difficulty() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["stories", "--difficulty", "hard"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Space Station Alpha")
                .and(predicate::str::contains("The Enchanted Castle").not())
                .and(predicate::str::contains("The Dark Forest").not()),
        );
}

#[test]
fn stories_rejects_unknown_difficulty() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["stories", "--difficulty", "brutal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown difficulty: \"brutal\""));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_bundled_stories() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed for 3 stories"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_to_cursed_ending() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["play", "--name", "Ada", "--story", "castle"])
        .write_stdin("1\n2\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Enchanted Castle")
                .and(predicate::str::contains("The food was cursed!"))
                .and(predicate::str::contains("CURSED ENDING"))
                .and(predicate::str::contains("Final Statistics")),
        );

    assert!(dir.path().join("stats/global_stats.json").is_file());
    assert!(dir.path().join("stats/player_Ada.json").is_file());
}

#[test]
fn play_reports_bad_input_and_carries_on() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["play", "--name", "Ada", "--story", "castle"])
        .write_stdin("7\nhello\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("choice 7 does not exist, pick 1-3")
                .and(predicate::str::contains("is not a choice number or command"))
                .and(predicate::str::contains("The Great Hall")),
        );
}

#[test]
fn play_shows_locked_choice() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["play", "--name", "Ada", "--story", "castle"])
        .write_stdin("3\n2\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("(requires golden key)")
                .and(predicate::str::contains("you need the golden key to do that")),
        );
}

#[test]
fn play_unknown_story_fails() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["play", "--name", "Ada", "--story", "mars"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown story 'mars'"));
}

// ---------------------------------------------------------------------------
// saves / load
// ---------------------------------------------------------------------------

#[test]
fn saves_empty() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .arg("saves")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved games"));
}

#[test]
fn save_then_load_resumes() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["play", "--name", "Ada", "--story", "castle"])
        .write_stdin("1\ns\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game saved as 'Ada_save'."));

    let raw = fs::read_to_string(dir.path().join("saves/Ada_save.json")).unwrap();
    let record: serde_json::Value = serde_json::from_str(&raw).expect("valid save record");
    assert_eq!(record["current_scene"], "castle_hall");
    assert!(record["save_timestamp"].is_string());

    pf(&dir)
        .arg("saves")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada_save").and(predicate::str::contains("Ada")));

    pf(&dir)
        .args(["load", "Ada_save"])
        .write_stdin("2\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome back, Ada!")
                .and(predicate::str::contains("CURSED ENDING")),
        );
}

#[test]
fn load_missing_save_fails() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["load", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no save named \"ghost\""));
}

#[test]
fn delete_save() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .args(["play", "--name", "Ada", "--story", "forest"])
        .write_stdin("s\nmine\n")
        .assert()
        .success();
    assert!(dir.path().join("saves/mine.json").is_file());

    pf(&dir)
        .args(["saves", "delete", "mine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted save 'mine'"));
    assert!(!dir.path().join("saves/mine.json").exists());

    pf(&dir)
        .args(["saves", "delete", "mine"])
        .assert()
        .failure();
}

#[test]
fn storage_dirs_can_be_moved() {
    let dir = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let saves = elsewhere.path().join("my-saves");
    let stats = elsewhere.path().join("my-stats");

    pf(&dir)
        .args(["--saves-dir", saves.to_str().unwrap()])
        .args(["--stats-dir", stats.to_str().unwrap()])
        .args(["play", "--name", "Ada", "--story", "castle"])
        .write_stdin("1\ns\n\n2\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CURSED ENDING"));

    assert!(saves.join("Ada_save.json").is_file());
    assert!(stats.join("global_stats.json").is_file());
    assert!(stats.join("player_Ada.json").is_file());
    assert!(!dir.path().join("saves").exists());
    assert!(!dir.path().join("stats").exists());
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_after_games() {
    let dir = TempDir::new().unwrap();
    finish_castle(&dir, "Ada");
    finish_castle(&dir, "Bo");

    pf(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total Games Played")
                .and(predicate::str::contains("The Enchanted Castle")),
        );

    pf(&dir)
        .args(["stats", "--player", "Bo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics for Bo"));

    pf(&dir)
        .args(["stats", "--player", "Cy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no statistics for player 'Cy'"));
}

#[test]
fn stats_export_and_reset() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("export.json");

    pf(&dir)
        .args(["stats", "export", dest.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no statistics recorded yet"));

    finish_castle(&dir, "Ada");
    pf(&dir)
        .args(["stats", "export", dest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported statistics to"));

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&dest).unwrap()).expect("valid JSON");
    assert_eq!(exported["total_games"], 1);
    assert_eq!(exported["total_deaths"], 1);
    assert_eq!(exported["stories_completed"]["castle"], 1);

    pf(&dir)
        .args(["stats", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Global statistics reset"));
    assert!(!dir.path().join("stats/global_stats.json").exists());

    pf(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No global statistics found"));
}

// ---------------------------------------------------------------------------
// menu
// ---------------------------------------------------------------------------

#[test]
fn menu_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Main Menu")
                .and(predicate::str::contains("Thanks for playing!")),
        );
}

#[test]
fn menu_survives_end_of_input() {
    let dir = TempDir::new().unwrap();
    pf(&dir)
        .write_stdin("1\nAda\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose Your Adventure"));
}
