//! Structural checks over a story graph.
//!
//! A valid story has a non-terminal start scene, every choice resolves to a
//! scene of the same story, every non-terminal scene offers a choice, at
//! least one ending is reachable, and every item gate can be satisfied by
//! an item granted somewhere in the story.

use std::collections::{HashSet, VecDeque};

use crate::scene::{SceneBody, Scenes};
use crate::story::StoryGraph;

/// A warning or error found during story validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The scene key where the issue was found (or the story key).
    pub scene: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(scene: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(scene: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.scene, self.message)
    }
}

/// Breadth-first walk over choice edges from `start`.
///
/// Returns scene keys in first-discovery order, `start` first. Edges to
/// missing scenes are not followed. An unknown `start` yields an empty list.
pub fn reachable_scenes(scenes: &Scenes, start: &str) -> Vec<String> {
    if !scenes.contains_key(start) {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some(key) = queue.pop_front() {
        order.push(key.to_string());
        let Some(scene) = scenes.get(key) else {
            continue;
        };
        for choice in scene.choices() {
            let next = choice.next_scene.as_str();
            if scenes.contains_key(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    order
}

/// Validate a story graph.
///
/// Returns every issue found. An empty list, or one holding only warnings,
/// means the story can be played.
pub fn validate_graph(story: &StoryGraph) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let start_key = story.start_key();

    match story.start() {
        Err(e) => issues.push(ValidationIssue::error(&story.key, e.to_string())),
        Ok(start) if start.is_terminal() => {
            issues.push(ValidationIssue::error(
                &start_key,
                "start scene is an ending",
            ));
        }
        Ok(_) => {}
    }

    check_scenes(story, &mut issues);
    check_items(story, &mut issues);
    check_reachability(story, &start_key, &mut issues);

    issues
}

/// Per-scene checks: dangling edges and empty non-terminal scenes.
fn check_scenes(story: &StoryGraph, issues: &mut Vec<ValidationIssue>) {
    for (key, scene) in &story.scenes {
        match &scene.body {
            SceneBody::Choices(choices) if choices.is_empty() => {
                issues.push(ValidationIssue::error(
                    key,
                    "scene has no choices and is not an ending",
                ));
            }
            SceneBody::Choices(choices) => {
                for (i, choice) in choices.iter().enumerate() {
                    if let Err(e) = story.scene(&choice.next_scene) {
                        issues.push(ValidationIssue::error(
                            key,
                            format!("choice {} \"{}\": {e}", i + 1, choice.text),
                        ));
                    }
                }
            }
            SceneBody::Ending { .. } => {}
        }
    }
}

/// Every required item must be granted by some choice in the story.
fn check_items(story: &StoryGraph, issues: &mut Vec<ValidationIssue>) {
    let granted: HashSet<&str> = story
        .scenes
        .values()
        .flat_map(|scene| scene.choices())
        .filter_map(|choice| choice.item.as_deref())
        .collect();

    for (key, scene) in &story.scenes {
        for choice in scene.choices() {
            let Some(item) = choice.requires_item.as_deref() else {
                continue;
            };
            if !granted.contains(item) {
                issues.push(ValidationIssue::error(
                    key,
                    format!("requires \"{item}\", which no choice grants"),
                ));
            }
        }
    }
}

/// At least one ending must be reachable; unreachable scenes are warned about.
fn check_reachability(story: &StoryGraph, start_key: &str, issues: &mut Vec<ValidationIssue>) {
    if !story.scenes.contains_key(start_key) {
        return;
    }

    let reachable = reachable_scenes(&story.scenes, start_key);
    let has_ending = reachable
        .iter()
        .filter_map(|key| story.scenes.get(key))
        .any(|scene| scene.is_terminal());
    if !has_ending {
        issues.push(ValidationIssue::error(
            &story.key,
            "no ending is reachable from the start scene",
        ));
    }

    let reachable: HashSet<&str> = reachable.iter().map(String::as_str).collect();
    for key in story.scenes.keys() {
        if !reachable.contains(key.as_str()) {
            issues.push(ValidationIssue::warning(
                key,
                "scene is unreachable from the start scene",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Choice, Scene};
    use crate::story::{Difficulty, StoryInfo};

    fn story(scenes: Vec<(&str, Scene)>) -> StoryGraph {
        StoryGraph::new(
            "t",
            StoryInfo::new("Test", "", Difficulty::Easy),
            scenes,
        )
    }

    fn errors(issues: &[ValidationIssue]) -> Vec<&str> {
        issues
            .iter()
            .filter(|i| i.is_error)
            .map(|i| i.message.as_str())
            .collect()
    }

    #[test]
    fn valid_story_has_no_issues() {
        let s = story(vec![
            (
                "t_start",
                Scene::passage(
                    "Start",
                    "",
                    vec![
                        Choice::new("Take key", "t_door").grants("key"),
                        Choice::new("Go", "t_door"),
                    ],
                ),
            ),
            (
                "t_door",
                Scene::passage(
                    "Door",
                    "",
                    vec![Choice::new("Unlock", "t_end").requires("key")],
                ),
            ),
            ("t_end", Scene::ending("END", "")),
        ]);
        assert!(validate_graph(&s).is_empty());
    }

    #[test]
    fn missing_start() {
        let s = story(vec![("t_end", Scene::ending("END", ""))]);
        let issues = validate_graph(&s);
        assert_eq!(errors(&issues), ["story \"t\" has no start scene \"t_start\""]);
        assert_eq!(issues[0].scene, "t");
    }

    #[test]
    fn terminal_start() {
        let s = story(vec![("t_start", Scene::ending("END", ""))]);
        let issues = validate_graph(&s);
        assert_eq!(errors(&issues), ["start scene is an ending"]);
    }

    #[test]
    fn dangling_edge_and_no_ending() {
        let s = story(vec![(
            "t_start",
            Scene::passage("Start", "", vec![Choice::new("Jump", "t_void")]),
        )]);
        let issues = validate_graph(&s);
        let errs = errors(&issues);
        assert!(errs.contains(&"choice 1 \"Jump\": scene not found: \"t_void\""));
        assert!(errs.iter().any(|m| m.contains("no ending is reachable")));
    }

    #[test]
    fn empty_passage_is_an_error() {
        let s = story(vec![
            (
                "t_start",
                Scene::passage("Start", "", vec![Choice::new("Go", "t_end")]),
            ),
            ("t_stuck", Scene::passage("Stuck", "", vec![])),
            ("t_end", Scene::ending("END", "")),
        ]);
        let issues = validate_graph(&s);
        assert!(issues.iter().any(|i| i.scene == "t_stuck" && i.is_error));
    }

    #[test]
    fn unobtainable_gate() {
        let s = story(vec![
            (
                "t_start",
                Scene::passage("Start", "", vec![Choice::new("Open", "t_end").requires("key")]),
            ),
            ("t_end", Scene::ending("END", "")),
        ]);
        let issues = validate_graph(&s);
        assert!(errors(&issues).iter().any(|m| m.contains("\"key\"")));
    }

    #[test]
    fn unreachable_scene_is_a_warning() {
        let s = story(vec![
            (
                "t_start",
                Scene::passage("Start", "", vec![Choice::new("Go", "t_end")]),
            ),
            ("t_island", Scene::ending("LOST", "")),
            ("t_end", Scene::ending("END", "")),
        ]);
        let issues = validate_graph(&s);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
        assert_eq!(issues[0].scene, "t_island");
        assert_eq!(
            issues[0].to_string(),
            "warning: t_island: scene is unreachable from the start scene"
        );
    }

    #[test]
    fn bfs_order_and_cycles() {
        let s = story(vec![
            (
                "t_start",
                Scene::passage(
                    "Start",
                    "",
                    vec![Choice::new("A", "t_a"), Choice::new("B", "t_b")],
                ),
            ),
            (
                "t_a",
                Scene::passage(
                    "A",
                    "",
                    vec![Choice::new("Back", "t_start"), Choice::new("End", "t_end")],
                ),
            ),
            ("t_b", Scene::passage("B", "", vec![Choice::new("A", "t_a")])),
            ("t_end", Scene::ending("END", "")),
        ]);
        assert_eq!(
            reachable_scenes(&s.scenes, "t_start"),
            ["t_start", "t_a", "t_b", "t_end"]
        );
        assert!(reachable_scenes(&s.scenes, "t_nowhere").is_empty());
    }
}
