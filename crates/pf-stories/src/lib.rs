//! The built-in story graphs.
//!
//! Three hand-authored stories ship with Pfadfinder. They are built once on
//! first access and live for the rest of the program.

use std::sync::LazyLock;

use indexmap::IndexMap;
use pf_core::{Scenes, StoryGraph, StoryInfo};

mod castle;
mod forest;
mod space;

static STORIES: LazyLock<IndexMap<String, StoryGraph>> = LazyLock::new(|| {
    [castle::story(), forest::story(), space::story()]
        .into_iter()
        .map(|story| (story.key.clone(), story))
        .collect()
});

static CATALOG: LazyLock<IndexMap<String, StoryInfo>> = LazyLock::new(|| {
    STORIES
        .iter()
        .map(|(key, story)| (key.clone(), story.info.clone()))
        .collect()
});

static NO_SCENES: LazyLock<Scenes> = LazyLock::new(Scenes::new);

/// Catalog of available stories, in menu order.
pub fn list_stories() -> &'static IndexMap<String, StoryInfo> {
    &CATALOG
}

/// Scenes of the story `story_key`.
///
/// An unknown key yields an empty map rather than an error.
pub fn scenes(story_key: &str) -> &'static Scenes {
    STORIES
        .get(story_key)
        .map(|story| &story.scenes)
        .unwrap_or_else(|| LazyLock::force(&NO_SCENES))
}

/// The full story graph for `story_key`, if it exists.
pub fn story(story_key: &str) -> Option<&'static StoryGraph> {
    STORIES.get(story_key)
}

/// All story graphs, in menu order.
pub fn stories() -> impl Iterator<Item = &'static StoryGraph> {
    STORIES.values()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{reachable_scenes, start_scene_key, validate_graph};

    #[test]
    fn catalog_order_and_metadata() {
        let keys: Vec<&str> = list_stories().keys().map(String::as_str).collect();
        assert_eq!(keys, ["castle", "forest", "space"]);

        let castle = &list_stories()["castle"];
        assert_eq!(castle.title, "The Enchanted Castle");
        assert_eq!(castle.difficulty.to_string(), "Easy");
        assert_eq!(list_stories()["space"].difficulty.to_string(), "Hard");
    }

    #[test]
    fn unknown_story_has_no_scenes() {
        assert!(scenes("pirates").is_empty());
        assert!(story("pirates").is_none());
    }

    #[test]
    fn every_story_validates_cleanly() {
        for story in stories() {
            let issues = validate_graph(story);
            assert!(
                issues.is_empty(),
                "{} has issues:\n{}",
                story.key,
                issues
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            );
        }
    }

    #[test]
    fn start_scene_is_not_terminal() {
        for key in list_stories().keys() {
            let start = &scenes(key)[&start_scene_key(key)];
            assert!(!start.is_terminal(), "{key} starts at an ending");
        }
    }

    #[test]
    fn an_ending_is_reachable_from_every_start() {
        for story in stories() {
            let reachable = reachable_scenes(&story.scenes, &story.start_key());
            assert!(
                reachable.iter().any(|key| story.scenes[key].is_terminal()),
                "{} has no reachable ending",
                story.key
            );
        }
    }

    #[test]
    fn every_required_item_is_granted_somewhere() {
        for story in stories() {
            let granted: Vec<&str> = story
                .scenes
                .values()
                .flat_map(|scene| scene.choices())
                .filter_map(|choice| choice.item.as_deref())
                .collect();
            for scene in story.scenes.values() {
                for choice in scene.choices() {
                    if let Some(item) = &choice.requires_item {
                        assert!(granted.contains(&item.as_str()), "{item} is never granted");
                    }
                }
            }
        }
    }

    #[test]
    fn castle_landmarks() {
        let castle = scenes("castle");
        let start = &castle["castle_start"];
        assert_eq!(start.choices()[1].text, "Look for a side entrance");
        assert_eq!(start.choices()[1].next_scene, "castle_garden");

        let tapestries = &castle["castle_hall"].choices()[2];
        assert_eq!(tapestries.text, "Search behind the tapestries");
        assert_eq!(tapestries.item.as_deref(), Some("golden key"));
        assert_eq!(tapestries.next_scene, "castle_secret");

        let food = &castle["castle_dining"].choices()[0];
        assert_eq!(food.text, "Eat the food");
        assert!(food.is_fatal());
        assert_eq!(castle["castle_poison"].ending_title(), Some("CURSED ENDING"));
    }

    #[test]
    fn stories_use_their_own_prefix() {
        for story in stories() {
            let prefix = format!("{}_", story.key);
            assert!(story.scenes.keys().all(|key| key.starts_with(&prefix)));
        }
    }
}
