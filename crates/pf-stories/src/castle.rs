use pf_core::{Choice, Difficulty, Scene, StoryGraph, StoryInfo};

pub(crate) fn story() -> StoryGraph {
    StoryGraph::new(
        "castle",
        StoryInfo::new(
            "The Enchanted Castle",
            "A magical adventure in a mysterious castle",
            Difficulty::Easy,
        ),
        [
            (
                "castle_start",
                Scene::passage(
                    "The Enchanted Castle",
                    "You stand before a magnificent castle with towers that seem to touch the clouds. \
                     The heavy wooden doors are slightly ajar, and strange lights flicker from within.",
                    vec![
                        Choice::new("Enter through the main doors", "castle_hall"),
                        Choice::new("Look for a side entrance", "castle_garden"),
                        Choice::new("Examine the castle exterior", "castle_exterior"),
                    ],
                ),
            ),
            (
                "castle_hall",
                Scene::passage(
                    "The Great Hall",
                    "The great hall is vast and dimly lit by floating candles. Ancient tapestries \
                     cover the walls, and a grand staircase leads to the upper floors.",
                    vec![
                        Choice::new("Go up the grand staircase", "castle_tower"),
                        Choice::new("Explore the dining room", "castle_dining"),
                        Choice::new("Search behind the tapestries", "castle_secret")
                            .grants("golden key"),
                    ],
                ),
            ),
            (
                "castle_garden",
                Scene::passage(
                    "The Enchanted Garden",
                    "A magical garden with flowers that glow in the moonlight. A crystal fountain \
                     stands in the center, and you hear soft music in the air.",
                    vec![
                        Choice::new("Drink from the crystal fountain", "castle_fountain"),
                        Choice::new("Follow the music", "castle_music"),
                        Choice::new("Pick a glowing flower", "castle_flower").grants("magic flower"),
                    ],
                ),
            ),
            (
                "castle_exterior",
                Scene::passage(
                    "Castle Grounds",
                    "Walking around the castle, you notice strange symbols carved into the stone \
                     walls. One section of the wall seems different from the rest.",
                    vec![
                        Choice::new("Touch the strange symbols", "castle_magic"),
                        Choice::new("Examine the different wall section", "castle_wall"),
                        Choice::new("Return to the main entrance", "castle_start"),
                    ],
                ),
            ),
            (
                "castle_tower",
                Scene::passage(
                    "The High Tower",
                    "At the top of the tower, you find a room filled with ancient books and magical \
                     artifacts. A wise old wizard sits at a desk.",
                    vec![
                        Choice::new("Speak with the wizard", "castle_wizard"),
                        Choice::new("Examine the magical artifacts", "castle_artifacts"),
                        Choice::new("Read the ancient books", "castle_books"),
                    ],
                ),
            ),
            (
                "castle_dining",
                Scene::passage(
                    "The Dining Room",
                    "A long table is set for a feast that seems to have been abandoned. The food \
                     looks fresh, but something feels wrong about it.",
                    vec![
                        Choice::new("Eat the food", "castle_poison")
                            .fatal("The food was cursed! You fall into eternal sleep."),
                        Choice::new("Leave the room immediately", "castle_hall"),
                        Choice::new("Investigate under the table", "castle_trap")
                            .grants("silver dagger"),
                    ],
                ),
            ),
            (
                "castle_secret",
                Scene::passage(
                    "Secret Passage",
                    "You found a hidden passage behind the tapestries! It leads to a treasure \
                     chamber filled with gold and jewels.",
                    vec![
                        Choice::new("Take the treasure", "castle_treasure_end"),
                        Choice::new("Leave the treasure and continue exploring", "castle_hall"),
                        Choice::new("Look for traps", "castle_trap_check"),
                    ],
                ),
            ),
            (
                "castle_fountain",
                Scene::passage(
                    "The Crystal Fountain",
                    "As you drink from the fountain, you feel magical energy flowing through you. \
                     Your wounds heal and you feel stronger.",
                    vec![
                        Choice::new("Continue to explore the garden", "castle_garden"),
                        Choice::new("Enter the castle through a garden door", "castle_hall"),
                        Choice::new("Rest by the fountain", "castle_rest"),
                    ],
                ),
            ),
            (
                "castle_wizard",
                Scene::passage(
                    "The Wise Wizard",
                    "The wizard smiles and offers to teach you magic. 'You have shown courage by \
                     reaching this tower,' he says.",
                    vec![
                        Choice::new("Accept the magic training", "castle_magic_end"),
                        Choice::new("Ask about the castle's history", "castle_history"),
                        Choice::new("Politely decline and leave", "castle_hall"),
                    ],
                ),
            ),
            (
                "castle_music",
                Scene::passage(
                    "The Minstrel's Grove",
                    "Behind a hedge of silver roses a pale minstrel plays a lute that has no \
                     strings. The melody is beautiful and terribly sad.",
                    vec![
                        Choice::new("Ask the minstrel about the song", "castle_history"),
                        Choice::new("Offer the minstrel a glowing flower", "castle_song_end")
                            .requires("magic flower"),
                        Choice::new("Return to the garden", "castle_garden"),
                    ],
                ),
            ),
            (
                "castle_flower",
                Scene::passage(
                    "The Glowing Flower",
                    "The flower comes away easily and keeps glowing in your hand. A trail of \
                     fallen petals leads toward the sound of music.",
                    vec![
                        Choice::new("Follow the trail of petals", "castle_music"),
                        Choice::new("Return to the fountain", "castle_fountain"),
                        Choice::new("Enter the castle through a garden door", "castle_hall"),
                    ],
                ),
            ),
            (
                "castle_magic",
                Scene::passage(
                    "Living Symbols",
                    "The symbols warm under your fingers and begin to crawl across the stone, \
                     rearranging themselves into a single word.",
                    vec![
                        Choice::new("Speak the word aloud", "castle_tower"),
                        Choice::new("Follow the symbols along the wall", "castle_wall"),
                        Choice::new("Pull your hand away", "castle_exterior"),
                    ],
                ),
            ),
            (
                "castle_wall",
                Scene::passage(
                    "The Hidden Door",
                    "The different section is a door disguised as masonry. A small golden keyhole \
                     is set into one of the stones.",
                    vec![
                        Choice::new("Unlock it with the golden key", "castle_vault")
                            .requires("golden key"),
                        Choice::new("Knock on the stones", "castle_exterior"),
                        Choice::new("Return to the main entrance", "castle_start"),
                    ],
                ),
            ),
            (
                "castle_vault",
                Scene::passage(
                    "The Royal Vault",
                    "Dust-covered banners hang above a stone pedestal. On it rests a simple iron \
                     crown, humming with old power.",
                    vec![
                        Choice::new("Place the crown on your head", "castle_crown_end"),
                        Choice::new("Leave the crown where it is", "castle_exterior"),
                    ],
                ),
            ),
            (
                "castle_artifacts",
                Scene::passage(
                    "Magical Artifacts",
                    "Shelves of curiosities line the walls: brass astrolabes, bottled storms, and \
                     a crystal orb swirling with blue light.",
                    vec![
                        Choice::new("Take the crystal orb", "castle_tower").grants("crystal orb"),
                        Choice::new("Ask the wizard about the artifacts", "castle_wizard"),
                        Choice::new("Go back down to the hall", "castle_hall"),
                    ],
                ),
            ),
            (
                "castle_books",
                Scene::passage(
                    "Ancient Books",
                    "The books are written in a flowing script that rearranges itself into words \
                     you can read. One volume is titled 'The Sleeping Curse'.",
                    vec![
                        Choice::new("Read 'The Sleeping Curse'", "castle_history"),
                        Choice::new("Ask the wizard to translate", "castle_wizard"),
                        Choice::new("Put the books back", "castle_tower"),
                    ],
                ),
            ),
            (
                "castle_history",
                Scene::passage(
                    "The Castle's History",
                    "Long ago a jealous sorcerer cursed the castle so that none who feast here \
                     ever wake. Only the light of a crystal orb can undo the curse.",
                    vec![
                        Choice::new("Raise the crystal orb and break the curse", "castle_restored_end")
                            .requires("crystal orb"),
                        Choice::new("Seek out the wizard", "castle_wizard"),
                        Choice::new("Go back down to the hall", "castle_hall"),
                    ],
                ),
            ),
            (
                "castle_trap",
                Scene::passage(
                    "Beneath the Table",
                    "Under the table you find a silver dagger and the outline of a trapdoor, held \
                     shut by a fraying rope.",
                    vec![
                        Choice::new("Cut the rope with the silver dagger", "castle_secret")
                            .requires("silver dagger"),
                        Choice::new("Step onto the trapdoor", "castle_pit_end")
                            .fatal("The trapdoor gives way beneath you!"),
                        Choice::new("Crawl back out", "castle_dining"),
                    ],
                ),
            ),
            (
                "castle_trap_check",
                Scene::passage(
                    "Checking for Traps",
                    "Pressure plates ring the treasure pile. Behind them, a narrow tunnel leads \
                     deeper into the castle walls.",
                    vec![
                        Choice::new("Jam the plates with the silver dagger", "castle_vault")
                            .requires("silver dagger"),
                        Choice::new("Take the treasure anyway", "castle_treasure_end"),
                        Choice::new("Go back to the hall", "castle_hall"),
                    ],
                ),
            ),
            (
                "castle_rest",
                Scene::passage(
                    "Dreams by the Fountain",
                    "You doze off to the sound of water and dream of a tower room where an old \
                     man waits for a visitor.",
                    vec![
                        Choice::new("Follow the dream into the castle", "castle_tower"),
                        Choice::new("Wake and explore the garden", "castle_garden"),
                    ],
                ),
            ),
            (
                "castle_magic_end",
                Scene::ending(
                    "WIZARD APPRENTICE ENDING",
                    "You become the wizard's apprentice and learn powerful magic. Years later, you \
                     become the castle's new protector, ensuring its magic is used for good.",
                ),
            ),
            (
                "castle_treasure_end",
                Scene::ending(
                    "TREASURE HUNTER ENDING",
                    "You take the ancient treasure and become wealthy beyond your wildest dreams. \
                     However, you sometimes wonder what other adventures you might have had in \
                     the magical castle.",
                ),
            ),
            (
                "castle_poison",
                Scene::ending(
                    "CURSED ENDING",
                    "The cursed food puts you into an eternal sleep. You become part of the \
                     castle's magic, forever dreaming of adventures you'll never have.",
                ),
            ),
            (
                "castle_song_end",
                Scene::ending(
                    "MINSTREL'S SONG ENDING",
                    "The minstrel tucks the flower into his collar and his lute finds its strings \
                     again. You travel the land together, and his songs make you famous.",
                ),
            ),
            (
                "castle_crown_end",
                Scene::ending(
                    "RIGHTFUL HEIR ENDING",
                    "The crown settles on your brow and the banners flare with color. The castle \
                     recognizes you as its lost heir, and its halls fill with light.",
                ),
            ),
            (
                "castle_restored_end",
                Scene::ending(
                    "CURSE BREAKER ENDING",
                    "Blue light floods every corridor. Sleepers rise from the dining hall, and the \
                     castle's people celebrate the stranger who woke them.",
                ),
            ),
            (
                "castle_pit_end",
                Scene::ending(
                    "FORGOTTEN DUNGEON ENDING",
                    "You tumble into a forgotten dungeon far below the castle. No one hears your \
                     calls, and the castle keeps one more secret.",
                ),
            ),
        ],
    )
}
