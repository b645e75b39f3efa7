use pf_core::{Choice, Difficulty, Scene, StoryGraph, StoryInfo};

pub(crate) fn story() -> StoryGraph {
    StoryGraph::new(
        "forest",
        StoryInfo::new(
            "The Dark Forest",
            "Survive the dangers of a haunted forest",
            Difficulty::Medium,
        ),
        [
            (
                "forest_start",
                Scene::passage(
                    "The Dark Forest",
                    "You enter a dense, dark forest where the trees seem to whisper secrets. \
                     Strange shadows move between the trunks, and the path splits in three \
                     directions.",
                    vec![
                        Choice::new("Take the left path", "forest_left"),
                        Choice::new("Take the right path", "forest_right"),
                        Choice::new("Go straight ahead", "forest_straight"),
                    ],
                ),
            ),
            (
                "forest_left",
                Scene::passage(
                    "The Moonlit Clearing",
                    "You emerge into a clearing bathed in moonlight. Ancient stone circles stand \
                     here, and you can hear wolves howling in the distance.",
                    vec![
                        Choice::new("Investigate the stone circles", "forest_stones"),
                        Choice::new("Hide and wait for the wolves to pass", "forest_hide"),
                        Choice::new("Climb a tree for safety", "forest_tree"),
                    ],
                ),
            ),
            (
                "forest_right",
                Scene::passage(
                    "The Witch's Hut",
                    "You discover a small hut with smoke coming from the chimney. Strange herbs \
                     hang from the eaves, and you smell something cooking inside.",
                    vec![
                        Choice::new("Knock on the door", "forest_witch"),
                        Choice::new("Peek through the window", "forest_window"),
                        Choice::new("Take some herbs and leave", "forest_herbs")
                            .grants("healing herbs"),
                    ],
                ),
            ),
            (
                "forest_straight",
                Scene::passage(
                    "The Deep Woods",
                    "The path leads deeper into the forest where the trees grow so thick that \
                     little light penetrates. You hear strange sounds all around you.",
                    vec![
                        Choice::new("Continue forward bravely", "forest_deep"),
                        Choice::new("Try to find another path", "forest_lost"),
                        Choice::new("Make a torch to light your way", "forest_torch"),
                    ],
                ),
            ),
            (
                "forest_stones",
                Scene::passage(
                    "Ancient Stone Circle",
                    "The stone circle begins to glow as you approach. Ancient magic fills the \
                     air, and you feel a powerful presence watching you.",
                    vec![
                        Choice::new("Step into the circle", "forest_magic"),
                        Choice::new("Speak to the presence", "forest_spirit"),
                        Choice::new("Back away slowly", "forest_left"),
                    ],
                ),
            ),
            (
                "forest_witch",
                Scene::passage(
                    "The Forest Witch",
                    "An old woman opens the door. She has kind eyes but a mysterious smile. \
                     'I've been expecting you,' she says.",
                    vec![
                        Choice::new("Ask for help", "forest_help"),
                        Choice::new("Ask about the forest", "forest_knowledge"),
                        Choice::new("Politely excuse yourself", "forest_right"),
                    ],
                ),
            ),
            (
                "forest_deep",
                Scene::passage(
                    "Heart of the Forest",
                    "You reach the heart of the forest where an ancient tree towers above all \
                     others. Its trunk is so wide that it would take dozens of people to encircle \
                     it.",
                    vec![
                        Choice::new("Touch the ancient tree", "forest_tree_spirit"),
                        Choice::new("Rest beneath the tree", "forest_rest"),
                        Choice::new("Look for a way around", "forest_around"),
                    ],
                ),
            ),
            (
                "forest_magic",
                Scene::passage(
                    "Forest Magic",
                    "The stone circle's magic transports you to safety outside the forest. You \
                     have gained the forest's blessing.",
                    vec![Choice::new("Accept the blessing", "forest_blessing_end")],
                ),
            ),
            (
                "forest_help",
                Scene::passage(
                    "The Witch's Aid",
                    "The witch gives you a magic potion and directions out of the forest. 'Use \
                     this wisely,' she warns.",
                    vec![
                        Choice::new("Thank her and follow the directions", "forest_escape_end")
                            .grants("magic potion"),
                        Choice::new("Ask for more help", "forest_greedy"),
                        Choice::new("Offer to help her in return", "forest_helper"),
                    ],
                ),
            ),
            (
                "forest_tree_spirit",
                Scene::passage(
                    "The Tree Spirit",
                    "Touching the tree awakens its ancient spirit. It offers to make you guardian \
                     of the forest.",
                    vec![
                        Choice::new("Accept the guardianship", "forest_guardian_end"),
                        Choice::new("Respectfully decline", "forest_decline"),
                        Choice::new("Ask what it means", "forest_explain"),
                    ],
                ),
            ),
            (
                "forest_lost",
                Scene::passage(
                    "Lost in the Woods",
                    "You wander deeper into the forest and become hopelessly lost. The trees all \
                     look the same.",
                    vec![
                        Choice::new("Try to retrace your steps", "forest_straight"),
                        Choice::new("Call for help", "forest_wolves")
                            .fatal("Your calls attract a pack of hungry wolves!"),
                        Choice::new("Climb a tree to get your bearings", "forest_tree"),
                    ],
                ),
            ),
            (
                "forest_hide",
                Scene::passage(
                    "Hiding in the Ferns",
                    "You crouch among the ferns as the pack lopes past, close enough to smell. \
                     The lead wolf pauses and sniffs the air.",
                    vec![
                        Choice::new("Stay perfectly still", "forest_stones"),
                        Choice::new("Make a run for it", "forest_wolves")
                            .fatal("The wolves hear you and give chase!"),
                        Choice::new("Creep back to the fork", "forest_start"),
                    ],
                ),
            ),
            (
                "forest_tree",
                Scene::passage(
                    "Up in the Branches",
                    "From high in the branches you can see the whole forest. An abandoned eagle's \
                     nest sits in a fork of the trunk, lined with golden feathers.",
                    vec![
                        Choice::new("Take a feather from the nest", "forest_tree")
                            .grants("eagle feather"),
                        Choice::new("Climb down toward the giant tree you spotted", "forest_deep"),
                        Choice::new("Climb back down into the clearing", "forest_left"),
                    ],
                ),
            ),
            (
                "forest_window",
                Scene::passage(
                    "Through the Window",
                    "Inside, the witch stirs a bubbling cauldron and hums to herself. Sweet \
                     purple fumes curl out through the cracked window.",
                    vec![
                        Choice::new("Knock on the door after all", "forest_witch"),
                        Choice::new("Keep watching", "forest_sleep_end")
                            .fatal("The fumes fill your lungs and your eyelids grow heavy."),
                        Choice::new("Slip away into the trees", "forest_straight"),
                    ],
                ),
            ),
            (
                "forest_herbs",
                Scene::passage(
                    "Stolen Herbs",
                    "You stuff a bundle of herbs into your pack and hurry away. Behind you, the \
                     hut door creaks open.",
                    vec![
                        Choice::new("Go back and apologize", "forest_witch"),
                        Choice::new("Run deeper into the woods", "forest_straight"),
                        Choice::new("Return to the fork", "forest_start"),
                    ],
                ),
            ),
            (
                "forest_torch",
                Scene::passage(
                    "Torchlight",
                    "Your torch pushes back the darkness and reveals arrows carved into the tree \
                     bark, pointing deeper into the forest.",
                    vec![
                        Choice::new("Follow the carved arrows", "forest_deep"),
                        Choice::new("Wave the torch at the shadows", "forest_lost"),
                        Choice::new("Return to the fork", "forest_start"),
                    ],
                ),
            ),
            (
                "forest_spirit",
                Scene::passage(
                    "The Watching Presence",
                    "A voice like wind through leaves answers you. 'Bring me a token of the sky, \
                     and the circle will carry you home.'",
                    vec![
                        Choice::new("Offer the eagle feather", "forest_magic")
                            .requires("eagle feather"),
                        Choice::new("Ask how to leave the forest", "forest_knowledge"),
                        Choice::new("Back away from the circle", "forest_left"),
                    ],
                ),
            ),
            (
                "forest_knowledge",
                Scene::passage(
                    "Forest Lore",
                    "You learn that the forest grows around one ancient tree, and that those who \
                     earn its trust are never lost again.",
                    vec![
                        Choice::new("Seek out the ancient tree", "forest_deep"),
                        Choice::new("Ask the witch for help", "forest_help"),
                        Choice::new("Head back to the fork", "forest_start"),
                    ],
                ),
            ),
            (
                "forest_rest",
                Scene::passage(
                    "Beneath the Ancient Tree",
                    "The moss between the roots is soft and warm. A deep drowsiness settles over \
                     you.",
                    vec![
                        Choice::new("Let yourself drift off", "forest_sleep_end")
                            .fatal("The roots close gently around you as you sleep."),
                        Choice::new("Get up and touch the trunk", "forest_tree_spirit"),
                        Choice::new("Shake it off and move on", "forest_around"),
                    ],
                ),
            ),
            (
                "forest_around",
                Scene::passage(
                    "The Thorn Thicket",
                    "The way around the great tree is choked with black thorns. Your arms are \
                     already bleeding from the first few steps.",
                    vec![
                        Choice::new("Treat your wounds with the healing herbs", "forest_escape_end")
                            .requires("healing herbs"),
                        Choice::new("Push through the thorns", "forest_lost")
                            .fatal("The poisoned thorns tear at you and you collapse."),
                        Choice::new("Go back to the ancient tree", "forest_deep"),
                    ],
                ),
            ),
            (
                "forest_greedy",
                Scene::passage(
                    "The Witch's Frown",
                    "The witch's smile fades. 'Greed is poorly rewarded in these woods,' she \
                     says, and the fire in the hearth turns green.",
                    vec![
                        Choice::new("Apologize", "forest_help"),
                        Choice::new("Demand more potions", "forest_sleep_end")
                            .fatal("The witch snaps her fingers and the world goes dark."),
                        Choice::new("Leave quickly", "forest_right"),
                    ],
                ),
            ),
            (
                "forest_helper",
                Scene::passage(
                    "A Helping Hand",
                    "You spend the afternoon gathering mushrooms and mending the witch's roof. \
                     She laughs more than she has in years.",
                    vec![
                        Choice::new("Stay on as her apprentice", "forest_friend_end"),
                        Choice::new("Accept a potion as thanks and leave", "forest_escape_end")
                            .grants("magic potion"),
                        Choice::new("Ask her about the forest", "forest_knowledge"),
                    ],
                ),
            ),
            (
                "forest_decline",
                Scene::passage(
                    "A Path of Light",
                    "The spirit bows its branches. A trail of glowing mushrooms appears at your \
                     feet, winding away through the trees.",
                    vec![
                        Choice::new("Follow the glowing path", "forest_escape_end"),
                        Choice::new("Change your mind", "forest_tree_spirit"),
                        Choice::new("Wander off on your own", "forest_lost"),
                    ],
                ),
            ),
            (
                "forest_explain",
                Scene::passage(
                    "The Guardian's Duty",
                    "'A guardian hears every creature and answers every lost traveler,' the \
                     spirit explains. 'It is a long life, and never a lonely one.'",
                    vec![
                        Choice::new("Accept the guardianship", "forest_guardian_end"),
                        Choice::new("Decline the offer", "forest_decline"),
                        Choice::new("Seek the witch's advice first", "forest_right"),
                    ],
                ),
            ),
            (
                "forest_blessing_end",
                Scene::ending(
                    "FOREST GUARDIAN ENDING",
                    "You become the forest's guardian, protecting it from harm and helping lost \
                     travelers find their way. The forest creatures become your allies.",
                ),
            ),
            (
                "forest_escape_end",
                Scene::ending(
                    "SAFE ESCAPE ENDING",
                    "With the witch's help, you safely escape the dark forest. You return home \
                     with magical herbs and incredible stories to tell.",
                ),
            ),
            (
                "forest_guardian_end",
                Scene::ending(
                    "FOREST GUARDIAN ENDING",
                    "You accept the role of forest guardian and gain the ability to communicate \
                     with all forest creatures. Your new life is filled with purpose and magic.",
                ),
            ),
            (
                "forest_wolves",
                Scene::ending(
                    "DEVOURED ENDING",
                    "The pack closes in from every side. The forest keeps your story, and the \
                     wolves sleep well tonight.",
                ),
            ),
            (
                "forest_sleep_end",
                Scene::ending(
                    "ENCHANTED SLEEP ENDING",
                    "You fall into an enchanted sleep. Moss grows over you, birds nest in your \
                     hair, and travelers whisper about the sleeper of the dark forest.",
                ),
            ),
            (
                "forest_friend_end",
                Scene::ending(
                    "WITCH'S FRIEND ENDING",
                    "You stay with the witch and learn the secrets of every herb in the forest. \
                     Lost travelers who knock on the hut door now find two kind faces.",
                ),
            ),
        ],
    )
}
