use pf_core::{Choice, Difficulty, Scene, StoryGraph, StoryInfo};

pub(crate) fn story() -> StoryGraph {
    StoryGraph::new(
        "space",
        StoryInfo::new(
            "Space Station Alpha",
            "Sci-fi thriller on an abandoned space station",
            Difficulty::Hard,
        ),
        [
            (
                "space_start",
                Scene::passage(
                    "Space Station Alpha",
                    "You dock with the seemingly abandoned Space Station Alpha. Emergency lights \
                     flicker in the corridors, and you hear strange noises echoing through the \
                     metal halls.",
                    vec![
                        Choice::new("Head to the command center", "space_command"),
                        Choice::new("Check the crew quarters", "space_quarters"),
                        Choice::new("Investigate the engine room", "space_engine"),
                    ],
                ),
            ),
            (
                "space_command",
                Scene::passage(
                    "Command Center",
                    "The command center is dark except for a few blinking consoles. Warning \
                     messages flash on the screens about a containment breach.",
                    vec![
                        Choice::new("Access the main computer", "space_computer"),
                        Choice::new("Check the communication system", "space_comms"),
                        Choice::new("Review the security footage", "space_security"),
                    ],
                ),
            ),
            (
                "space_quarters",
                Scene::passage(
                    "Crew Quarters",
                    "The crew quarters are in disarray. Personal belongings are scattered \
                     everywhere, and some doors are sealed with emergency locks.",
                    vec![
                        Choice::new("Search the unsealed rooms", "space_search"),
                        Choice::new("Try to open the sealed doors", "space_sealed"),
                        Choice::new("Check the crew logs", "space_logs"),
                    ],
                ),
            ),
            (
                "space_engine",
                Scene::passage(
                    "Engine Room",
                    "The engine room hums with power, but something is wrong. Strange organic \
                     growth covers parts of the machinery.",
                    vec![
                        Choice::new("Examine the organic growth", "space_organism"),
                        Choice::new("Check the engine diagnostics", "space_diagnostics"),
                        Choice::new("Try to clean the growth", "space_clean"),
                    ],
                ),
            ),
            (
                "space_computer",
                Scene::passage(
                    "Main Computer",
                    "The computer reveals that an alien organism was brought aboard for study. It \
                     has since escaped and infected the crew.",
                    vec![
                        Choice::new("Access quarantine protocols", "space_quarantine"),
                        Choice::new("Search for survivor locations", "space_survivors"),
                        Choice::new("Initiate self-destruct sequence", "space_destruct"),
                    ],
                ),
            ),
            (
                "space_comms",
                Scene::passage(
                    "Communications",
                    "You manage to establish contact with Earth. They're sending a rescue ship, \
                     but it won't arrive for 48 hours.",
                    vec![
                        Choice::new("Request immediate evacuation", "space_evacuation"),
                        Choice::new("Report the alien threat", "space_report"),
                        Choice::new("Ask for instructions", "space_instructions"),
                    ],
                ),
            ),
            (
                "space_security",
                Scene::passage(
                    "Security Footage",
                    "The security footage shows the crew being attacked by strange alien \
                     creatures. The creatures seem to be growing and multiplying.",
                    vec![
                        Choice::new("Track the creatures' movements", "space_track"),
                        Choice::new("Look for survivors", "space_survivors"),
                        Choice::new("Find the source of the outbreak", "space_source"),
                    ],
                ),
            ),
            (
                "space_organism",
                Scene::passage(
                    "Alien Organism",
                    "The organic growth pulses with an eerie light. As you approach, it seems to \
                     react to your presence.",
                    vec![
                        Choice::new("Take a sample for analysis", "space_sample")
                            .grants("alien sample"),
                        Choice::new("Back away slowly", "space_engine"),
                        Choice::new("Try to communicate with it", "space_communicate"),
                    ],
                ),
            ),
            (
                "space_quarantine",
                Scene::passage(
                    "Quarantine Protocols",
                    "The quarantine system is still active. You can seal off sections of the \
                     station or purge contaminated areas.",
                    vec![
                        Choice::new("Seal off the infected areas", "space_seal"),
                        Choice::new("Purge the contaminated sections", "space_purge"),
                        Choice::new("Override the quarantine", "space_override"),
                    ],
                ),
            ),
            (
                "space_survivors",
                Scene::passage(
                    "Survivor Signal",
                    "You detect a faint life sign in the medical bay. Someone might still be \
                     alive!",
                    vec![
                        Choice::new("Rush to the medical bay", "space_medical"),
                        Choice::new("Proceed cautiously", "space_cautious"),
                        Choice::new("Try to contact them first", "space_contact"),
                    ],
                ),
            ),
            (
                "space_medical",
                Scene::passage(
                    "Medical Bay",
                    "You find Dr. Sarah Chen, the station's chief medical officer, barricaded in \
                     the medical bay. She's injured but alive.",
                    vec![
                        Choice::new("Help treat her injuries", "space_treat"),
                        Choice::new("Ask about the alien organism", "space_ask"),
                        Choice::new("Plan an escape together", "space_escape"),
                    ],
                ),
            ),
            (
                "space_treat",
                Scene::passage(
                    "Medical Treatment",
                    "Dr. Chen explains that the alien organism is highly aggressive and spreads \
                     rapidly. She has developed a potential cure.",
                    vec![
                        Choice::new("Help her complete the cure", "space_cure"),
                        Choice::new("Focus on escaping instead", "space_escape"),
                        Choice::new("Ask about the cure's risks", "space_risks"),
                    ],
                ),
            ),
            (
                "space_cure",
                Scene::passage(
                    "The Cure",
                    "Working together, you help Dr. Chen complete the cure. It can be dispersed \
                     through the station's air system.",
                    vec![
                        Choice::new("Deploy the cure immediately", "space_deploy"),
                        Choice::new("Test it first", "space_test"),
                        Choice::new("Evacuate and let Earth handle it", "space_evacuate"),
                    ],
                ),
            ),
            (
                "space_deploy",
                Scene::passage(
                    "Deploying the Cure",
                    "You deploy the cure through the station's air system. The alien organisms \
                     begin to retreat and die.",
                    vec![Choice::new("Check on the station's status", "space_hero_end")],
                ),
            ),
            (
                "space_escape",
                Scene::passage(
                    "Escape Plan",
                    "You and Dr. Chen make it to the escape pods. Earth's rescue ship arrives \
                     just as you launch.",
                    vec![Choice::new("Launch the escape pod", "space_survivor_end")],
                ),
            ),
            (
                "space_destruct",
                Scene::passage(
                    "Self-Destruct",
                    "You initiate the self-destruct sequence to prevent the alien organism from \
                     reaching Earth.",
                    vec![
                        Choice::new("Evacuate immediately", "space_sacrifice_end"),
                        Choice::new("Try to cancel the sequence", "space_cancel"),
                    ],
                ),
            ),
            (
                "space_communicate",
                Scene::passage(
                    "Communication Attempt",
                    "The alien organism seems to respond to your attempts at communication. It's \
                     trying to tell you something.",
                    vec![
                        Choice::new("Try to understand its message", "space_understand"),
                        Choice::new("Back away carefully", "space_engine"),
                        Choice::new("Offer it something", "space_offer"),
                    ],
                ),
            ),
            (
                "space_understand",
                Scene::passage(
                    "Alien Understanding",
                    "You realize the organism isn't hostile - it's trying to return home. It was \
                     brought here against its will.",
                    vec![
                        Choice::new("Help it return home", "space_peace_end"),
                        Choice::new("Try to contain it safely", "space_contain"),
                        Choice::new("Report this to Earth", "space_report_discovery"),
                    ],
                ),
            ),
            (
                "space_search",
                Scene::passage(
                    "Unsealed Cabins",
                    "Most cabins were abandoned in a hurry. In the commander's bunk you find a \
                     keycard still clipped to a uniform jacket.",
                    vec![
                        Choice::new("Take the command keycard", "space_quarters")
                            .grants("command keycard"),
                        Choice::new("Read the diary on the desk", "space_logs"),
                        Choice::new("Head to the command center", "space_command"),
                    ],
                ),
            ),
            (
                "space_sealed",
                Scene::passage(
                    "Sealed Doors",
                    "The emergency locks demand command authorization. Something scrapes against \
                     the other side of the nearest door.",
                    vec![
                        Choice::new("Swipe the command keycard", "space_medical")
                            .requires("command keycard"),
                        Choice::new("Force the door open", "space_infected_end")
                            .fatal("Something was waiting behind the door."),
                        Choice::new("Leave the doors alone", "space_quarters"),
                    ],
                ),
            ),
            (
                "space_logs",
                Scene::passage(
                    "Crew Logs",
                    "The last entries mention a specimen brought aboard for Dr. Chen's research, \
                     then a string of panicked reports from the engine room.",
                    vec![
                        Choice::new("Search for survivor locations", "space_survivors"),
                        Choice::new("Head to the engine room", "space_engine"),
                        Choice::new("Go to the command center", "space_command"),
                    ],
                ),
            ),
            (
                "space_diagnostics",
                Scene::passage(
                    "Engine Diagnostics",
                    "The readings are alarming. The growth is feeding on the reactor, and the \
                     station's orbit is slowly decaying.",
                    vec![
                        Choice::new("Shut down the reactor", "space_void_end")
                            .fatal("Without power, life support fails within minutes."),
                        Choice::new("Reroute power to life support", "space_engine"),
                        Choice::new("Report the readings to command", "space_command"),
                    ],
                ),
            ),
            (
                "space_clean",
                Scene::passage(
                    "Scrubbing the Growth",
                    "The growth shudders under your scraper and releases a cloud of glittering \
                     spores.",
                    vec![
                        Choice::new("Keep scrubbing", "space_infected_end")
                            .fatal("The spores fill your lungs."),
                        Choice::new("Bottle some of the spores", "space_sample")
                            .grants("alien sample"),
                        Choice::new("Retreat and seal your suit", "space_engine"),
                    ],
                ),
            ),
            (
                "space_evacuation",
                Scene::passage(
                    "Evacuation Request",
                    "Mission control refuses to risk a second ship before the first arrives. They \
                     tell you to hold out in the shuttle bay.",
                    vec![
                        Choice::new("Wait in the shuttle bay", "space_rescue_end"),
                        Choice::new("Look for survivors first", "space_survivors"),
                        Choice::new("Argue with mission control", "space_comms"),
                    ],
                ),
            ),
            (
                "space_report",
                Scene::passage(
                    "Threat Report",
                    "Earth listens in silence. Then the orders come: the organism must not reach \
                     Earth under any circumstances.",
                    vec![
                        Choice::new("Follow orders and arm the self-destruct", "space_destruct"),
                        Choice::new("Ask for instructions", "space_instructions"),
                        Choice::new("Search for survivors", "space_survivors"),
                    ],
                ),
            ),
            (
                "space_instructions",
                Scene::passage(
                    "Mission Control",
                    "'Find Dr. Chen,' mission control says. 'If anyone can stop this, she can. \
                     Otherwise sit tight until the rescue ship docks.'",
                    vec![
                        Choice::new("Head to the medical bay", "space_medical"),
                        Choice::new("Access the main computer", "space_computer"),
                        Choice::new("Sit tight and wait", "space_rescue_end"),
                    ],
                ),
            ),
            (
                "space_track",
                Scene::passage(
                    "Tracking the Creatures",
                    "The motion sensors show the creatures converging on the engine room, drawn \
                     to the warmth of the reactor.",
                    vec![
                        Choice::new("Follow them to the engine room", "space_engine"),
                        Choice::new("Seal the corridors behind them", "space_quarantine"),
                        Choice::new("Look for survivors while they're busy", "space_survivors"),
                    ],
                ),
            ),
            (
                "space_source",
                Scene::passage(
                    "Xenobiology Lab",
                    "The outbreak began here. A containment tank lies shattered on the floor, \
                     and a trail of slime leads into the ventilation shaft.",
                    vec![
                        Choice::new("Scrape a sample from the broken tank", "space_sample")
                            .grants("alien sample"),
                        Choice::new("Access the lab computer", "space_computer"),
                        Choice::new("Climb into the ventilation shaft", "space_infected_end")
                            .fatal("A creature drops onto you from the darkness."),
                    ],
                ),
            ),
            (
                "space_sample",
                Scene::passage(
                    "Sample Analysis",
                    "Under the scanner the sample reacts to every frequency of light. It is \
                     unlike anything in the medical databases.",
                    vec![
                        Choice::new("Bring the sample to the medical bay", "space_medical"),
                        Choice::new("Study it until the rescue ship arrives", "space_science_end"),
                        Choice::new("Return to the engine room", "space_engine"),
                    ],
                ),
            ),
            (
                "space_seal",
                Scene::passage(
                    "Sections Sealed",
                    "Bulkheads slam shut across the station. The infected decks are isolated, and \
                     the command deck is safe for now.",
                    vec![
                        Choice::new("Wait for rescue on the command deck", "space_rescue_end"),
                        Choice::new("Check the survivor signal", "space_survivors"),
                        Choice::new("Return to the main computer", "space_computer"),
                    ],
                ),
            ),
            (
                "space_purge",
                Scene::passage(
                    "Purge Sequence",
                    "The console asks for confirmation before venting the contaminated sections \
                     into space.",
                    vec![
                        Choice::new("Confirm the purge", "space_void_end")
                            .fatal("You were standing in a contaminated section."),
                        Choice::new("Cancel the purge", "space_quarantine"),
                    ],
                ),
            ),
            (
                "space_override",
                Scene::passage(
                    "Quarantine Override",
                    "Every door on the station slides open at once. Somewhere below, something \
                     shrieks.",
                    vec![
                        Choice::new("Run for the medical bay", "space_medical"),
                        Choice::new("Hide under the command console", "space_infected_end")
                            .fatal("The creatures find you."),
                        Choice::new("Re-engage the quarantine", "space_quarantine"),
                    ],
                ),
            ),
            (
                "space_cautious",
                Scene::passage(
                    "Careful Approach",
                    "You creep along the corridor and spot a tripwire rigged across the medical \
                     bay entrance. Someone is clearly still in there.",
                    vec![
                        Choice::new("Step over the wire and go in", "space_medical"),
                        Choice::new("Call out over the intercom", "space_contact"),
                    ],
                ),
            ),
            (
                "space_contact",
                Scene::passage(
                    "Intercom",
                    "A tired voice answers. 'This is Dr. Chen. Keep your voice down, they hunt by \
                     sound.'",
                    vec![
                        Choice::new("Ask her to let you in", "space_medical"),
                        Choice::new("Ask about the organism", "space_ask"),
                    ],
                ),
            ),
            (
                "space_ask",
                Scene::passage(
                    "Dr. Chen's Research",
                    "'It's not an animal,' Dr. Chen says. 'It's intelligent, and I think it's \
                     frightened. But it is killing my crew.'",
                    vec![
                        Choice::new("Ask about a cure", "space_treat"),
                        Choice::new("Try to reach the organism yourself", "space_communicate"),
                        Choice::new("Plan an escape together", "space_escape"),
                    ],
                ),
            ),
            (
                "space_risks",
                Scene::passage(
                    "The Cure's Risks",
                    "'Without a live sample to calibrate it, the cure could fail,' Dr. Chen \
                     warns. 'Or worse.'",
                    vec![
                        Choice::new("Hand over the alien sample", "space_deploy")
                            .requires("alien sample"),
                        Choice::new("Help her finish the cure without it", "space_cure"),
                        Choice::new("Focus on escaping instead", "space_escape"),
                    ],
                ),
            ),
            (
                "space_test",
                Scene::passage(
                    "Testing the Cure",
                    "Dr. Chen prepares a syringe. 'We need something to test it on,' she says, \
                     looking at you.",
                    vec![
                        Choice::new("Test it on the alien sample", "space_deploy")
                            .requires("alien sample"),
                        Choice::new("Test it on yourself", "space_infected_end")
                            .fatal("The untested cure burns through your veins."),
                        Choice::new("Give up and evacuate", "space_evacuate"),
                    ],
                ),
            ),
            (
                "space_evacuate",
                Scene::passage(
                    "Abandon Station",
                    "You and Dr. Chen seal the medical bay behind you and make for the docking \
                     ring.",
                    vec![
                        Choice::new("Launch an escape pod", "space_survivor_end"),
                        Choice::new("Wait for Earth's ship at the docking ring", "space_rescue_end"),
                    ],
                ),
            ),
            (
                "space_cancel",
                Scene::passage(
                    "Cancel Sequence",
                    "The console flashes red. 'Abort code required,' it says. Twenty seconds \
                     remain.",
                    vec![
                        Choice::new("Enter the commander's abort code", "space_computer")
                            .requires("command keycard"),
                        Choice::new("Smash the console", "space_sacrifice_end")
                            .fatal("The countdown cannot be stopped."),
                    ],
                ),
            ),
            (
                "space_offer",
                Scene::passage(
                    "An Offering",
                    "The organism stills and waits. Its glow dims, as if it is holding its \
                     breath.",
                    vec![
                        Choice::new("Return the alien sample", "space_understand")
                            .requires("alien sample"),
                        Choice::new("Offer your hand", "space_infected_end")
                            .fatal("The organism engulfs your arm."),
                        Choice::new("Back away", "space_engine"),
                    ],
                ),
            ),
            (
                "space_contain",
                Scene::passage(
                    "Containment",
                    "A stasis pod in the lab could hold the organism safely, if it goes in \
                     willingly.",
                    vec![
                        Choice::new("Coax it into the stasis pod", "space_science_end"),
                        Choice::new("Help it return home after all", "space_peace_end"),
                    ],
                ),
            ),
            (
                "space_report_discovery",
                Scene::passage(
                    "First Contact Report",
                    "Earth is fascinated, then eager. They want the organism brought home intact \
                     for military study.",
                    vec![
                        Choice::new("Refuse and help it home", "space_peace_end"),
                        Choice::new("Comply and contain it", "space_contain"),
                        Choice::new("Destroy the station instead", "space_destruct"),
                    ],
                ),
            ),
            (
                "space_hero_end",
                Scene::ending(
                    "STATION HERO ENDING",
                    "You successfully deploy the cure and save Space Station Alpha. The station \
                     is decontaminated and you become a hero. Earth's scientists study your data \
                     to prevent future outbreaks.",
                ),
            ),
            (
                "space_survivor_end",
                Scene::ending(
                    "SURVIVOR ENDING",
                    "You and Dr. Chen escape the station and are rescued by Earth's ship. The \
                     station is later destroyed by military forces, but you both survive to tell \
                     the tale.",
                ),
            ),
            (
                "space_sacrifice_end",
                Scene::ending(
                    "SACRIFICE ENDING",
                    "You sacrifice yourself to destroy the station and prevent the alien threat \
                     from reaching Earth. You are remembered as a hero who saved humanity.",
                ),
            ),
            (
                "space_peace_end",
                Scene::ending(
                    "PEACEFUL RESOLUTION ENDING",
                    "You help the alien organism return to its home dimension. It restores the \
                     infected crew members and leaves peacefully. You've made first contact and \
                     established peaceful relations with an alien species.",
                ),
            ),
            (
                "space_infected_end",
                Scene::ending(
                    "ASSIMILATED ENDING",
                    "The organism spreads through you in seconds. Your thoughts dissolve into a \
                     vast, alien chorus drifting between the stars.",
                ),
            ),
            (
                "space_rescue_end",
                Scene::ending(
                    "RESCUE ENDING",
                    "Forty-eight long hours later, Earth's ship docks. You walk out of the \
                     airlock alive, though you never speak of what you heard in the walls.",
                ),
            ),
            (
                "space_void_end",
                Scene::ending(
                    "LOST IN THE VOID ENDING",
                    "The station goes dark and silent. Space Station Alpha drifts out of orbit, \
                     carrying you into the endless void.",
                ),
            ),
            (
                "space_science_end",
                Scene::ending(
                    "XENOBIOLOGIST ENDING",
                    "Your research on the organism changes science forever. You spend the rest \
                     of your career unraveling the secrets of the first alien life ever found.",
                ),
            ),
        ],
    )
}
