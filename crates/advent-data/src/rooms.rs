//! Room descriptions, indexed by room number

/// Long and short text for a room
#[derive(Debug, Clone, Copy)]
pub struct Room {
    pub long: &'static [&'static str],
    /// Empty when the room always gets its long description
    pub short: &'static [&'static str],
}

impl Room {
    pub const fn new(long: &'static [&'static str], short: &'static [&'static str]) -> Self {
        Self { long, short }
    }

    pub const fn long(long: &'static [&'static str]) -> Self {
        Self { long, short: &[] }
    }

    /// Rooms the player is only ever bounced through print nothing
    pub const fn silent() -> Self {
        Self {
            long: &[],
            short: &[],
        }
    }

    pub fn text(&self, visited: bool) -> &'static [&'static str] {
        if visited && !self.short.is_empty() {
            self.short
        } else {
            self.long
        }
    }
}

const ALIKE: Room = Room::long(&["You are in a maze of twisty little passages, all alike."]);
const DEAD_END: Room = Room::long(&["Dead end"]);
const LOW_WIDE_CRAWL: Room = Room::long(&[
    "You have crawled through a very low wide passage parallel to and north",
    "of the Hall of Mists.",
]);
const SECRET_CANYON: Room = Room::long(&["You are in a secret canyon which exits to the north and east."]);

pub static ROOMS: &[Room] = &[
    // 0: limbo
    Room::silent(),
    // 1
    Room::new(
        &[
            "You are standing at the end of a road before a small brick building.",
            "Around you is a forest.  A small stream flows out of the building and",
            "down a gully.",
        ],
        &["You're at end of road again."],
    ),
    // 2
    Room::new(
        &[
            "You have walked up a hill, still in the forest.  The road slopes back",
            "down the other side of the hill.  There is a building in the distance.",
        ],
        &["You're at hill in road."],
    ),
    // 3
    Room::new(
        &["You are inside a building, a well house for a large spring."],
        &["You're inside building."],
    ),
    // 4
    Room::new(
        &[
            "You are in a valley in the forest beside a stream tumbling along a",
            "rocky bed.",
        ],
        &["You're in valley."],
    ),
    // 5
    Room::new(
        &["You are in open forest, with a deep valley to one side."],
        &["You're in forest."],
    ),
    // 6
    Room::new(
        &["You are in open forest near both a valley and a road."],
        &["You're in forest."],
    ),
    // 7
    Room::new(
        &[
            "At your feet all the water of the stream splashes into a 2-inch slit",
            "in the rock.  Downstream the streambed is bare rock.",
        ],
        &["You're at slit in streambed."],
    ),
    // 8
    Room::new(
        &[
            "You are in a 20-foot depression floored with bare dirt.  Set into the",
            "dirt is a strong steel grate mounted in concrete.  A dry streambed",
            "leads into the depression.",
        ],
        &["You're outside grate."],
    ),
    // 9
    Room::new(
        &[
            "You are in a small chamber beneath a 3x3 steel grate to the surface.",
            "A low crawl over cobbles leads inward to the west.",
        ],
        &["You're below the grate."],
    ),
    // 10
    Room::new(
        &[
            "You are crawling over cobbles in a low passage.  There is a dim light",
            "at the east end of the passage.",
        ],
        &["You're in cobble crawl."],
    ),
    // 11
    Room::new(
        &[
            "You are in a debris room filled with stuff washed in from the surface.",
            "A low wide passage with cobbles becomes plugged with mud and debris",
            "here, but an awkward canyon leads upward and west.  A note on the wall",
            "says \"Magic word XYZZY\".",
        ],
        &["You're in debris room."],
    ),
    // 12
    Room::long(&["You are in an awkward sloping east/west canyon."]),
    // 13
    Room::new(
        &[
            "You are in a splendid chamber thirty feet high.  The walls are frozen",
            "rivers of orange stone.  An awkward canyon and a good passage exit",
            "from east and west sides of the chamber.",
        ],
        &["You're in bird chamber."],
    ),
    // 14
    Room::new(
        &[
            "At your feet is a small pit breathing traces of white mist.  An east",
            "passage ends here except for a small crack leading on.",
        ],
        &["You're at top of small pit."],
    ),
    // 15
    Room::new(
        &[
            "You are at one end of a vast hall stretching forward out of sight to",
            "the west.  There are openings to either side.  Nearby, a wide stone",
            "staircase leads downward.  The hall is filled with wisps of white mist",
            "swaying to and fro almost as if alive.  A cold wind blows up the",
            "staircase.  There is a passage at the top of a dome behind you.",
        ],
        &["You're in Hall of Mists."],
    ),
    // 16
    Room::long(&["The crack is far too small for you to follow."]),
    // 17
    Room::new(
        &[
            "You are on the east bank of a fissure slicing clear across the hall.",
            "The mist is quite thick here, and the fissure is too wide to jump.",
        ],
        &["You're on east bank of fissure."],
    ),
    // 18
    Room::new(
        &[
            "This is a low room with a crude note on the wall.  The note says,",
            "\"You won't get it up the steps\".",
        ],
        &["You're in nugget of gold room."],
    ),
    // 19
    Room::new(
        &[
            "You are in the Hall of the Mountain King, with passages off in all",
            "directions.",
        ],
        &["You're in Hall of Mt King."],
    ),
    // 20
    Room::long(&["You are at the bottom of the pit with a broken neck."]),
    // 21
    Room::long(&["You didn't make it."]),
    // 22
    Room::long(&["The dome is unclimbable."]),
    // 23
    Room::new(
        &[
            "You are at the west end of the Twopit Room.  There is a large hole in",
            "the wall above the pit at this end of the room.",
        ],
        &["You're at west end of Twopit Room."],
    ),
    // 24
    Room::new(
        &[
            "You are at the bottom of the eastern pit in the Twopit Room.  There is",
            "a small pool of oil in one corner of the pit.",
        ],
        &["You're in east pit."],
    ),
    // 25
    Room::new(
        &[
            "You are at the bottom of the western pit in the Twopit Room.  There is",
            "a large hole in the wall about 25 feet above you.",
        ],
        &["You're in west pit."],
    ),
    // 26
    Room::long(&["You clamber up the plant and scurry through the hole at the top."]),
    // 27
    Room::long(&["You are on the west side of the fissure in the Hall of Mists."]),
    // 28
    Room::long(&[
        "You are in a low N/S passage at a hole in the floor.  The hole goes",
        "down to an E/W passage.",
    ]),
    // 29
    Room::long(&["You are in the south side chamber."]),
    // 30
    Room::long(&[
        "You are in the west side chamber of the Hall of the Mountain King.",
        "A passage continues west and up here.",
    ]),
    // 31
    Room::silent(),
    // 32
    Room::long(&["You can't get by the snake."]),
    // 33
    Room::new(
        &[
            "You are in a large room, with a passage to the south, a passage to the",
            "west, and a wall of broken rock to the east.  There is a large \"Y2\" on",
            "a rock in the room's center.",
        ],
        &["You're at \"Y2\"."],
    ),
    // 34
    Room::long(&["You are in a jumble of rock, with cracks everywhere."]),
    // 35
    Room::new(
        &[
            "You're at a low window overlooking a huge pit, which extends up out of",
            "sight.  A floor is indistinctly visible over 50 feet below.  Traces of",
            "white mist cover the floor of the pit, becoming thicker to the right.",
            "Marks in the dust around the window would seem to indicate that",
            "someone has been here recently.  Directly across the pit from you and",
            "25 feet away there is a similar window looking into a lighted room.  A",
            "shadowy figure can be seen there peering back at you.",
        ],
        &["You're at window on pit."],
    ),
    // 36
    Room::new(
        &[
            "You are in a dirty broken passage.  To the east is a crawl.  To the",
            "west is a large passage.  Above you is a hole to another passage.",
        ],
        &["You're in dirty passage."],
    ),
    // 37
    Room::long(&[
        "You are on the brink of a small clean climbable pit.  A crawl leads",
        "west.",
    ]),
    // 38
    Room::long(&[
        "You are in the bottom of a small pit with a little stream, which",
        "enters and exits through tiny slits.",
    ]),
    // 39
    Room::new(
        &[
            "You are in a large room full of dusty rocks.  There is a big hole in",
            "the floor.  There are cracks everywhere, and a passage leading east.",
        ],
        &["You're in dusty rock room."],
    ),
    // 40
    LOW_WIDE_CRAWL,
    // 41
    Room::new(
        &[
            "You are at the west end of Hall of Mists.  A low wide crawl continues",
            "west and another goes north.  To the south is a little passage 6 feet",
            "off the floor.",
        ],
        &["You're at west end of Hall of Mists."],
    ),
    // 42..=45
    ALIKE,
    ALIKE,
    ALIKE,
    ALIKE,
    // 46..=48
    DEAD_END,
    DEAD_END,
    DEAD_END,
    // 49..=53
    ALIKE,
    ALIKE,
    ALIKE,
    ALIKE,
    ALIKE,
    // 54
    DEAD_END,
    // 55
    ALIKE,
    // 56
    DEAD_END,
    // 57
    Room::new(
        &[
            "You are on the brink of a thirty foot pit with a massive orange column",
            "down one wall.  You could climb down here but you could not get back",
            "up.  The maze continues at this level.",
        ],
        &["You're at brink of pit."],
    ),
    // 58
    DEAD_END,
    // 59
    LOW_WIDE_CRAWL,
    // 60
    Room::new(
        &[
            "You are at the east end of a very long hall apparently without side",
            "chambers.  To the east a low wide crawl slants up.  To the north a",
            "round two foot hole slants down.",
        ],
        &["You're at east end of long hall."],
    ),
    // 61
    Room::new(
        &[
            "You are at the west end of a very long featureless hall.  The hall",
            "joins up with a narrow north/south passage.",
        ],
        &["You're at west end of long hall."],
    ),
    // 62
    Room::long(&["You are at a crossover of a high N/S passage and a low E/W one."]),
    // 63
    DEAD_END,
    // 64
    Room::new(
        &[
            "You are at a complex junction.  A low hands and knees passage from the",
            "north joins a higher crawl from the east to make a walking passage",
            "going west.  There is also a large room above.  The air is damp here.",
        ],
        &["You're at complex junction."],
    ),
    // 65
    Room::long(&[
        "You are in Bedquilt, a long east/west passage with holes everywhere.",
        "To explore at random select north, south, up, or down.",
    ]),
    // 66
    Room::new(
        &[
            "You are in a room whose walls resemble swiss cheese.  Obvious passages",
            "go west, east, NE, and NW.  Part of the room is occupied by a large",
            "bedrock block.",
        ],
        &["You're in Swiss cheese room."],
    ),
    // 67
    Room::new(
        &[
            "You are at the east end of the Twopit Room.  The floor here is",
            "littered with thin rock slabs, which make it easy to descend the pits.",
            "There is a path here bypassing the pits to connect passages from east",
            "and west.  There are holes all over, but the only big one is on the",
            "wall directly over the west pit where you can't get to it.",
        ],
        &["You're at east end of Twopit Room."],
    ),
    // 68
    Room::new(
        &[
            "You are in a large low circular chamber whose floor is an immense slab",
            "fallen from the ceiling (Slab Room).  East and west there once were",
            "large passages, but they are now filled with boulders.  Low small",
            "passages go north and south, and the south one quickly bends west",
            "around the boulders.",
        ],
        &["You're in Slab Room."],
    ),
    // 69
    Room::long(&["You are in a secret N/S canyon above a large room."]),
    // 70
    Room::long(&["You are in a secret N/S canyon above a sizable passage."]),
    // 71
    Room::new(
        &[
            "You are in a secret canyon at a junction of three canyons, bearing",
            "north, south, and SE.  The north one is as tall as the other two",
            "combined.",
        ],
        &["You're at junction of three secret canyons."],
    ),
    // 72
    Room::long(&["You are in a large low room.  Crawls lead north, SE, and SW."]),
    // 73
    Room::long(&["Dead end crawl."]),
    // 74
    Room::new(
        &[
            "You are in a secret canyon which here runs E/W.  It crosses over a",
            "very tight canyon 15 feet below.  If you go down you may not be able",
            "to get back up.",
        ],
        &["You're in secret E/W canyon above tight canyon."],
    ),
    // 75
    Room::long(&["You are at a wide place in a very tight N/S canyon."]),
    // 76
    Room::long(&["The canyon here becomes too tight to go further south."]),
    // 77
    Room::long(&[
        "You are in a tall E/W canyon.  A low tight crawl goes 3 feet north and",
        "seems to open up.",
    ]),
    // 78
    Room::long(&["The canyon runs into a mass of boulders -- dead end."]),
    // 79
    Room::long(&[
        "The stream flows out through a pair of 1 foot diameter sewer pipes.",
        "It would be advisable to use the exit.",
    ]),
    // 80
    ALIKE,
    // 81, 82
    DEAD_END,
    DEAD_END,
    // 83..=85
    ALIKE,
    ALIKE,
    ALIKE,
    // 86
    DEAD_END,
    // 87
    ALIKE,
    // 88
    Room::new(
        &[
            "You are in a long, narrow corridor stretching out of sight to the",
            "west.  At the eastern end is a hole through which you can see a",
            "profusion of leaves.",
        ],
        &["You're in narrow corridor."],
    ),
    // 89
    Room::long(&["There is nothing here to climb.  Use \"up\" or \"out\" to leave the pit."]),
    // 90
    Room::long(&["You have climbed up the plant and out of the pit."]),
    // 91
    Room::new(
        &[
            "You are at the top of a steep incline above a large room.  You could",
            "climb down here, but you would not be able to climb up.  There is a",
            "passage leading back to the north.",
        ],
        &["You're at steep incline above large room."],
    ),
    // 92
    Room::new(
        &[
            "You are in the Giant Room.  The ceiling here is too high up for your",
            "lamp to show it.  Cavernous passages lead east, north, and south.  On",
            "the west wall is scrawled the inscription, \"FEE FIE FOE FOO\" [sic].",
        ],
        &["You're in Giant Room."],
    ),
    // 93
    Room::long(&["The passage here is blocked by a recent cave-in."]),
    // 94
    Room::long(&["You are at one end of an immense north/south passage."]),
    // 95
    Room::new(
        &[
            "You are in a magnificent cavern with a rushing stream, which cascades",
            "over a sparkling waterfall into a roaring whirlpool which disappears",
            "through a hole in the floor.  Passages exit to the south and west.",
        ],
        &["You're in cavern with waterfall."],
    ),
    // 96
    Room::new(
        &[
            "You are in the Soft Room.  The walls are covered with heavy curtains,",
            "the floor with a thick pile carpet.  Moss covers the ceiling.",
        ],
        &["You're in Soft Room."],
    ),
    // 97
    Room::new(
        &[
            "This is the Oriental Room.  Ancient oriental cave drawings cover the",
            "walls.  A gently sloping passage leads upward to the north, another",
            "passage leads SE, and a hands and knees crawl leads west.",
        ],
        &["You're in Oriental Room."],
    ),
    // 98
    Room::new(
        &[
            "You are following a wide path around the outer edge of a large",
            "cavern.  Far below, through a heavy white mist, strange splashing",
            "noises can be heard.  The mist rises up through a fissure in the",
            "ceiling.  The path exits to the south and west.",
        ],
        &["You're in misty cavern."],
    ),
    // 99
    Room::new(
        &[
            "You are in an alcove.  A small NW path seems to widen after a short",
            "distance.  An extremely tight tunnel leads east.  It looks like a very",
            "tight squeeze.  An eerie light can be seen at the other end.",
        ],
        &["You're in alcove."],
    ),
    // 100
    Room::new(
        &[
            "You're in a small chamber lit by an eerie green light.  An extremely",
            "narrow tunnel exits to the west.  A dark corridor leads NE.",
        ],
        &["You're in Plover Room."],
    ),
    // 101
    Room::new(
        &["You're in the Dark-Room.  A corridor leading south is the only exit."],
        &["You're in Dark-Room."],
    ),
    // 102
    Room::new(
        &[
            "You are in an arched hall.  A coral passage once continued up and east",
            "from here, but is now blocked by debris.  The air smells of sea water.",
        ],
        &["You're in arched hall."],
    ),
    // 103
    Room::new(
        &[
            "You're in a large room carved out of sedimentary rock.  The floor and",
            "walls are littered with bits of shells imbedded in the stone.  A",
            "shallow passage proceeds downward, and a somewhat steeper one leads",
            "up.  A low hands and knees passage enters from the south.",
        ],
        &["You're in Shell Room."],
    ),
    // 104
    Room::long(&["You are in a long sloping corridor with ragged sharp walls."]),
    // 105
    Room::long(&["You are in a cul-de-sac about eight feet across."]),
    // 106
    Room::new(
        &[
            "You are in an anteroom leading to a large passage to the east.  Small",
            "passages go west and up.  The remnants of recent digging are evident.",
            "A sign in midair here says \"Cave under construction beyond this point.",
            "Proceed at own risk.  [Witt Construction Company]\"",
        ],
        &["You're in anteroom."],
    ),
    // 107
    Room::long(&["You are in a maze of twisty little passages, all different."]),
    // 108
    Room::new(
        &["You are at Witt's End.  Passages lead off in *all* directions."],
        &["You're at Witt's End."],
    ),
    // 109
    Room::new(
        &[
            "You are in a north/south canyon about 25 feet across.  The floor is",
            "covered by white mist seeping in from the north.  The walls extend",
            "upward for well over 100 feet.  Suspended from some unseen point far",
            "above you, an enormous two-sided mirror is hanging parallel to and",
            "midway between the canyon walls.  (The mirror is obviously provided",
            "for the use of the dwarves, who as you know, are extremely vain.)  A",
            "small window can be seen in either wall, some fifty feet up.",
        ],
        &["You're in Mirror Canyon."],
    ),
    // 110
    Room::new(
        &[
            "You're at a low window overlooking a huge pit, which extends up out of",
            "sight.  A floor is indistinctly visible over 50 feet below.  Traces of",
            "white mist cover the floor of the pit, becoming thicker to the left.",
            "Marks in the dust around the window would seem to indicate that",
            "someone has been here recently.  Directly across the pit from you and",
            "25 feet away there is a similar window looking into a lighted room.  A",
            "shadowy figure can be seen there peering back at you.",
        ],
        &["You're at window on pit."],
    ),
    // 111
    Room::new(
        &[
            "A large stalactite extends from the roof and almost reaches the floor",
            "below.  You could climb down it, and jump from it to the floor, but",
            "having done so you would be unable to reach it to climb back up.",
        ],
        &["You're at top of stalactite."],
    ),
    // 112
    Room::long(&["You are in a little maze of twisting passages, all different."]),
    // 113
    Room::new(
        &[
            "You are at the edge of a large underground reservoir.  An opaque cloud",
            "of white mist fills the room and rises rapidly upward.  The lake is",
            "fed by a stream, which tumbles out of a hole in the wall about 10 feet",
            "overhead and splashes noisily into the water somewhere within the",
            "mist.  The only passage goes back toward the south.",
        ],
        &["You're at reservoir."],
    ),
    // 114
    DEAD_END,
    // 115
    Room::new(
        &[
            "You are at the northeast end of an immense room, even larger than the",
            "Giant Room.  It appears to be a repository for the \"Adventure\"",
            "program.  Massive torches far overhead bathe the room with smoky",
            "yellow light.  Scattered about you can be seen a pile of bottles (all",
            "of them empty), a nursery of young beanstalks murmuring quietly, a bed",
            "of oysters, a bundle of black rods with rusty stars on their ends, and",
            "a collection of brass lanterns.  Off to one side a great many dwarves",
            "are sleeping on the floor, snoring loudly.  A sign nearby reads: \"Do",
            "not disturb the dwarves!\"  An immense mirror is hanging against one",
            "wall, and stretches to the other end of the room, where various other",
            "sundry objects can be glimpsed dimly in the distance.",
        ],
        &["You're at NE end."],
    ),
    // 116
    Room::new(
        &[
            "You are at the southwest end of the repository.  To one side is a pit",
            "full of fierce green snakes.  On the other side is a row of small",
            "wicker cages, each of which contains a little sulking bird.  In one",
            "corner is a bundle of black rods with rusty marks on their ends.  A",
            "large number of velvet pillows are scattered about on the floor.  A",
            "vast mirror stretches off to the northeast.  At your feet is a large",
            "steel grate, next to which is a sign that reads, \"Treasure vault.",
            "Keys in main office.\"",
        ],
        &["You're at SW end."],
    ),
    // 117
    Room::new(
        &[
            "You are on one side of a large, deep chasm.  A heavy white mist rising",
            "up from below obscures all view of the far side.  A SW path leads away",
            "from the chasm into a winding corridor.",
        ],
        &["You're on SW side of chasm."],
    ),
    // 118
    Room::new(
        &["You are in a long winding corridor sloping out of sight in both directions."],
        &["You're in sloping corridor."],
    ),
    // 119..=121
    SECRET_CANYON,
    SECRET_CANYON,
    SECRET_CANYON,
    // 122
    Room::new(
        &[
            "You are on the far side of the chasm.  A NE path leads away from the",
            "chasm on this side.",
        ],
        &["You're on NE side of chasm."],
    ),
    // 123
    Room::new(
        &[
            "You're in a long east/west corridor.  A faint rumbling noise can be",
            "heard in the distance.",
        ],
        &["You're in corridor."],
    ),
    // 124
    Room::new(
        &[
            "The path forks here.  The left fork leads northeast.  A dull rumbling",
            "seems to get louder in that direction.  The right fork leads southeast",
            "down a gentle slope.  The main corridor enters from the west.",
        ],
        &["You're at fork in path."],
    ),
    // 125
    Room::new(
        &[
            "The walls are quite warm here.  From the north can be heard a steady",
            "roar, so loud that the entire cave seems to be trembling.  Another",
            "passage leads south, and a low crawl goes east.",
        ],
        &["You're at junction with warm walls."],
    ),
    // 126
    Room::new(
        &[
            "You are on the edge of a breath-taking view.  Far below you is an",
            "active volcano, from which great gouts of molten lava come surging",
            "out, cascading back down into the depths.  The glowing rock fills the",
            "farthest reaches of the cavern with a blood-red glare, giving every-",
            "thing an eerie, macabre appearance.  The air is filled with flickering",
            "sparks of ash and a heavy smell of brimstone.  The walls are hot to",
            "the touch, and the thundering of the volcano drowns out all other",
            "sounds.  Embedded in the jagged roof far overhead are myriad twisted",
            "formations composed of pure white alabaster, which scatter the murky",
            "light into sinister apparitions upon the walls.  To one side is a deep",
            "gorge, filled with a bizarre chaos of tortured rock which seems to",
            "have been crafted by the devil himself.  An immense river of fire",
            "crashes out from the depths of the volcano, burns its way through the",
            "gorge, and plummets into a bottomless pit far off to your left.  To",
            "the right, an immense geyser of blistering steam erupts continuously",
            "from a barren island in the center of a sulfurous lake, which bubbles",
            "ominously.  The far right wall is aflame with an incandescence of its",
            "own, which lends an additional infernal splendor to the already",
            "hellish scene.  A dark, foreboding passage exits to the south.",
        ],
        &["You're at breath-taking view."],
    ),
    // 127
    Room::new(
        &[
            "You are in a small chamber filled with large boulders.  The walls are",
            "very warm, causing the air in the room to be almost stifling from the",
            "heat.  The only exit is a crawl heading west, through which is coming",
            "a low rumbling.",
        ],
        &["You're in chamber of boulders."],
    ),
    // 128
    Room::new(
        &[
            "You are walking along a gently sloping north/south passage lined with",
            "oddly shaped limestone formations.",
        ],
        &["You're in limestone passage."],
    ),
    // 129
    Room::new(
        &[
            "You are standing at the entrance to a large, barren room.  A sign",
            "posted above the entrance reads:  \"Caution!  Bear in room!\"",
        ],
        &["You're in front of barren room."],
    ),
    // 130
    Room::new(
        &[
            "You are inside a barren room.  The center of the room is completely",
            "empty except for some dust.  Marks in the dust lead away toward the",
            "far end of the room.  The only exit is the way you came in.",
        ],
        &["You're in barren room."],
    ),
    // 131
    Room::long(&["You are in a maze of twisting little passages, all different."]),
    // 132
    Room::long(&["You are in a little maze of twisty passages, all different."]),
    // 133
    Room::long(&["You are in a twisting maze of little passages, all different."]),
    // 134
    Room::long(&["You are in a twisting little maze of passages, all different."]),
    // 135
    Room::long(&["You are in a twisty little maze of passages, all different."]),
    // 136
    Room::long(&["You are in a twisty maze of little passages, all different."]),
    // 137
    Room::long(&["You are in a little twisty maze of passages, all different."]),
    // 138
    Room::long(&["You are in a maze of little twisting passages, all different."]),
    // 139
    Room::long(&["You are in a maze of little twisty passages, all different."]),
    // 140
    DEAD_END,
];
