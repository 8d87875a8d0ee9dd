//! The word list
//!
//! Codes are `class * 1000 + value`: 0xxx motions, 1xxx objects, 2xxx verbs
//! and 3xxx special words. A word may appear under several codes; the
//! engine takes the lowest unless it asks for a particular class.

use advent_core::data::VocabEntry;

const fn w(word: &'static str, code: u16) -> VocabEntry<'static> {
    VocabEntry { word, code }
}

pub static VOCABULARY: &[VocabEntry<'static>] = &[
    // Motions
    w("road", 2),
    w("hill", 2),
    w("enter", 3),
    w("upstream", 4),
    w("downstream", 5),
    w("forest", 6),
    w("forward", 7),
    w("continue", 7),
    w("onward", 7),
    w("back", 8),
    w("return", 8),
    w("retreat", 8),
    w("valley", 9),
    w("stair", 10),
    w("stairs", 10),
    w("out", 11),
    w("outside", 11),
    w("exit", 11),
    w("leave", 11),
    w("building", 12),
    w("house", 12),
    w("gully", 13),
    w("stream", 14),
    w("rock", 15),
    w("bed", 16),
    w("crawl", 17),
    w("cobble", 18),
    w("inward", 19),
    w("inside", 19),
    w("in", 19),
    w("surface", 20),
    w("null", 21),
    w("nowhere", 21),
    w("dark", 22),
    w("passage", 23),
    w("tunnel", 23),
    w("low", 24),
    w("canyon", 25),
    w("awkward", 26),
    w("giant", 27),
    w("view", 28),
    w("upward", 29),
    w("up", 29),
    w("u", 29),
    w("above", 29),
    w("ascend", 29),
    w("d", 30),
    w("downward", 30),
    w("down", 30),
    w("descend", 30),
    w("pit", 31),
    w("outdoors", 32),
    w("crack", 33),
    w("steps", 34),
    w("dome", 35),
    w("left", 36),
    w("right", 37),
    w("hall", 38),
    w("jump", 39),
    w("barren", 40),
    w("over", 41),
    w("across", 42),
    w("east", 43),
    w("e", 43),
    w("west", 44),
    w("w", 44),
    w("north", 45),
    w("n", 45),
    w("south", 46),
    w("s", 46),
    w("ne", 47),
    w("northeast", 47),
    w("se", 48),
    w("southeast", 48),
    w("sw", 49),
    w("southwest", 49),
    w("nw", 50),
    w("northwest", 50),
    w("debris", 51),
    w("hole", 52),
    w("wall", 53),
    w("broken", 54),
    w("y2", 55),
    w("climb", 56),
    w("look", 57),
    w("examine", 57),
    w("touch", 57),
    w("describe", 57),
    w("floor", 58),
    w("room", 59),
    w("slit", 60),
    w("slab", 61),
    w("slabroom", 61),
    w("xyzzy", 62),
    w("depression", 63),
    w("entrance", 64),
    w("plugh", 65),
    w("secret", 66),
    w("cave", 67),
    w("cross", 69),
    w("bedquilt", 70),
    w("plover", 71),
    w("oriental", 72),
    w("cavern", 73),
    w("shell", 74),
    w("reservoir", 75),
    w("main", 76),
    w("office", 76),
    w("fork", 77),
    // Objects
    w("keys", 1001),
    w("key", 1001),
    w("lamp", 1002),
    w("headlamp", 1002),
    w("lantern", 1002),
    w("grate", 1003),
    w("cage", 1004),
    w("rod", 1005),
    w("steps", 1007),
    w("bird", 1008),
    w("door", 1009),
    w("pillow", 1010),
    w("velvet", 1010),
    w("snake", 1011),
    w("fissure", 1012),
    w("tablet", 1013),
    w("clam", 1014),
    w("oyster", 1015),
    w("magazine", 1016),
    w("issue", 1016),
    w("spelunker", 1016),
    w("dwarf", 1017),
    w("dwarves", 1017),
    w("knife", 1018),
    w("knives", 1018),
    w("food", 1019),
    w("rations", 1019),
    w("bottle", 1020),
    w("jar", 1020),
    w("water", 1021),
    w("h2o", 1021),
    w("oil", 1022),
    w("mirror", 1023),
    w("plant", 1024),
    w("beanstalk", 1024),
    w("stalactite", 1026),
    w("shadow", 1027),
    w("figure", 1027),
    w("axe", 1028),
    w("drawings", 1029),
    w("pirate", 1030),
    w("dragon", 1031),
    w("chasm", 1032),
    w("troll", 1033),
    w("bear", 1035),
    w("message", 1036),
    w("volcano", 1037),
    w("geyser", 1037),
    w("machine", 1038),
    w("vending", 1038),
    w("batteries", 1039),
    w("battery", 1039),
    w("carpet", 1040),
    w("moss", 1040),
    w("gold", 1050),
    w("nugget", 1050),
    w("diamonds", 1051),
    w("silver", 1052),
    w("bars", 1052),
    w("jewels", 1053),
    w("jewelry", 1053),
    w("coins", 1054),
    w("chest", 1055),
    w("box", 1055),
    w("treasure", 1055),
    w("eggs", 1056),
    w("egg", 1056),
    w("nest", 1056),
    w("trident", 1057),
    w("vase", 1058),
    w("ming", 1058),
    w("shards", 1058),
    w("pottery", 1058),
    w("emerald", 1059),
    w("platinum", 1060),
    w("pyramid", 1060),
    w("pearl", 1061),
    w("rug", 1062),
    w("persian", 1062),
    w("spices", 1063),
    w("chain", 1064),
    // Verbs
    w("carry", 2001),
    w("take", 2001),
    w("keep", 2001),
    w("catch", 2001),
    w("steal", 2001),
    w("capture", 2001),
    w("get", 2001),
    w("tote", 2001),
    w("drop", 2002),
    w("release", 2002),
    w("free", 2002),
    w("discard", 2002),
    w("dump", 2002),
    w("say", 2003),
    w("chant", 2003),
    w("sing", 2003),
    w("utter", 2003),
    w("mumble", 2003),
    w("unlock", 2004),
    w("open", 2004),
    w("nothing", 2005),
    w("lock", 2006),
    w("close", 2006),
    w("light", 2007),
    w("on", 2007),
    w("extinguish", 2008),
    w("off", 2008),
    w("wave", 2009),
    w("shake", 2009),
    w("swing", 2009),
    w("calm", 2010),
    w("placate", 2010),
    w("tame", 2010),
    w("walk", 2011),
    w("run", 2011),
    w("travel", 2011),
    w("go", 2011),
    w("proceed", 2011),
    w("explore", 2011),
    w("goto", 2011),
    w("follow", 2011),
    w("turn", 2011),
    w("attack", 2012),
    w("kill", 2012),
    w("slay", 2012),
    w("fight", 2012),
    w("hit", 2012),
    w("strike", 2012),
    w("pour", 2013),
    w("eat", 2014),
    w("devour", 2014),
    w("drink", 2015),
    w("rub", 2016),
    w("throw", 2017),
    w("toss", 2017),
    w("quit", 2018),
    w("find", 2019),
    w("where", 2019),
    w("inventory", 2020),
    w("inv", 2020),
    w("i", 2020),
    w("feed", 2021),
    w("fill", 2022),
    w("blast", 2023),
    w("detonate", 2023),
    w("ignite", 2023),
    w("blowup", 2023),
    w("score", 2024),
    w("fee", 2025),
    w("fie", 2025),
    w("foe", 2025),
    w("foo", 2025),
    w("fum", 2025),
    w("brief", 2026),
    w("read", 2027),
    w("peruse", 2027),
    w("break", 2028),
    w("shatter", 2028),
    w("smash", 2028),
    w("wake", 2029),
    w("disturb", 2029),
    w("suspend", 2030),
    w("pause", 2030),
    w("save", 2030),
    w("hours", 2031),
    w("log", 2032),
    // Special words
    w("fee", 3001),
    w("fie", 3002),
    w("foe", 3003),
    w("foo", 3004),
    w("fum", 3005),
    w("abra", 3050),
    w("abracadabra", 3050),
    w("sesame", 3050),
    w("shazam", 3050),
    w("hocus", 3050),
    w("pocus", 3050),
    w("help", 3051),
    w("?", 3051),
    w("tree", 3064),
    w("trees", 3064),
    w("dig", 3066),
    w("excavate", 3066),
    w("lost", 3068),
    w("mist", 3069),
    w("fuck", 3079),
    w("stop", 3139),
    w("info", 3142),
    w("information", 3142),
    w("swim", 3147),
];
