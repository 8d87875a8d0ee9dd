//! Object names and per-state descriptions

use advent_core::Obj;

/// Text for one object
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub obj: Obj,
    /// Inventory name; `None` for things that can never be carried
    pub name: Option<&'static str>,
    /// Description per state; `None` entries print nothing
    pub states: &'static [Option<&'static str>],
}

impl Item {
    pub const fn new(
        obj: Obj,
        name: Option<&'static str>,
        states: &'static [Option<&'static str>],
    ) -> Self {
        Self { obj, name, states }
    }

    /// Text for a state, -1 being the inventory name
    pub fn text(&self, state: i8) -> Option<&'static str> {
        match state {
            -1 => self.name,
            s => usize::try_from(s)
                .ok()
                .and_then(|i| self.states.get(i).copied().flatten()),
        }
    }
}

pub static ITEMS: &[Item] = &[
    Item::new(Obj::Keys, Some("Set of keys"), &[Some("There are some keys on the ground here.")]),
    Item::new(
        Obj::Lamp,
        Some("Brass lantern"),
        &[
            Some("There is a shiny brass lamp nearby."),
            Some("There is a lamp shining nearby."),
        ],
    ),
    Item::new(
        Obj::Grate,
        None,
        &[Some("The grate is locked."), Some("The grate is open.")],
    ),
    Item::new(
        Obj::Cage,
        Some("Wicker cage"),
        &[Some("There is a small wicker cage discarded nearby.")],
    ),
    Item::new(
        Obj::Rod,
        Some("Black rod"),
        &[Some("A three foot black rod with a rusty star on an end lies nearby.")],
    ),
    Item::new(
        Obj::Rod2,
        Some("Black rod"),
        &[Some("A three foot black rod with a rusty mark on an end lies nearby.")],
    ),
    Item::new(
        Obj::Steps,
        None,
        &[
            Some("Rough stone steps lead down the pit."),
            Some("Rough stone steps lead up the dome."),
        ],
    ),
    Item::new(
        Obj::Bird,
        Some("Little bird in cage"),
        &[
            Some("A cheerful little bird is sitting here singing."),
            Some("There is a little bird in the cage."),
        ],
    ),
    Item::new(
        Obj::Door,
        None,
        &[
            Some("The way north is barred by a massive, rusty, iron door."),
            Some("The way north leads through a massive, rusty, iron door."),
        ],
    ),
    Item::new(
        Obj::Pillow,
        Some("Velvet pillow"),
        &[Some("A small velvet pillow lies on the floor.")],
    ),
    Item::new(
        Obj::Snake,
        None,
        &[Some("A huge green fierce snake bars the way!"), None],
    ),
    Item::new(
        Obj::Fissure,
        None,
        &[
            None,
            Some("A crystal bridge now spans the fissure."),
            Some("The crystal bridge has vanished!"),
        ],
    ),
    Item::new(
        Obj::Tablet,
        None,
        &[Some(
            "A massive stone tablet imbedded in the wall reads:\n\
             \"Congratulations on bringing light into the dark-room!\"",
        )],
    ),
    Item::new(
        Obj::Clam,
        Some("Giant clam  >GRUNT!<"),
        &[Some("There is an enormous clam here with its shell tightly closed.")],
    ),
    Item::new(
        Obj::Oyster,
        Some("Giant oyster  >GROAN!<"),
        &[
            Some("There is an enormous oyster here with its shell tightly closed."),
            Some("Interesting.  There seems to be something written on the underside of\nthe oyster."),
        ],
    ),
    Item::new(
        Obj::Magazine,
        Some("\"Spelunker Today\""),
        &[Some("There are a few recent issues of \"Spelunker Today\" magazine here.")],
    ),
    Item::new(Obj::Dwarf, None, &[]),
    Item::new(Obj::Knife, None, &[]),
    Item::new(Obj::Food, Some("Tasty food"), &[Some("There is food here.")]),
    Item::new(
        Obj::Bottle,
        Some("Small bottle"),
        &[
            Some("There is a bottle of water here."),
            Some("There is an empty bottle here."),
            Some("There is a bottle of oil here."),
        ],
    ),
    Item::new(Obj::Water, Some("Water in the bottle"), &[]),
    Item::new(Obj::Oil, Some("Oil in the bottle"), &[]),
    Item::new(Obj::Mirror, None, &[None]),
    Item::new(
        Obj::Plant,
        None,
        &[
            Some("There is a tiny little plant in the pit, murmuring \"Water, water, ...\""),
            Some("The plant spurts into furious growth for a few seconds."),
            Some("There is a 12-foot-tall beanstalk stretching up out of the pit,\nbellowing \"WATER!! WATER!!\""),
            Some("The plant grows explosively, almost filling the bottom of the pit."),
            Some("There is a gigantic beanstalk stretching all the way up to the hole."),
            Some("You've over-watered the plant!  It's shriveling up!  It's, it's..."),
        ],
    ),
    Item::new(
        Obj::Plant2,
        None,
        &[
            None,
            Some("The top of a 12-foot-tall beanstalk is poking out of the west pit."),
            Some("There is a huge beanstalk growing out of the west pit up to the hole."),
        ],
    ),
    Item::new(Obj::Stalactite, None, &[None]),
    Item::new(
        Obj::Shadow,
        None,
        &[Some("The shadowy figure seems to be trying to attract your attention.")],
    ),
    Item::new(
        Obj::Axe,
        Some("Dwarf's axe"),
        &[
            Some("There is a little axe here."),
            Some("There is a little axe lying beside the bear."),
        ],
    ),
    Item::new(Obj::Drawings, None, &[None]),
    Item::new(Obj::Pirate, None, &[None]),
    Item::new(
        Obj::Dragon,
        None,
        &[
            Some("A huge green fierce dragon bars the way!"),
            Some("Congratulations!  You have just vanquished a dragon with your bare\nhands!  (Unbelievable, isn't it?)"),
            Some("The body of a huge green dead dragon is lying off to one side."),
        ],
    ),
    Item::new(
        Obj::Chasm,
        None,
        &[
            Some("A rickety wooden bridge extends across the chasm, vanishing into the\nmist.  A sign posted on the bridge reads, \"Stop! Pay troll!\""),
            Some("The wreckage of a bridge (and a dead bear) can be seen at the bottom\nof the chasm."),
        ],
    ),
    Item::new(
        Obj::Troll,
        None,
        &[
            Some("A burly troll stands by the bridge and insists you throw him a\ntreasure before you may cross."),
            Some("The troll steps out from beneath the bridge and blocks your way."),
            None,
        ],
    ),
    Item::new(Obj::Troll2, None, &[Some("The troll is nowhere to be seen.")]),
    Item::new(
        Obj::Bear,
        None,
        &[
            Some("There is a ferocious cave bear eying you from the far end of the room!"),
            Some("There is a gentle cave bear sitting placidly in one corner."),
            Some("There is a contented-looking bear wandering about nearby."),
            None,
        ],
    ),
    Item::new(
        Obj::Message,
        None,
        &[Some(
            "There is a message scrawled in the dust in a flowery script, reading:\n\
             \"This is not the maze where the pirate leaves his treasure chest.\"",
        )],
    ),
    Item::new(Obj::Volcano, None, &[None]),
    Item::new(
        Obj::Vend,
        None,
        &[Some(
            "There is a massive vending machine here.  The instructions on it read:\n\
             \"Drop coins here to receive fresh batteries.\"",
        )],
    ),
    Item::new(
        Obj::Batteries,
        Some("Batteries"),
        &[
            Some("There are fresh batteries here."),
            Some("Some worn-out batteries have been discarded nearby."),
        ],
    ),
    Item::new(Obj::Carpet, None, &[None]),
    Item::new(
        Obj::Nugget,
        Some("Large gold nugget"),
        &[Some("There is a large sparkling nugget of gold here!")],
    ),
    Item::new(Obj::Diamonds, Some("Several diamonds"), &[Some("There are diamonds here!")]),
    Item::new(Obj::Silver, Some("Bars of silver"), &[Some("There are bars of silver here!")]),
    Item::new(Obj::Jewels, Some("Precious jewelry"), &[Some("There is precious jewelry here!")]),
    Item::new(Obj::Coins, Some("Rare coins"), &[Some("There are many coins here!")]),
    Item::new(
        Obj::Chest,
        Some("Treasure chest"),
        &[Some("The pirate's treasure chest is here!")],
    ),
    Item::new(
        Obj::Eggs,
        Some("Golden eggs"),
        &[
            Some("There is a large nest here, full of golden eggs!"),
            Some("The nest of golden eggs has vanished!"),
            Some("Done!"),
        ],
    ),
    Item::new(
        Obj::Trident,
        Some("Jeweled trident"),
        &[Some("There is a jewel-encrusted trident here!")],
    ),
    Item::new(
        Obj::Vase,
        Some("Ming vase"),
        &[
            Some("There is a delicate, precious, Ming vase here!"),
            Some("The vase is now resting, delicately, on a velvet pillow."),
            Some("The floor is littered with worthless shards of pottery."),
            Some("The Ming vase drops with a delicate crash."),
        ],
    ),
    Item::new(
        Obj::Emerald,
        Some("Egg-sized emerald"),
        &[Some("There is an emerald here the size of a plover's egg!")],
    ),
    Item::new(
        Obj::Pyramid,
        Some("Platinum pyramid"),
        &[Some("There is a platinum pyramid here, 8 inches on a side!")],
    ),
    Item::new(
        Obj::Pearl,
        Some("Glistening pearl"),
        &[Some("Off to one side lies a glistening pearl!")],
    ),
    Item::new(
        Obj::Rug,
        Some("Persian rug"),
        &[
            Some("There is a Persian rug spread out on the floor!"),
            Some("The dragon is sprawled out on a Persian rug!!"),
        ],
    ),
    Item::new(Obj::Spices, Some("Rare spices"), &[Some("There are rare spices here!")]),
    Item::new(
        Obj::Chain,
        Some("Golden chain"),
        &[
            Some("There is a golden chain lying in a heap on the floor!"),
            Some("The bear is locked to the wall with a golden chain!"),
            Some("There is a golden chain locked to the wall!"),
        ],
    ),
];

/// Text for an object in a state
pub fn describe(obj: Obj, state: i8) -> Option<&'static str> {
    ITEMS
        .iter()
        .find(|item| item.obj == obj)
        .and_then(|item| item.text(state))
}
