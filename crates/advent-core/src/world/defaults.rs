//! Initial placement and room condition tables

use crate::consts::RoomId;
use crate::object::Obj;
use crate::world::RoomFlags;

const LIT: RoomFlags = RoomFlags::LIT;
const WATER_LIT: RoomFlags = RoomFlags::LIT.union(RoomFlags::LIQUID);
const WATER: RoomFlags = RoomFlags::LIQUID;
const OIL: RoomFlags = RoomFlags::OIL.union(RoomFlags::LIQUID);
const FORCED: RoomFlags = RoomFlags::FORCED;
const NO_PIRATE: RoomFlags = RoomFlags::NO_PIRATE;
const MAZE: RoomFlags = RoomFlags::HINT_MAZE;
const MAZE_END: RoomFlags = RoomFlags::HINT_MAZE.union(RoomFlags::NO_PIRATE);

/// Rooms with any condition bit set
pub(crate) const ROOM_CONDITIONS: &[(RoomId, RoomFlags)] = &[
    (1, WATER_LIT),
    (2, LIT),
    (3, WATER_LIT),
    (4, WATER_LIT),
    (5, LIT),
    (6, LIT),
    (7, WATER_LIT),
    (8, LIT.union(RoomFlags::HINT_CAVE)),
    (9, LIT),
    (10, LIT),
    (13, RoomFlags::HINT_BIRD),
    (16, FORCED),
    (19, RoomFlags::HINT_SNAKE),
    (20, FORCED),
    (21, FORCED),
    (22, FORCED),
    (24, OIL),
    (26, FORCED),
    (31, FORCED),
    (32, FORCED),
    (38, WATER),
    (40, FORCED),
    (42, MAZE),
    (43, MAZE),
    (44, MAZE),
    (45, MAZE),
    (46, MAZE_END),
    (47, MAZE_END),
    (48, MAZE_END),
    (49, MAZE),
    (50, MAZE),
    (51, MAZE),
    (52, MAZE),
    (53, MAZE),
    (54, MAZE_END),
    (55, MAZE),
    (56, MAZE_END),
    (58, NO_PIRATE),
    (59, FORCED),
    (79, FORCED.union(LIT)),
    (80, MAZE),
    (81, MAZE_END),
    (82, MAZE_END),
    (85, NO_PIRATE),
    (86, MAZE_END),
    (87, MAZE),
    (89, FORCED),
    (90, FORCED),
    (95, WATER),
    (100, LIT),
    (113, WATER),
    (115, LIT),
    (116, LIT),
    (122, NO_PIRATE),
    (123, NO_PIRATE),
    (124, NO_PIRATE),
    (125, NO_PIRATE),
    (126, NO_PIRATE),
    (127, NO_PIRATE),
    (128, NO_PIRATE),
    (129, NO_PIRATE),
    (130, NO_PIRATE),
];

/// Starting room of every object that begins in play
pub(crate) const PLACEMENT: &[(Obj, RoomId)] = &[
    (Obj::Keys, 3),
    (Obj::Lamp, 3),
    (Obj::Grate, 8),
    (Obj::Cage, 10),
    (Obj::Rod, 11),
    (Obj::Steps, 14),
    (Obj::Bird, 13),
    (Obj::Door, 94),
    (Obj::Pillow, 96),
    (Obj::Snake, 19),
    (Obj::Fissure, 17),
    (Obj::Tablet, 101),
    (Obj::Clam, 103),
    (Obj::Magazine, 106),
    (Obj::Food, 3),
    (Obj::Bottle, 3),
    (Obj::Mirror, 109),
    (Obj::Plant, 25),
    (Obj::Plant2, 23),
    (Obj::Stalactite, 111),
    (Obj::Shadow, 35),
    (Obj::Drawings, 97),
    (Obj::Dragon, 119),
    (Obj::Chasm, 117),
    (Obj::Troll, 117),
    (Obj::Bear, 130),
    (Obj::Volcano, 126),
    (Obj::Vend, 140),
    (Obj::Carpet, 96),
    (Obj::Nugget, 18),
    (Obj::Diamonds, 27),
    (Obj::Silver, 28),
    (Obj::Jewels, 29),
    (Obj::Coins, 30),
    (Obj::Eggs, 92),
    (Obj::Trident, 95),
    (Obj::Vase, 97),
    (Obj::Emerald, 100),
    (Obj::Pyramid, 101),
    (Obj::Rug, 119),
    (Obj::Spices, 127),
    (Obj::Chain, 130),
];

/// Immovable objects: `None` pins the object where it lies, `Some` gives
/// the second room it is seen from
pub(crate) const FIXTURES: &[(Obj, Option<RoomId>)] = &[
    (Obj::Grate, Some(9)),
    (Obj::Steps, Some(15)),
    (Obj::Door, None),
    (Obj::Snake, None),
    (Obj::Fissure, Some(27)),
    (Obj::Tablet, None),
    (Obj::Dwarf, None),
    (Obj::Mirror, None),
    (Obj::Plant, None),
    (Obj::Plant2, Some(67)),
    (Obj::Stalactite, None),
    (Obj::Shadow, Some(110)),
    (Obj::Drawings, None),
    (Obj::Pirate, None),
    (Obj::Dragon, Some(121)),
    (Obj::Chasm, Some(122)),
    (Obj::Troll, Some(122)),
    (Obj::Bear, None),
    (Obj::Message, None),
    (Obj::Volcano, None),
    (Obj::Vend, None),
    (Obj::Carpet, None),
    (Obj::Rug, Some(121)),
    (Obj::Chain, None),
];
