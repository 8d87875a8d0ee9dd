//! Game constants

/// Room identifier; 0 is limbo (used for "nowhere" and for death)
pub type RoomId = u8;

/// Highest room number in the cave
pub const MAX_ROOM: RoomId = 140;

/// Objects a player may carry at once
pub const MAX_CARRY: u8 = 7;

/// Resurrections offered before the game simply ends
pub const MAX_DEATHS: u8 = 3;

/// Hostile actors: five dwarves and the pirate
pub const HOSTILE_COUNT: usize = 6;

/// Index of the pirate in the hostile table
pub const PIRATE: usize = 5;

/// Treasures not yet seen at the start of a game
pub const TREASURE_COUNT: u8 = 15;

/// Starting lamp fuel, in turns
pub const LAMP_FUEL: i32 = 330;

/// Turns after the last treasure is found before closing starts
pub const CLOSING_CLOCK: i32 = 30;

/// Turns from the closing announcement to the cave closing
pub const CLOSED_CLOCK: i32 = 50;

/// Second clock value armed by trying to leave during closing
pub const PANIC_CLOCK: i32 = 15;

/// Fuel level at which the lamp starts to warn
pub const LAMP_WARNING: i32 = 30;

/// Fuel granted by a fresh set of batteries
pub const BATTERY_FUEL: i32 = 2500;

/// Upper bound on tick repetitions inside one call
pub const MAX_TICK_REPEATS: u32 = 64;

// Well-known rooms
pub const ROOM_ROAD: RoomId = 1;
pub const ROOM_BUILDING: RoomId = 3;
pub const ROOM_SLIT: RoomId = 7;
pub const ROOM_OUTSIDE_GRATE: RoomId = 8;
pub const ROOM_BELOW_GRATE: RoomId = 9;
pub const ROOM_DEBRIS: RoomId = 11;
pub const ROOM_MISTS: RoomId = 15;
pub const ROOM_NUGGET: RoomId = 18;
pub const ROOM_Y2: RoomId = 33;
pub const ROOM_GIANT: RoomId = 92;
pub const ROOM_SOFT: RoomId = 96;
pub const ROOM_PLOVER: RoomId = 100;
pub const ROOM_WITTS_END: RoomId = 108;
pub const ROOM_CHEST: RoomId = 114;
pub const ROOM_REPOSITORY_NE: RoomId = 115;
pub const ROOM_REPOSITORY_SW: RoomId = 116;
pub const ROOM_CHASM_SW: RoomId = 117;
pub const ROOM_DRAGON_NORTH: RoomId = 119;
pub const ROOM_DRAGON_LAIR: RoomId = 120;
pub const ROOM_DRAGON_EAST: RoomId = 121;
pub const ROOM_CHASM_NE: RoomId = 122;
pub const ROOM_BARREN: RoomId = 130;
pub const ROOM_MAZE_MESSAGE: RoomId = 140;

/// First room where hostiles can appear
pub const DEEP_ROOM: RoomId = 15;

/// Where surviving dwarves regroup after first contact
pub const DWARF_ALT_ROOM: RoomId = ROOM_NUGGET;

/// Starting rooms of the five dwarves and the pirate
pub const HOSTILE_START: [RoomId; HOSTILE_COUNT] = [19, 27, 33, 44, 64, ROOM_CHEST];

/// True for rooms in the "all alike" maze
pub fn in_twisty_maze(room: RoomId) -> bool {
    (42..=58).contains(&room) || (80..=87).contains(&room)
}
