//! The world model
//!
//! [`WorldState`] is the single owned, serializable value holding the whole
//! game. Every table is indexed by room or object number.

mod defaults;
mod flags;
pub mod options;
mod primitives;
pub(crate) mod timeout;

pub use flags::RoomFlags;
pub use options::{GameOptions, OptionsError};
pub use primitives::Liquid;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::object::{Fixture, OBJ_SLOTS, Obj, Place};
use crate::rng::GameRng;

/// Top-level dialogue state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogueState {
    /// Nothing said yet
    #[default]
    Init,
    /// Waiting for "would you like instructions?"
    IntroConfirm,
    Playing,
    /// Offering reincarnation
    DeathQuery,
    /// "With what? Your bare hands?"
    DragonQuery,
    /// Confirming a quit
    GiveUpQuery,
    /// Offering to read the oyster clue
    ReadOysterQuery,
    GameOver,
    /// A persisted state this engine does not know
    #[serde(other)]
    Unknown,
}

/// Progress of the endgame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClosingPhase {
    #[default]
    Open,
    /// The closing announcement has been made
    Closing,
    /// Closing, and the player tried to leave
    Panic,
    /// Everyone is in the repository
    Closed,
}

impl ClosingPhase {
    /// Closing has started (also true once closed)
    pub fn is_closing(self) -> bool {
        self != ClosingPhase::Open
    }

    pub fn is_closed(self) -> bool {
        self == ClosingPhase::Closed
    }
}

/// How the game ended after blasting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndgameBonus {
    /// Blew yourself up
    Splatter,
    /// Blew up the snake pit side
    Lava,
    /// Blew a hole to the main office
    Victory,
}

impl EndgameBonus {
    /// The message that announces the blast
    pub fn message(self) -> u16 {
        match self {
            EndgameBonus::Splatter => 135,
            EndgameBonus::Lava => 134,
            EndgameBonus::Victory => 133,
        }
    }
}

/// A wandering dwarf or the pirate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hostile {
    /// Current room; 0 once out of play
    pub room: RoomId,
    /// Room before the last move
    pub prior: RoomId,
    /// Has seen the player
    pub seen: bool,
}

/// Tracks the knife a dwarf threw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Knife {
    #[default]
    Absent,
    /// Lying in this room
    Lying(RoomId),
    /// The player has been told knives vanish
    Explained,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldState {
    pub dialogue: DialogueState,

    pub location: RoomId,
    pub prior_location: RoomId,
    pub prior_location2: RoomId,
    /// Destination applied during movement resolution
    pub pending_location: RoomId,
    /// Describe the current room again even if nothing moved
    pub redescribe: bool,

    pub room_flags: Vec<RoomFlags>,
    pub visits: Vec<u16>,

    pub places: Vec<Place>,
    pub fixtures: Vec<Fixture>,
    pub props: Vec<i8>,
    /// Number of carried objects
    pub held: u8,

    /// Treasures not yet seen
    pub tally: u8,
    /// Treasures lost for good
    pub lost_treasures: u8,

    pub lamp_fuel: i32,
    pub lamp_warned: bool,
    /// Was it dark at the end of the last turn
    pub was_dark: bool,

    pub closing: ClosingPhase,
    pub clock: i32,
    pub clock2: i32,

    pub hostiles: [Hostile; HOSTILE_COUNT],
    /// 0 until the player goes deep; grows with each stage of hostility
    pub hostile_stage: u8,
    pub dwarves_killed: u16,
    pub knife: Knife,

    pub turns: u32,
    pub deaths: u8,
    pub gave_up: bool,
    pub bonus: Option<EndgameBonus>,
    /// Progress through fee fie foe foo
    pub chant: i8,
    /// Times the player has asked to look
    pub detail: u8,
    pub force_plugh_hint: bool,
    pub save_requested: bool,
    /// Fault code of a fatal engine error
    pub fault: Option<u16>,
    /// Most tick repetitions one command may cause
    pub tick_limit: u32,

    pub rng: GameRng,
}

impl WorldState {
    /// A fresh game using the given random source
    pub fn new(rng: GameRng) -> Self {
        let slots = usize::from(MAX_ROOM) + 1;

        let mut room_flags = vec![RoomFlags::empty(); slots];
        for &(room, flags) in defaults::ROOM_CONDITIONS {
            room_flags[usize::from(room)] = flags;
        }

        let mut places = vec![Place::Nowhere; OBJ_SLOTS];
        for &(obj, room) in defaults::PLACEMENT {
            places[obj.index()] = Place::Room(room);
        }

        let mut fixtures = vec![Fixture::Loose; OBJ_SLOTS];
        for &(obj, anchor) in defaults::FIXTURES {
            fixtures[obj.index()] = anchor.map_or(Fixture::Pinned, Fixture::Room);
        }

        let props = (0..OBJ_SLOTS)
            .map(|i| if i < Obj::Nugget.index() { 0 } else { -1 })
            .collect();

        let mut hostiles = [Hostile::default(); HOSTILE_COUNT];
        for (hostile, &room) in hostiles.iter_mut().zip(HOSTILE_START.iter()) {
            hostile.room = room;
        }

        Self {
            dialogue: DialogueState::Init,
            location: ROOM_ROAD,
            prior_location: ROOM_ROAD,
            prior_location2: ROOM_ROAD,
            pending_location: ROOM_ROAD,
            redescribe: true,
            room_flags,
            visits: vec![0; slots],
            places,
            fixtures,
            props,
            held: 0,
            tally: TREASURE_COUNT,
            lost_treasures: 0,
            lamp_fuel: LAMP_FUEL,
            lamp_warned: false,
            was_dark: false,
            closing: ClosingPhase::Open,
            clock: CLOSING_CLOCK,
            clock2: CLOSED_CLOCK,
            hostiles,
            hostile_stage: 0,
            dwarves_killed: 0,
            knife: Knife::Absent,
            turns: 0,
            deaths: 0,
            gave_up: false,
            bonus: None,
            chant: 0,
            detail: 0,
            force_plugh_hint: false,
            save_requested: false,
            fault: None,
            tick_limit: MAX_TICK_REPEATS,
            rng,
        }
    }

    /// A fresh game configured from options
    pub fn with_options(options: &GameOptions) -> Self {
        let rng = options.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut state = Self::new(rng);
        state.lamp_fuel = options.lamp_fuel;
        state.clock = options.closing_clock;
        state.clock2 = options.closed_clock;
        state.tick_limit = options.max_tick_repeats;
        state
    }

    /// The default state merged under caller-supplied fields
    ///
    /// Any field missing from `overrides` keeps its starting value, so this
    /// serves both for tweaked new games and for restoring a saved state.
    ///
    /// Tables of the wrong length and rooms outside the cave are rejected.
    /// The held count is recounted from the object table.
    pub fn from_overrides(overrides: serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut state: Self = serde_json::from_value(overrides)?;
        state
            .check_shape()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        state.held = u8::try_from(state.carried().count()).unwrap_or(u8::MAX);
        Ok(state)
    }

    fn check_shape(&self) -> Result<(), String> {
        let rooms = usize::from(MAX_ROOM) + 1;
        if self.room_flags.len() != rooms || self.visits.len() != rooms {
            return Err(format!("room tables must have {rooms} entries"));
        }
        if self.places.len() != OBJ_SLOTS
            || self.fixtures.len() != OBJ_SLOTS
            || self.props.len() != OBJ_SLOTS
        {
            return Err(format!("object tables must have {OBJ_SLOTS} entries"));
        }
        let players = [
            self.location,
            self.pending_location,
            self.prior_location,
            self.prior_location2,
        ];
        let hostiles = self.hostiles.iter().flat_map(|h| [h.room, h.prior]);
        match players.into_iter().chain(hostiles).find(|&r| r > MAX_ROOM) {
            Some(room) => Err(format!("room {room} is outside the cave")),
            None => Ok(()),
        }
    }

    /// The game has ended and accepts no more input
    pub fn is_done(&self) -> bool {
        self.dialogue == DialogueState::GameOver
    }

    /// Take the save request raised by `suspend`
    pub fn take_save_request(&mut self) -> bool {
        std::mem::take(&mut self.save_requested)
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(GameRng::default())
    }
}
