//! advent-data: the classic 350-point cave
//!
//! Room descriptions, messages, object text, the word list and the travel
//! table, served to the engine through [`ClassicCave`].

pub mod items;
pub mod messages;
pub mod rooms;
pub mod travel;
pub mod vocab;

pub use items::{ITEMS, Item};
pub use messages::MESSAGES;
pub use rooms::{ROOMS, Room};
pub use travel::{TRAVEL, TravelRow};
pub use vocab::VOCABULARY;

use advent_core::action::Verb;
use advent_core::consts::RoomId;
use advent_core::data::{
    ItemText, MessageText, RoomText, TravelEntry, TravelGraph, VocabEntry, Vocabulary,
};
use advent_core::Obj;

/// The classic cave, ready to hand to the engine
#[derive(Debug, Clone)]
pub struct ClassicCave {
    travel: Vec<Vec<TravelEntry>>,
}

impl ClassicCave {
    pub fn new() -> Self {
        Self {
            travel: travel::expand(TRAVEL),
        }
    }
}

impl Default for ClassicCave {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomText for ClassicCave {
    fn room_description(&self, room: RoomId, visited: bool) -> &[&str] {
        ROOMS
            .get(usize::from(room))
            .map(|r| r.text(visited))
            .unwrap_or(&[])
    }
}

impl MessageText for ClassicCave {
    fn message(&self, id: u16) -> &[&str] {
        messages::message(id)
    }

    fn action_default(&self, verb: Verb) -> u16 {
        messages::action_default(verb)
    }
}

impl ItemText for ClassicCave {
    fn item_description(&self, obj: Obj, state: i8) -> Option<&str> {
        items::describe(obj, state)
    }
}

impl Vocabulary for ClassicCave {
    fn entries(&self) -> &[VocabEntry<'_>] {
        VOCABULARY
    }
}

impl TravelGraph for ClassicCave {
    fn travel(&self, room: RoomId) -> &[TravelEntry] {
        self.travel
            .get(usize::from(room))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
