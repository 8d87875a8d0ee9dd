//! Content providers
//!
//! The engine never embeds text or maps. Room descriptions, messages, item
//! descriptions, vocabulary and the travel graph all come from read-only
//! providers; [`CaveContent`] bundles them.

mod travel;
mod vocab;

pub use travel::{Condition, Destination, TravelEntry};
pub use vocab::{Motion, VocabEntry, Word, WordClass};

use crate::action::Verb;
use crate::consts::RoomId;
use crate::object::Obj;

/// Room descriptions
pub trait RoomText {
    /// Lines describing a room; the short form once it has been visited.
    /// Rooms without a short form fall back to the long one.
    fn room_description(&self, room: RoomId, visited: bool) -> &[&str];
}

/// Numbered messages
pub trait MessageText {
    /// Zero or more lines for a message id
    fn message(&self, id: u16) -> &[&str];

    /// Message printed when a verb has nothing specific to say (0 = none)
    fn action_default(&self, verb: Verb) -> u16;
}

/// Object descriptions
pub trait ItemText {
    /// Description of an object in a given state; state -1 is the
    /// inventory name
    fn item_description(&self, obj: Obj, state: i8) -> Option<&str>;
}

/// Word list
pub trait Vocabulary {
    fn entries(&self) -> &[VocabEntry<'_>];

    /// Resolve a word; when it has several meanings the lowest code wins
    fn lookup(&self, word: &str) -> Option<u16> {
        self.entries()
            .iter()
            .filter(|e| e.word == word)
            .map(|e| e.code)
            .min()
    }

    /// Resolve a word within one grammar class
    fn lookup_class(&self, word: &str, class: WordClass) -> Option<Word> {
        self.entries()
            .iter()
            .filter(|e| e.word == word)
            .filter_map(|e| Word::from_code(e.code))
            .find(|w| w.class == class)
    }
}

/// The travel graph
pub trait TravelGraph {
    /// Ordered travel entries for a room (empty for unknown rooms)
    fn travel(&self, room: RoomId) -> &[TravelEntry];
}

/// Everything the engine reads
pub trait CaveContent: RoomText + MessageText + ItemText + Vocabulary + TravelGraph {}

impl<T: RoomText + MessageText + ItemText + Vocabulary + TravelGraph> CaveContent for T {}
