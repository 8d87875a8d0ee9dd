//! Travel table decoding
//!
//! Content stores travel as rows of `room, cond * 1000 + dest, verbs...`.
//! Rows are expanded into one [`TravelEntry`] per verb, in table order.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ROOM, RoomId};
use crate::data::Motion;
use crate::error::EngineError;
use crate::object::Obj;

/// One (condition, verb, destination) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelEntry {
    pub condition: u16,
    pub verb: Motion,
    pub dest: u16,
}

/// Decoded travel condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// Roll under this percentage
    Chance(u16),
    /// Player must be carrying the object
    Carrying(Obj),
    /// Object must be carried or in the room
    Present(Obj),
    /// Object state must differ from the value
    StateNot(Obj, i8),
}

/// Decoded travel destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Room(RoomId),
    /// Scripted move 1..=3
    Special(u16),
    /// Print a message instead of moving
    Message(u16),
}

impl TravelEntry {
    /// Expand a packed row into entries, one per verb
    pub fn expand_row(packed: u32, verbs: &[u16]) -> impl Iterator<Item = TravelEntry> + '_ {
        let condition = (packed / 1000) as u16;
        let dest = (packed % 1000) as u16;
        verbs.iter().map(move |&verb| TravelEntry {
            condition,
            verb: Motion(verb),
            dest,
        })
    }

    /// True if this entry applies to the given motion
    pub fn matches(&self, motion: Motion) -> bool {
        self.verb == Motion::ALWAYS || self.verb == motion
    }

    pub fn decode_condition(&self, room: RoomId) -> Result<Condition, EngineError> {
        let bad = || EngineError::TravelCondition {
            room,
            condition: self.condition,
        };
        let object = || Obj::from_code(self.condition % 100).ok_or_else(bad);
        let class = self.condition / 100;
        Ok(match class {
            0 if self.condition == 0 => Condition::Always,
            0 => Condition::Chance(self.condition),
            1 if self.condition % 100 == 0 => Condition::Always,
            1 => Condition::Carrying(object()?),
            2 => Condition::Present(object()?),
            3 | 4 | 5 | 7 => Condition::StateNot(object()?, class as i8 - 3),
            _ => return Err(bad()),
        })
    }

    pub fn destination(&self, room: RoomId) -> Result<Destination, EngineError> {
        match self.dest {
            d if d > 500 => Ok(Destination::Message(d - 500)),
            d if d > 300 => Ok(Destination::Special(d - 300)),
            d if d <= u16::from(MAX_ROOM) => Ok(Destination::Room(d as RoomId)),
            d => Err(EngineError::Destination { room, dest: d }),
        }
    }

    /// Unconditional entries are the only ones "back" may replay
    pub fn is_unconditional(&self) -> bool {
        self.condition == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_row() {
        let entries: Vec<_> = TravelEntry::expand_row(303009, &[3, 19, 30]).collect();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.condition == 303 && e.dest == 9));
        assert_eq!(entries[2].verb, Motion::DOWN);
    }

    #[test]
    fn test_decode_conditions() {
        let entry = |condition| TravelEntry {
            condition,
            verb: Motion::ALWAYS,
            dest: 1,
        };
        assert_eq!(entry(0).decode_condition(1), Ok(Condition::Always));
        assert_eq!(entry(35).decode_condition(1), Ok(Condition::Chance(35)));
        assert_eq!(entry(100).decode_condition(1), Ok(Condition::Always));
        assert_eq!(
            entry(150).decode_condition(1),
            Ok(Condition::Carrying(Obj::Nugget))
        );
        assert_eq!(
            entry(211).decode_condition(1),
            Ok(Condition::Present(Obj::Snake))
        );
        assert_eq!(
            entry(303).decode_condition(1),
            Ok(Condition::StateNot(Obj::Grate, 0))
        );
        assert_eq!(
            entry(724).decode_condition(1),
            Ok(Condition::StateNot(Obj::Plant, 4))
        );
    }

    #[test]
    fn test_bad_condition_is_fault_37() {
        let entry = TravelEntry {
            condition: 612,
            verb: Motion::ALWAYS,
            dest: 1,
        };
        let err = entry.decode_condition(5).unwrap_err();
        assert_eq!(err.code(), 37);
        let unknown_object = TravelEntry {
            condition: 145,
            verb: Motion::ALWAYS,
            dest: 1,
        };
        assert!(unknown_object.decode_condition(5).is_err());
    }

    #[test]
    fn test_destinations() {
        let entry = |dest| TravelEntry {
            condition: 0,
            verb: Motion::ALWAYS,
            dest,
        };
        assert_eq!(entry(9).destination(1), Ok(Destination::Room(9)));
        assert_eq!(entry(0).destination(1), Ok(Destination::Room(0)));
        assert_eq!(entry(301).destination(1), Ok(Destination::Special(1)));
        assert_eq!(entry(593).destination(1), Ok(Destination::Message(93)));
        assert!(entry(200).destination(1).is_err());
    }
}
