//! Vocabulary codes
//!
//! A vocabulary code is `class * 1000 + value`: class 0 is a motion, 1 an
//! object, 2 an action verb and 3 a special word with a canned reply.

use serde::{Deserialize, Serialize};

/// Grammar class of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    Motion,
    Object,
    Verb,
    Special,
}

/// A resolved word: its class and the value within that class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub class: WordClass,
    pub value: u16,
}

impl Word {
    /// Split a packed vocabulary code
    pub fn from_code(code: u16) -> Option<Self> {
        let class = match code / 1000 {
            0 => WordClass::Motion,
            1 => WordClass::Object,
            2 => WordClass::Verb,
            3 => WordClass::Special,
            _ => return None,
        };
        Some(Self {
            class,
            value: code % 1000,
        })
    }

    pub fn code(self) -> u16 {
        let class = match self.class {
            WordClass::Motion => 0,
            WordClass::Object => 1,
            WordClass::Verb => 2,
            WordClass::Special => 3,
        };
        class * 1000 + self.value
    }
}

/// One vocabulary table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabEntry<'a> {
    pub word: &'a str,
    pub code: u16,
}

/// Motion code, also used as the verb field of travel entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Motion(pub u16);

impl Motion {
    /// Travel-table wildcard: matches any motion
    pub const ALWAYS: Motion = Motion(1);
    pub const ROAD: Motion = Motion(2);
    pub const ENTER: Motion = Motion(3);
    pub const FOREST: Motion = Motion(6);
    pub const FORWARD: Motion = Motion(7);
    pub const BACK: Motion = Motion(8);
    pub const OUT: Motion = Motion(11);
    pub const BUILDING: Motion = Motion(12);
    pub const IN: Motion = Motion(19);
    pub const NULL: Motion = Motion(21);
    pub const UP: Motion = Motion(29);
    pub const DOWN: Motion = Motion(30);
    pub const LEFT: Motion = Motion(36);
    pub const RIGHT: Motion = Motion(37);
    pub const CRAWL: Motion = Motion(17);
    pub const EAST: Motion = Motion(43);
    pub const WEST: Motion = Motion(44);
    pub const NORTH: Motion = Motion(45);
    pub const SOUTH: Motion = Motion(46);
    pub const NORTHEAST: Motion = Motion(47);
    pub const SOUTHEAST: Motion = Motion(48);
    pub const SOUTHWEST: Motion = Motion(49);
    pub const NORTHWEST: Motion = Motion(50);
    pub const LOOK: Motion = Motion(57);
    pub const XYZZY: Motion = Motion(62);
    pub const DEPRESSION: Motion = Motion(63);
    pub const ENTRANCE: Motion = Motion(64);
    pub const PLUGH: Motion = Motion(65);
    pub const CAVE: Motion = Motion(67);

    /// One of the eight compass directions
    pub fn is_compass(self) -> bool {
        (Self::EAST.0..=Self::NORTHWEST.0).contains(&self.0)
    }

    /// Name used when listing maze exits
    pub fn compass_name(self) -> Option<&'static str> {
        Some(match self {
            Self::EAST => "east",
            Self::WEST => "west",
            Self::NORTH => "north",
            Self::SOUTH => "south",
            Self::NORTHEAST => "northeast",
            Self::SOUTHEAST => "southeast",
            Self::SOUTHWEST => "southwest",
            Self::NORTHWEST => "northwest",
            _ => return None,
        })
    }
}
