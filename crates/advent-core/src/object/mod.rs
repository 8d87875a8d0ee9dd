//! Objects and where they are
//!
//! Every interactable thing in the cave is an [`Obj`]. Portable placement
//! lives in a [`Place`]; immovable objects additionally have a [`Fixture`]
//! anchor, which is how a grate or a bridge shows up on both sides.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use crate::consts::RoomId;

/// Size of per-object tables (index 0 unused)
pub const OBJ_SLOTS: usize = 65;

/// Object identifier
///
/// Discriminants are the classic object numbers; treasures start at 50.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
    FromRepr,
)]
#[repr(u8)]
pub enum Obj {
    Keys = 1,
    Lamp = 2,
    Grate = 3,
    Cage = 4,
    Rod = 5,
    Rod2 = 6,
    Steps = 7,
    Bird = 8,
    Door = 9,
    Pillow = 10,
    Snake = 11,
    Fissure = 12,
    Tablet = 13,
    Clam = 14,
    Oyster = 15,
    Magazine = 16,
    Dwarf = 17,
    Knife = 18,
    Food = 19,
    Bottle = 20,
    Water = 21,
    Oil = 22,
    Mirror = 23,
    Plant = 24,
    Plant2 = 25,
    Stalactite = 26,
    Shadow = 27,
    Axe = 28,
    Drawings = 29,
    Pirate = 30,
    Dragon = 31,
    Chasm = 32,
    Troll = 33,
    Troll2 = 34,
    Bear = 35,
    Message = 36,
    Volcano = 37,
    Vend = 38,
    Batteries = 39,
    Carpet = 40,
    Nugget = 50,
    Diamonds = 51,
    Silver = 52,
    Jewels = 53,
    Coins = 54,
    Chest = 55,
    Eggs = 56,
    Trident = 57,
    Vase = 58,
    Emerald = 59,
    Pyramid = 60,
    Pearl = 61,
    Rug = 62,
    Spices = 63,
    Chain = 64,
}

impl Obj {
    /// Index into per-object tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Object for a vocabulary or travel-table number
    pub fn from_code(code: u16) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    pub const fn is_treasure(self) -> bool {
        self as u8 >= Obj::Nugget as u8
    }

    /// All treasures, in object order
    pub fn treasures() -> impl Iterator<Item = Obj> {
        Obj::iter().filter(|o| o.is_treasure())
    }

    /// Points for a treasure left safely in the building
    pub const fn deposit_value(self) -> u32 {
        match self as u8 {
            n if n < Obj::Chest as u8 => 12,
            n if n == Obj::Chest as u8 => 14,
            _ => 16,
        }
    }
}

/// Where a portable object is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Place {
    /// Destroyed, or not yet in play
    #[default]
    Nowhere,
    /// In the player's hands
    Carried,
    Room(RoomId),
}

impl Place {
    pub fn room(self) -> Option<RoomId> {
        match self {
            Place::Room(r) => Some(r),
            _ => None,
        }
    }
}

impl From<RoomId> for Place {
    /// Room 0 is limbo
    fn from(room: RoomId) -> Self {
        if room == 0 { Place::Nowhere } else { Place::Room(room) }
    }
}

/// Second anchor of an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fixture {
    /// Portable
    #[default]
    Loose,
    /// Cannot be taken; only seen where its place is
    Pinned,
    /// Cannot be taken; also seen in this room
    Room(RoomId),
}

impl Fixture {
    pub fn is_loose(self) -> bool {
        self == Fixture::Loose
    }
}
