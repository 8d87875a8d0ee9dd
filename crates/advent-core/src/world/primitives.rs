//! Object placement and world queries
//!
//! All placement goes through `carry`/`drop` so `held` always equals the
//! number of carried objects.

use crate::consts::{PIRATE, RoomId};
use crate::object::{Fixture, Obj, Place};
use crate::world::{RoomFlags, WorldState};

/// Liquid in the bottle or in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liquid {
    Water,
    Oil,
}

impl Liquid {
    pub fn obj(self) -> Obj {
        match self {
            Liquid::Water => Obj::Water,
            Liquid::Oil => Obj::Oil,
        }
    }

    /// Bottle state holding this liquid
    pub fn bottle_state(self) -> i8 {
        match self {
            Liquid::Water => 0,
            Liquid::Oil => 2,
        }
    }
}

impl WorldState {
    pub fn place(&self, obj: Obj) -> Place {
        self.places[obj.index()]
    }

    pub fn fixture(&self, obj: Obj) -> Fixture {
        self.fixtures[obj.index()]
    }

    pub fn prop(&self, obj: Obj) -> i8 {
        self.props[obj.index()]
    }

    pub fn set_prop(&mut self, obj: Obj, value: i8) {
        self.props[obj.index()] = value;
    }

    pub fn flags(&self, room: RoomId) -> RoomFlags {
        self.room_flags
            .get(usize::from(room))
            .copied()
            .unwrap_or_default()
    }

    pub fn is_forced(&self, room: RoomId) -> bool {
        self.flags(room).contains(RoomFlags::FORCED)
    }

    /// Pick an object up. Liquids ride along in the bottle and are never
    /// carried on their own.
    pub fn carry(&mut self, obj: Obj) {
        if matches!(obj, Obj::Water | Obj::Oil) || self.place(obj) == Place::Carried {
            return;
        }
        self.places[obj.index()] = Place::Carried;
        self.held += 1;
    }

    /// Put an object down at `dest`
    pub fn drop(&mut self, obj: Obj, dest: Place) {
        if dest == Place::Carried {
            self.carry(obj);
            return;
        }
        if self.place(obj) == Place::Carried {
            self.held = self.held.saturating_sub(1);
        }
        self.places[obj.index()] = dest;
    }

    /// Relocate an object, passing through the player's hands
    pub fn move_to(&mut self, obj: Obj, dest: Place) {
        if matches!(self.place(obj), Place::Room(_)) {
            self.carry(obj);
        }
        self.drop(obj, dest);
    }

    pub fn set_fixture(&mut self, obj: Obj, anchor: Fixture) {
        self.fixtures[obj.index()] = anchor;
    }

    pub fn destroy(&mut self, obj: Obj) {
        self.move_to(obj, Place::Nowhere);
    }

    /// Move an object into a room and return the hidden state that marks
    /// it as not yet seen there
    pub fn put(&mut self, obj: Obj, dest: RoomId, value: i8) -> i8 {
        self.move_to(obj, Place::from(dest));
        -1 - value
    }

    pub fn toting(&self, obj: Obj) -> bool {
        match obj {
            Obj::Water | Obj::Oil => {
                self.toting(Obj::Bottle) && self.liquid().map(Liquid::obj) == Some(obj)
            }
            _ => self.place(obj) == Place::Carried,
        }
    }

    /// Carried or lying in the current room
    pub fn here(&self, obj: Obj) -> bool {
        match obj {
            Obj::Water | Obj::Oil => {
                self.here(Obj::Bottle) && self.liquid().map(Liquid::obj) == Some(obj)
            }
            _ => self.place(obj) == Place::Room(self.location) || self.toting(obj),
        }
    }

    /// Lying in, or fixed at, the current room
    pub fn at(&self, obj: Obj) -> bool {
        self.place(obj) == Place::Room(self.location)
            || self.fixture(obj) == Fixture::Room(self.location)
    }

    /// What the bottle holds
    pub fn liquid(&self) -> Option<Liquid> {
        let state = self.prop(Obj::Bottle);
        let state = if state < 0 { -1 - state } else { state };
        match state {
            0 => Some(Liquid::Water),
            2 => Some(Liquid::Oil),
            _ => None,
        }
    }

    /// What liquid the current room offers
    pub fn liquid_at_location(&self) -> Option<Liquid> {
        let flags = self.flags(self.location);
        if !flags.contains(RoomFlags::LIQUID) {
            None
        } else if flags.contains(RoomFlags::OIL) {
            Some(Liquid::Oil)
        } else {
            Some(Liquid::Water)
        }
    }

    pub fn is_dark(&self) -> bool {
        let lit = self.flags(self.location).contains(RoomFlags::LIT)
            || (self.prop(Obj::Lamp) != 0 && self.here(Obj::Lamp));
        !lit
    }

    /// First dwarf (not the pirate) standing in the player's room
    pub fn dwarf_here(&self) -> Option<usize> {
        self.hostiles[..PIRATE]
            .iter()
            .position(|h| h.room != 0 && h.room == self.location)
    }

    /// Objects currently carried, in object order
    pub fn carried(&self) -> impl Iterator<Item = Obj> + '_ {
        use strum::IntoEnumIterator;
        Obj::iter().filter(|&o| self.place(o) == Place::Carried)
    }
}
