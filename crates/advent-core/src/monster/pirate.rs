//! The pirate
//!
//! Steals any treasure the player carries and hides it with his chest. If
//! the player has found every other treasure, he instead gives away where
//! the chest is.

use tracing::debug;

use crate::consts::*;
use crate::gameloop::Turn;
use crate::object::{Obj, Place};

/// The pyramid is left alone in the plover and dark rooms
fn spared(turn: &Turn<'_>, obj: Obj) -> bool {
    let world = &*turn.world;
    let here = Place::Room(world.pending_location);
    obj == Obj::Pyramid && (world.place(Obj::Pyramid) == here || world.place(Obj::Emerald) == here)
}

/// The pirate has caught up with the player
pub(crate) fn pirate_turn(turn: &mut Turn<'_>) {
    let world = &*turn.world;
    if world.pending_location == ROOM_CHEST || world.prop(Obj::Chest) >= 0 {
        return;
    }

    let mut in_view = 0;
    for obj in Obj::treasures() {
        if spared(turn, obj) {
            continue;
        }
        if turn.world.toting(obj) {
            steal(turn);
            return;
        }
        if turn.world.here(obj) {
            in_view += 1;
        }
    }

    let world = &*turn.world;
    let last_treasure = world.tally == world.lost_treasures + 1;
    if last_treasure
        && in_view == 0
        && world.place(Obj::Chest) == Place::Nowhere
        && world.here(Obj::Lamp)
        && world.prop(Obj::Lamp) == 1
    {
        turn.speak(186);
        let world = &mut *turn.world;
        world.move_to(Obj::Chest, Place::Room(ROOM_CHEST));
        world.move_to(Obj::Message, Place::Room(ROOM_MAZE_MESSAGE));
        retreat(turn);
        debug!("pirate leaves the chest");
        return;
    }

    let pirate = turn.world.hostiles[PIRATE];
    if pirate.prior != pirate.room && turn.world.rng.percent(20) {
        turn.speak(127);
    }
}

/// Take every loose treasure in the room or in hand to the chest room
fn steal(turn: &mut Turn<'_>) {
    turn.speak(128);
    let world = &mut *turn.world;
    if world.place(Obj::Message) == Place::Nowhere {
        world.move_to(Obj::Chest, Place::Room(ROOM_CHEST));
    }
    world.move_to(Obj::Message, Place::Room(ROOM_MAZE_MESSAGE));

    for obj in Obj::treasures() {
        if spared(turn, obj) {
            continue;
        }
        let world = &mut *turn.world;
        if world.at(obj) && world.fixture(obj).is_loose() {
            world.carry(obj);
        }
        if world.toting(obj) {
            world.drop(obj, Place::Room(ROOM_CHEST));
        }
    }
    debug!(room = turn.world.pending_location, "pirate steals");
    retreat(turn);
}

fn retreat(turn: &mut Turn<'_>) {
    let pirate = &mut turn.world.hostiles[PIRATE];
    pirate.room = ROOM_CHEST;
    pirate.prior = ROOM_CHEST;
    pirate.seen = false;
}
