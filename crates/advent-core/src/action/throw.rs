//! Throwing things: treasure for the troll, food for the bear, the axe
//! at anything that moves

use tracing::debug;

use crate::action::{ActionResult, act, eat, fight, pickup};
use crate::consts::*;
use crate::gameloop::Turn;
use crate::object::{Fixture, Obj, Place};

/// Percent chance a thrown axe kills a dwarf
const AXE_HITS: u32 = 33;

pub fn throw(turn: &mut Turn<'_>) -> ActionResult {
    let Some(mut obj) = turn.cmd.object else {
        return act(turn);
    };
    let world = &*turn.world;
    if obj == Obj::Rod && world.toting(Obj::Rod2) && !world.toting(Obj::Rod) {
        obj = Obj::Rod2;
        turn.cmd.object = Some(obj);
    }
    if !world.toting(obj) {
        return act(turn);
    }

    if obj.is_treasure() && world.at(Obj::Troll) {
        // the troll takes the toll and leaves the bridge
        turn.speak(159);
        let world = &mut *turn.world;
        world.drop(obj, Place::Nowhere);
        world.move_to(Obj::Troll, Place::Nowhere);
        world.set_fixture(Obj::Troll, Fixture::Loose);
        world.move_to(Obj::Troll2, Place::Room(ROOM_CHASM_SW));
        world.set_fixture(Obj::Troll2, Fixture::Room(ROOM_CHASM_NE));
        return Ok(());
    }

    if obj == Obj::Food && world.here(Obj::Bear) {
        turn.cmd.object = Some(Obj::Bear);
        return eat::feed(turn);
    }

    if obj != Obj::Axe {
        return pickup::drop(turn);
    }

    let loc = world.location;
    let id = if let Some(dwarf) = world.dwarf_here().filter(|_| world.hostile_stage >= 2) {
        let world = &mut *turn.world;
        if world.rng.percent(AXE_HITS) {
            let hostile = &mut world.hostiles[dwarf];
            hostile.room = 0;
            hostile.seen = false;
            world.dwarves_killed += 1;
            debug!(dwarf, total = world.dwarves_killed, "dwarf killed");
            if world.dwarves_killed == 1 { 149 } else { 47 }
        } else {
            48
        }
    } else if world.at(Obj::Dragon) && world.prop(Obj::Dragon) == 0 {
        152
    } else if world.at(Obj::Troll) {
        158
    } else if world.here(Obj::Bear) && world.prop(Obj::Bear) == 0 {
        turn.speak(164);
        let world = &mut *turn.world;
        world.drop(Obj::Axe, Place::Room(loc));
        world.set_fixture(Obj::Axe, Fixture::Pinned);
        world.set_prop(Obj::Axe, 1);
        return Ok(());
    } else {
        turn.cmd.object = None;
        return fight::kill_here(turn);
    };

    turn.speak(id);
    turn.world.drop(Obj::Axe, Place::Room(loc));
    Ok(())
}
