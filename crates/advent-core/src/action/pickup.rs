//! Picking things up, putting them down, and taking stock

use strum::IntoEnumIterator;

use crate::action::{ActionResult, Candidates, act, liquid, need_object};
use crate::consts::*;
use crate::gameloop::Turn;
use crate::object::{Fixture, Obj, Place};

/// "OK"
const OK: u16 = 54;

/// `take` with no object: works only if exactly one thing lies here
pub fn take_here(turn: &mut Turn<'_>) -> ActionResult {
    let world = &*turn.world;
    let here = Place::Room(world.location);
    let lying = Obj::iter()
        .filter(|&obj| world.place(obj) == here)
        .fold(Candidates::None, Candidates::add);

    match lying {
        Candidates::Exactly(obj) if !(world.dwarf_here().is_some() && world.hostile_stage >= 2) => {
            turn.cmd.object = Some(obj);
            take(turn)
        }
        _ => {
            need_object(turn);
            Ok(())
        }
    }
}

/// Pick up the current object
pub fn take(turn: &mut Turn<'_>) -> ActionResult {
    let Some(mut obj) = turn.cmd.object else {
        return take_here(turn);
    };
    let world = &*turn.world;
    if world.toting(obj) {
        return act(turn);
    }

    if !world.fixture(obj).is_loose() {
        let id = if obj == Obj::Plant && world.prop(Obj::Plant) <= 0 {
            115
        } else if obj == Obj::Bear && world.prop(Obj::Bear) == 1 {
            169
        } else if obj == Obj::Chain && world.prop(Obj::Bear) != 0 {
            170
        } else {
            25
        };
        turn.speak(id);
        return Ok(());
    }

    if matches!(obj, Obj::Water | Obj::Oil) {
        let in_bottle = world.here(Obj::Bottle) && world.liquid().map(|l| l.obj()) == Some(obj);
        obj = Obj::Bottle;
        turn.cmd.object = Some(obj);
        if !in_bottle {
            if world.toting(Obj::Bottle) && world.prop(Obj::Bottle) == 1 {
                return liquid::fill(turn);
            }
            let id = if !world.toting(Obj::Bottle) { 104 } else { 105 };
            turn.speak(id);
            return Ok(());
        }
    }

    if world.held >= MAX_CARRY {
        turn.speak(92);
        return Ok(());
    }

    if obj == Obj::Bird && world.prop(Obj::Bird) == 0 {
        if world.toting(Obj::Rod) {
            turn.speak(26);
            return Ok(());
        }
        if !world.toting(Obj::Cage) {
            turn.speak(27);
            return Ok(());
        }
        turn.world.set_prop(Obj::Bird, 1);
    }

    let world = &mut *turn.world;
    if matches!(obj, Obj::Bird | Obj::Cage) && world.prop(Obj::Bird) != 0 {
        // the bird and its cage travel together
        let other = if obj == Obj::Bird { Obj::Cage } else { Obj::Bird };
        world.carry(other);
    }
    world.carry(obj);
    turn.speak(OK);
    Ok(())
}

/// Put the current object down here
pub fn drop(turn: &mut Turn<'_>) -> ActionResult {
    let Some(mut obj) = turn.cmd.object else {
        need_object(turn);
        return Ok(());
    };
    let world = &*turn.world;
    if obj == Obj::Rod && world.toting(Obj::Rod2) && !world.toting(Obj::Rod) {
        obj = Obj::Rod2;
    }
    if !world.toting(obj) {
        return act(turn);
    }

    let loc = world.location;
    let mut reply = Some(OK);

    if obj == Obj::Bird && world.here(Obj::Snake) {
        turn.speak(30);
        if turn.world.closing.is_closed() {
            super::fight::dwarf_end(turn);
            return Ok(());
        }
        let world = &mut *turn.world;
        world.destroy(Obj::Snake);
        world.set_prop(Obj::Snake, 1);
    } else if obj == Obj::Coins && world.here(Obj::Vend) {
        let world = &mut *turn.world;
        world.destroy(Obj::Coins);
        world.drop(Obj::Batteries, Place::Room(loc));
        turn.speak_item(Obj::Batteries, 0);
        return Ok(());
    } else if obj == Obj::Bird && world.at(Obj::Dragon) && world.prop(Obj::Dragon) == 0 {
        turn.speak(154);
        let world = &mut *turn.world;
        world.destroy(Obj::Bird);
        world.set_prop(Obj::Bird, 0);
        if world.place(Obj::Snake) != Place::Nowhere {
            world.lost_treasures += 1;
        }
        return Ok(());
    } else if obj == Obj::Bear && world.at(Obj::Troll) {
        reply = Some(163);
        let world = &mut *turn.world;
        world.move_to(Obj::Troll, Place::Nowhere);
        world.set_fixture(Obj::Troll, Fixture::Loose);
        world.move_to(Obj::Troll2, Place::Room(ROOM_CHASM_SW));
        world.set_fixture(Obj::Troll2, Fixture::Room(ROOM_CHASM_NE));
        world.set_prop(Obj::Troll, 2);
    } else if obj == Obj::Vase && loc != ROOM_SOFT {
        let state = if world.at(Obj::Pillow) { 0 } else { 2 };
        turn.world.set_prop(Obj::Vase, state);
        turn.speak_item(Obj::Vase, state + 1);
        if state != 0 {
            turn.world.set_fixture(Obj::Vase, Fixture::Pinned);
        }
        reply = None;
    }

    let world = &mut *turn.world;
    if matches!(obj, Obj::Water | Obj::Oil) {
        obj = Obj::Bottle;
    }
    if obj == Obj::Cage && world.prop(Obj::Bird) != 0 {
        world.drop(Obj::Bird, Place::Room(loc));
    }
    if obj == Obj::Bird {
        world.set_prop(Obj::Bird, 0);
    }
    world.drop(obj, Place::Room(loc));
    if let Some(id) = reply {
        turn.speak(id);
    }
    Ok(())
}

/// List what the player is carrying
pub fn inventory(turn: &mut Turn<'_>) {
    let content = turn.content;
    let carried: Vec<Obj> = turn
        .world
        .carried()
        .filter(|&obj| obj != Obj::Bear)
        .collect();

    if carried.is_empty() {
        if !turn.world.toting(Obj::Bear) {
            turn.speak(98);
        }
    } else {
        turn.out
            .extend(content.message(99).iter().map(|l| (*l).to_string()));
        for obj in carried {
            if let Some(name) = content.item_description(obj, -1) {
                turn.say(name);
            }
        }
        turn.say("");
    }

    if turn.world.toting(Obj::Bear) {
        turn.speak(141);
    }
}

/// `find` or `inventory` with an object
pub fn find(turn: &mut Turn<'_>) -> ActionResult {
    let Some(obj) = turn.cmd.object else {
        need_object(turn);
        return Ok(());
    };
    let world = &*turn.world;
    let id = if world.toting(obj) {
        24
    } else if world.closing.is_closed() {
        138
    } else if (obj == Obj::Dwarf && world.dwarf_here().is_some() && world.hostile_stage >= 2)
        || world.at(obj)
        || (world.liquid().map(|l| l.obj()) == Some(obj) && world.here(Obj::Bottle))
        || world.liquid_at_location().map(|l| l.obj()) == Some(obj)
    {
        94
    } else {
        return act(turn);
    };
    turn.speak(id);
    Ok(())
}
