//! Water and oil: pouring, drinking, filling

use crate::action::{ActionResult, act, need_object};
use crate::gameloop::Turn;
use crate::object::{Fixture, Obj, Place};
use crate::world::Liquid;

/// Bottle state once emptied
const EMPTY: i8 = 1;

/// Empty the bottle here, onto whatever is in the way
pub fn pour(turn: &mut Turn<'_>) -> ActionResult {
    let world = &*turn.world;
    let mut obj = turn.cmd.object;
    if matches!(obj, None | Some(Obj::Bottle)) {
        obj = world.liquid().map(Liquid::obj);
    }
    let Some(obj) = obj else {
        need_object(turn);
        return Ok(());
    };
    turn.cmd.object = Some(obj);
    if !world.toting(obj) {
        return act(turn);
    }
    if !matches!(obj, Obj::Water | Obj::Oil) {
        turn.speak(78);
        return Ok(());
    }

    let world = &mut *turn.world;
    world.set_prop(Obj::Bottle, EMPTY);

    if world.at(Obj::Plant) {
        if obj != Obj::Water {
            turn.speak(112);
            return Ok(());
        }
        let growth = world.prop(Obj::Plant);
        turn.speak_item(Obj::Plant, growth + 1);
        let world = &mut *turn.world;
        let growth = (growth + 2) % 6;
        world.set_prop(Obj::Plant, growth);
        world.set_prop(Obj::Plant2, growth / 2);
        world.redescribe = true;
    } else if world.at(Obj::Door) {
        let oiled = i8::from(obj == Obj::Oil);
        world.set_prop(Obj::Door, oiled);
        turn.speak(113 + oiled as u16);
    } else {
        turn.speak(77);
    }
    Ok(())
}

/// `drink` with no object: the stream or the bottle
pub fn drink_here(turn: &mut Turn<'_>) -> ActionResult {
    let world = &*turn.world;
    let water_here = world.liquid_at_location() == Some(Liquid::Water);
    let water_in_bottle = world.liquid() == Some(Liquid::Water) && world.here(Obj::Bottle);
    if !water_here && !water_in_bottle {
        need_object(turn);
        return Ok(());
    }
    turn.cmd.object = Some(Obj::Water);
    drink(turn)
}

pub fn drink(turn: &mut Turn<'_>) -> ActionResult {
    let world = &mut *turn.world;
    if turn.cmd.object != Some(Obj::Water) {
        turn.speak(110);
    } else if world.liquid() != Some(Liquid::Water) || !world.here(Obj::Bottle) {
        return act(turn);
    } else {
        world.set_prop(Obj::Bottle, EMPTY);
        turn.speak(74);
    }
    Ok(())
}

/// `fill` with no object means the bottle
pub fn fill_here(turn: &mut Turn<'_>) -> ActionResult {
    fill(turn)
}

/// Fill the bottle (or, unwisely, the vase) from what flows here
pub fn fill(turn: &mut Turn<'_>) -> ActionResult {
    let world = &mut *turn.world;
    let source = world.liquid_at_location();

    let id = match turn.cmd.object {
        Some(Obj::Vase) => {
            if source.is_none() {
                144
            } else if !world.toting(Obj::Vase) {
                29
            } else {
                turn.speak(145);
                let world = &mut *turn.world;
                let loc = world.location;
                world.set_prop(Obj::Vase, 2);
                world.set_fixture(Obj::Vase, Fixture::Pinned);
                world.drop(Obj::Vase, Place::Room(loc));
                return Ok(());
            }
        }
        Some(obj) if obj != Obj::Bottle => return act(turn),
        None if !world.here(Obj::Bottle) => {
            need_object(turn);
            return Ok(());
        }
        _ => match source {
            _ if world.liquid().is_some() => 105,
            None => 106,
            Some(liquid) => {
                world.set_prop(Obj::Bottle, liquid.bottle_state());
                if liquid == Liquid::Oil { 108 } else { 107 }
            }
        },
    };
    turn.speak(id);
    Ok(())
}
